use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;

use crate::auth::{AuthService, LoginRequest, ResetRequest, Session, SignupRequest, UserProfile};
use crate::error::DairyResult;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthStatus {
    pub authenticated: bool,
    pub user: Option<UserProfile>,
}

pub async fn login(
    State(auth): State<Arc<AuthService>>,
    Json(payload): Json<LoginRequest>,
) -> DairyResult<Json<Session>> {
    Ok(Json(auth.login(&payload).await?))
}

pub async fn signup(
    State(auth): State<Arc<AuthService>>,
    Json(payload): Json<SignupRequest>,
) -> DairyResult<Json<Session>> {
    Ok(Json(auth.signup(&payload).await?))
}

pub async fn reset_password(
    State(auth): State<Arc<AuthService>>,
    Json(payload): Json<ResetRequest>,
) -> DairyResult<Json<String>> {
    Ok(Json(auth.reset_password(&payload).await?))
}

pub async fn logout(State(auth): State<Arc<AuthService>>) -> DairyResult<Json<bool>> {
    auth.logout()?;
    Ok(Json(true))
}

pub async fn check_auth_status(
    State(auth): State<Arc<AuthService>>,
) -> DairyResult<Json<AuthStatus>> {
    let session = auth.current_session()?;
    Ok(Json(AuthStatus {
        authenticated: session.is_some(),
        user: session.map(|s| s.user),
    }))
}
