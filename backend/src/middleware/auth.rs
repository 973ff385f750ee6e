use axum::{
    extract::{Request, State},
    http::{header, StatusCode},
    middleware::Next,
    response::Response,
};

use crate::state::AppState;

const PUBLIC_ROUTES: [&str; 5] = [
    "/api/ping",
    "/api/auth/login",
    "/api/auth/signup",
    "/api/auth/reset",
    "/api/auth/check",
];

pub fn is_public(path: &str) -> bool {
    !path.starts_with("/api/") || PUBLIC_ROUTES.contains(&path)
}

/// Lets a protected request through only when a session is stored and the
/// bearer token matches it. The session is attached to the request.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    if is_public(request.uri().path()) {
        return Ok(next.run(request).await);
    }

    let token = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(str::to_string)
        .ok_or(StatusCode::UNAUTHORIZED)?;

    let session = match state.auth.current_session() {
        Ok(Some(session)) => session,
        Ok(None) => return Err(StatusCode::UNAUTHORIZED),
        Err(e) => {
            tracing::error!("Failed to read session: {}", e);
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    if session.token != token {
        tracing::warn!("Rejected request to {} with a stale token", request.uri().path());
        return Err(StatusCode::UNAUTHORIZED);
    }

    request.extensions_mut().insert(session);
    Ok(next.run(request).await)
}
