//! Mock authentication. Any well-formed credentials are accepted; the
//! signed-in profile and a fixed token are written to key-value storage
//! and their presence is what "logged in" means.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

use crate::error::{DairyError, DairyResult};

pub mod storage;

pub use storage::{FileKv, KeyValueStore, MemoryKv};

pub const USER_KEY: &str = "user";
pub const TOKEN_KEY: &str = "token";
pub const PLACEHOLDER_TOKEN: &str = "dairy-hub-session-token";
pub const MIN_PASSWORD_LEN: usize = 6;

const MSG_MISSING_FIELDS: &str = "Please fill in all fields";
const MSG_BAD_CREDENTIALS: &str = "Invalid email or password";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub role: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub user: UserProfile,
    pub token: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct ResetRequest {
    #[serde(default)]
    pub email: String,
}

pub struct AuthService {
    storage: Arc<dyn KeyValueStore>,
    delay: Duration,
}

impl AuthService {
    pub fn new(storage: Arc<dyn KeyValueStore>, delay: Duration) -> Self {
        Self { storage, delay }
    }

    /// Stands in for the network round trip of a real identity provider.
    async fn simulate_round_trip(&self) {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
    }

    fn check_credentials(email: &str, password: &str) -> DairyResult<()> {
        if email.trim().is_empty() || password.is_empty() {
            return Err(DairyError::Auth(MSG_MISSING_FIELDS.to_string()));
        }
        // Counted the way a browser reports `password.length`.
        if password.encode_utf16().count() < MIN_PASSWORD_LEN {
            return Err(DairyError::Auth(MSG_BAD_CREDENTIALS.to_string()));
        }
        Ok(())
    }

    fn persist(&self, user: UserProfile) -> DairyResult<Session> {
        self.storage
            .set(USER_KEY, &serde_json::to_string(&user)?)?;
        self.storage.set(TOKEN_KEY, PLACEHOLDER_TOKEN)?;
        Ok(Session {
            user,
            token: PLACEHOLDER_TOKEN.to_string(),
        })
    }

    pub async fn login(&self, request: &LoginRequest) -> DairyResult<Session> {
        self.simulate_round_trip().await;
        Self::check_credentials(&request.email, &request.password)?;

        let email = request.email.trim().to_string();
        let name = email.split('@').next().unwrap_or_default().to_string();
        let session = self.persist(UserProfile {
            name,
            email,
            role: "admin".to_string(),
        })?;
        tracing::info!("User {} logged in", session.user.email);
        Ok(session)
    }

    pub async fn signup(&self, request: &SignupRequest) -> DairyResult<Session> {
        self.simulate_round_trip().await;
        if request.name.trim().is_empty() {
            return Err(DairyError::Auth(MSG_MISSING_FIELDS.to_string()));
        }
        Self::check_credentials(&request.email, &request.password)?;

        let session = self.persist(UserProfile {
            name: request.name.trim().to_string(),
            email: request.email.trim().to_string(),
            role: "admin".to_string(),
        })?;
        tracing::info!("User {} signed up", session.user.email);
        Ok(session)
    }

    /// Always succeeds once an email is given; no mail is actually sent.
    pub async fn reset_password(&self, request: &ResetRequest) -> DairyResult<String> {
        self.simulate_round_trip().await;
        if request.email.trim().is_empty() {
            return Err(DairyError::Auth("Please enter your email".to_string()));
        }
        tracing::info!("Password reset requested for {}", request.email.trim());
        Ok(format!(
            "Password reset instructions have been sent to {}",
            request.email.trim()
        ))
    }

    pub fn logout(&self) -> DairyResult<()> {
        self.storage.remove(USER_KEY)?;
        self.storage.remove(TOKEN_KEY)?;
        tracing::info!("User logged out");
        Ok(())
    }

    /// The stored session, present only when both keys are set.
    pub fn current_session(&self) -> DairyResult<Option<Session>> {
        let user = self.storage.get(USER_KEY)?;
        let token = self.storage.get(TOKEN_KEY)?;
        match (user, token) {
            (Some(user), Some(token)) => Ok(Some(Session {
                user: serde_json::from_str(&user)?,
                token,
            })),
            _ => Ok(None),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self.current_session(), Ok(Some(_)))
    }
}
