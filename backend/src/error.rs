use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Serialize, Serializer};
use serde_json::json;
use thiserror::Error;

use crate::validation::FieldErrors;

#[derive(Error, Debug)]
pub enum DairyError {
    #[error("{entity} not found: {key}")]
    NotFound { entity: &'static str, key: String },

    #[error("Duplicate {field}: {value}")]
    Duplicate { field: &'static str, value: String },

    #[error("Validation error: {0}")]
    Validation(FieldErrors),

    #[error("{0}")]
    Auth(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl DairyError {
    pub fn not_found(entity: &'static str, key: impl ToString) -> Self {
        DairyError::NotFound {
            entity,
            key: key.to_string(),
        }
    }
}

impl Serialize for DairyError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.to_string().as_ref())
    }
}

pub type DairyResult<T> = Result<T, DairyError>;

impl IntoResponse for DairyError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            DairyError::NotFound { .. } => (
                StatusCode::NOT_FOUND,
                json!({ "success": false, "error": self.to_string() }),
            ),
            DairyError::Duplicate { .. } => (
                StatusCode::CONFLICT,
                json!({ "success": false, "error": self.to_string() }),
            ),
            DairyError::Validation(ref fields) => {
                tracing::warn!("Rejected form input: {}", fields);
                (
                    StatusCode::BAD_REQUEST,
                    json!({
                        "success": false,
                        "error": "Please correct the highlighted fields",
                        "fields": fields,
                    }),
                )
            }
            DairyError::Auth(msg) => (
                StatusCode::UNAUTHORIZED,
                json!({ "success": false, "error": msg }),
            ),
            DairyError::Io(ref e) => {
                tracing::error!("IO Error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "success": false, "error": "Storage is unavailable" }),
                )
            }
            _ => {
                tracing::error!("Unhandled Error: {:?}", self);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "success": false, "error": "An unexpected error occurred" }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
