use axum::{http::StatusCode, response::IntoResponse, response::Response, Json};
use serde_json::json;
use thiserror::Error;

/// Domain errors surfaced by the core. Generation failures never appear here;
/// the generation service resolves them to deterministic fallbacks internally.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("profile not found: {0}")]
    InvalidProfile(String),

    #[error("unknown match: {0}")]
    UnknownMatch(String),

    #[error("no signed-in profile")]
    NoSession,

    #[error("no edit in progress")]
    NoDraft,

    #[error("an edit is already in progress")]
    DraftInProgress,

    #[error("validation failed: {0}")]
    Validation(String),

    #[error("session persistence failed: {0}")]
    Persistence(String),
}

impl CoreError {
    fn status(&self) -> StatusCode {
        match self {
            CoreError::InvalidProfile(_) | CoreError::UnknownMatch(_) => StatusCode::NOT_FOUND,
            CoreError::NoSession => StatusCode::UNAUTHORIZED,
            CoreError::NoDraft | CoreError::DraftInProgress => StatusCode::CONFLICT,
            CoreError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            CoreError::Persistence(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for CoreError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

pub type CoreResult<T> = Result<T, CoreError>;
