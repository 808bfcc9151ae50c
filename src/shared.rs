use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::session::{RoundError, SessionHandle, SessionManager};

/// Shared application state containing all dependencies
#[derive(Clone)]
pub struct AppState {
    pub sessions: SessionManager,
}

impl AppState {
    pub fn new(sessions: SessionManager) -> Self {
        Self { sessions }
    }

    pub async fn find_session(&self, session_id: &str) -> Result<SessionHandle, AppError> {
        self.sessions
            .get(session_id)
            .await
            .ok_or_else(|| AppError::NotFound(format!("Session not found: {}", session_id)))
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unprocessable: {0}")]
    Unprocessable(String),
}

impl From<RoundError> for AppError {
    fn from(err: RoundError) -> Self {
        AppError::Unprocessable(err.to_string())
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Unprocessable(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Unprocessable(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
        };

        let body = Json(json!({
            "error": error_message
        }));

        (status, body).into_response()
    }
}
