use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use crate::QuizError;

/// Error returned by HTTP handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A query parameter failed validation.
    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Quiz(#[from] QuizError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::Quiz(QuizError::InvalidArgument(_)) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            ApiError::Quiz(QuizError::Load(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = if status.is_server_error() {
            tracing::error!(error = %self, "failed to fetch questions");
            format!("Error fetching questions: {}", self)
        } else {
            self.to_string()
        };

        (status, Json(json!({ "detail": detail }))).into_response()
    }
}
