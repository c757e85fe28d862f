use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;
use tracing::error;

#[derive(Debug, ThisError)]
pub enum TriviaError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// A required body field was absent. Kept apart from `NotFound` so the
    /// error mapper decides the status code in one place.
    #[error("Missing required field `{0}`")]
    MissingField(&'static str),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unprocessable entity: {0}")]
    UnprocessableEntity(String),

    #[error("Database error: {0}")]
    DatabaseError(#[from] SqlxError),

    #[error("Configuration error: {0}")]
    Config(#[from] figment::Error),
}

impl TriviaError {
    pub fn not_found(what: impl Into<String>) -> Self {
        TriviaError::NotFound(what.into())
    }

    /// HTTP status the error maps to.
    ///
    /// `MissingField` answers 404 rather than 400: trivia clients already
    /// treat a 404 from `POST /questions` as "question rejected".
    pub fn status(&self) -> StatusCode {
        match self {
            TriviaError::NotFound(_) | TriviaError::MissingField(_) => StatusCode::NOT_FOUND,
            TriviaError::BadRequest(_) => StatusCode::BAD_REQUEST,
            TriviaError::UnprocessableEntity(_) => StatusCode::UNPROCESSABLE_ENTITY,
            TriviaError::DatabaseError(_) | TriviaError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for TriviaError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        let message = match status {
            StatusCode::NOT_FOUND => "resource not found",
            StatusCode::BAD_REQUEST => "bad request",
            StatusCode::UNPROCESSABLE_ENTITY => "unprocessable entity",
            _ => {
                error!(error = %self, "request failed with internal error");
                "internal server error"
            }
        };
        let body = ApiErrorResponse {
            success: false,
            error: status.as_u16(),
            message: message.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// Standardized API error envelope.
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub success: bool,
    pub error: u16,
    pub message: String,
}
