use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::app::features::contact::format::FormatError;
use crate::app::mail::EmailError;

/// Application error type for unified error handling across the app.
#[derive(Debug)]
pub enum AppError {
    /// Validation errors (400 Bad Request) - invalid input data
    Validation(String),

    /// Request body could not be parsed (400 Bad Request)
    MalformedRequest,

    /// Message rendering errors (500 Internal Server Error)
    Format(FormatError),

    /// Mail delivery errors (500 Internal Server Error)
    Mail(EmailError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::MalformedRequest => (
                StatusCode::BAD_REQUEST,
                "Malformed request body".to_string(),
            ),
            AppError::Format(err) => {
                tracing::error!(%err, "failed to render inquiry email");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to send email".to_string(),
                )
            }
            AppError::Mail(err) => {
                tracing::error!(%err, "failed to send inquiry email");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to send email".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

impl From<crate::app::domain::SubmissionError> for AppError {
    fn from(err: crate::app::domain::SubmissionError) -> Self {
        AppError::Validation(err.to_string())
    }
}
