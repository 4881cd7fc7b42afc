use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::{database::StoreError, feedback::ValidationError};

/// Everything the feedback endpoint can fail with. Client faults carry the
/// offending field's message; the store's failure cause is logged and never
/// put in a response body.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("request body is not valid JSON")]
    MalformedBody,

    #[error("Error submitting feedback")]
    Persistence(#[from] StoreError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation(details) => (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "error": "Invalid feedback",
                    "details": details.to_string(),
                })),
            )
                .into_response(),

            AppError::MalformedBody => (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "error": "Invalid JSON",
                    "details": "The request body must be valid JSON",
                })),
            )
                .into_response(),

            AppError::Persistence(cause) => {
                error!("Error processing feedback: {cause}");

                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "message": "Error submitting feedback" })),
                )
                    .into_response()
            }
        }
    }
}
