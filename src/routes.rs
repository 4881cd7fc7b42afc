use std::sync::Arc;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::{Value, json};
use tracing::{info, warn};

use crate::{error::AppError, feedback::FeedbackRecord, state::AppState};

/// Accepts one feedback submission: validate, insert, 201.
///
/// Validation failures never reach the store. A store failure is reported
/// generically; the cause only goes to the log.
pub async fn feedback_handler(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload.map_err(|rejection| {
        warn!("Rejected feedback body: {}", rejection.body_text());
        AppError::MalformedBody
    })?;

    let record = FeedbackRecord::from_payload(&payload)?;

    let id = state.store.insert(&record).await?;
    info!("Stored {} feedback for {}", record.kind.as_str(), record.page);

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Feedback submitted successfully",
            "id": id,
        })),
    ))
}
