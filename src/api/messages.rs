//! Contact message API endpoints.

use axum::{extract::rejection::JsonRejection, extract::State, Json};

use super::{Ack, ApiResult};
use crate::errors::AppError;
use crate::models::{MessageRecord, SubmitMessageRequest};
use crate::AppState;

/// GET /api/messages - List all messages, newest first.
pub async fn list_messages(State(state): State<AppState>) -> Json<Vec<MessageRecord>> {
    Json(state.store.list_messages().await)
}

/// POST /api/contact - Submit a contact message.
pub async fn submit_message(
    State(state): State<AppState>,
    payload: Result<Json<SubmitMessageRequest>, JsonRejection>,
) -> ApiResult<Ack> {
    let Json(request) = payload?;

    // Validate required fields
    let missing = request.missing_fields();
    if !missing.is_empty() {
        return Err(AppError::Validation(format!(
            "Missing required fields: {}",
            missing.join(", ")
        )));
    }

    let record = state.store.append_message(request.into_record()).await?;
    tracing::info!(id = %record.id, kind = %record.kind, "Contact message saved");

    Ok(Ack::new("Message saved successfully"))
}
