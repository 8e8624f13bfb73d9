//! Site document API endpoints.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde_json::Value;

use super::{ApiResponse, ApiResult};
use crate::errors::AppError;
use crate::models::SECTION_KEYS;
use crate::AppState;

/// GET /api/site-data - Get the full site document.
pub async fn get_site_data(State(state): State<AppState>) -> ApiResult<Json<Value>> {
    match state.store.load_site_data().await? {
        Some(document) => Ok(Json(document)),
        None => Err(AppError::NotFound("Data file not found".to_string())),
    }
}

/// POST /api/site-data - Replace the full site document.
pub async fn save_site_data(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<ApiResponse<Value>> {
    let Json(document) = payload?;

    let Some(sections) = document.as_object() else {
        return Err(AppError::Validation(
            "Site data must be a JSON object".to_string(),
        ));
    };

    let missing: Vec<&str> = SECTION_KEYS
        .iter()
        .copied()
        .filter(|key| !sections.contains_key(*key))
        .collect();
    if !missing.is_empty() {
        tracing::warn!("Saving site data without sections: {}", missing.join(", "));
    }

    state.store.save_site_data(&document).await?;
    tracing::info!("Site data saved");

    Ok(ApiResponse::new(document))
}
