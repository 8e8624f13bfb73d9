//! Dashboard statistics endpoint.

use axum::extract::State;
use serde_json::Value;

use super::{ApiResponse, ApiResult};
use crate::models::DashboardStats;
use crate::AppState;

/// GET /api/stats - Article and message counts for the admin dashboard.
pub async fn get_stats(State(state): State<AppState>) -> ApiResult<ApiResponse<DashboardStats>> {
    let document = state.store.load_site_data().await?.unwrap_or(Value::Null);
    let message_count = state.store.load_raw_messages().await.len();

    Ok(ApiResponse::new(DashboardStats::collect(
        &document,
        message_count,
    )))
}
