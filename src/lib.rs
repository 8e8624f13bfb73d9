//! Brand Site Backend
//!
//! JSON-file persistence for a personal brand website: the site content
//! document, visitor contact messages, and the content store the admin panel
//! edits through.

pub mod api;
pub mod config;
pub mod errors;
pub mod models;
pub mod storage;
pub mod store;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use storage::JsonStore;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<JsonStore>,
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        // Site document
        .route(
            "/site-data",
            get(api::get_site_data).post(api::save_site_data),
        )
        // Messages
        .route("/messages", get(api::list_messages))
        .route("/contact", post(api::submit_message))
        // Dashboard
        .route("/stats", get(api::get_stats));

    // Health check
    let health_routes = Router::new().route("/health", get(health_check));

    Router::new()
        .nest("/api", api_routes)
        .merge(health_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}
