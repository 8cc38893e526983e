use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;

use crate::api::handlers;
use crate::inference::InferenceClient;

/// Read-only state shared by every request; nothing here changes after startup.
pub struct AppState {
    pub client: InferenceClient,
    pub default_prompt: String,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/generate", post(handlers::generate))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
