//! Axum request handlers for the single-page front-end.
use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::json;

use crate::api::page;
use crate::api::routes::AppState;
use crate::ui::{handle_click, sniff_content_type, Feedback};

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    #[serde(default)]
    pub prompt: String,
}

pub async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(page::render(&state.default_prompt))
}

pub async fn generate(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<GenerateRequest>,
) -> Response {
    match handle_click(&state.client, &payload.prompt).await {
        Feedback::Image { bytes, .. } => {
            let content_type = sniff_content_type(&bytes);
            ([(header::CONTENT_TYPE, content_type)], bytes).into_response()
        }
        Feedback::Warning(message) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({"level": "warning", "message": message})),
        )
            .into_response(),
        Feedback::Error(message) => {
            tracing::error!("Generation failed: {}", message);
            (
                StatusCode::BAD_GATEWAY,
                Json(json!({"level": "error", "message": message})),
            )
                .into_response()
        }
    }
}
