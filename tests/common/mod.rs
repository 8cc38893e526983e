#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    body::Bytes,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    routing::post,
    Router,
};

use hf_image_generator::Config;

pub const TEST_TOKEN: &str = "hf_test_token";

/// What the fake endpoint saw, one entry per request.
#[derive(Debug, Clone)]
pub struct Seen {
    pub authorization: Option<String>,
    pub content_type: Option<String>,
    pub body: serde_json::Value,
}

pub type SeenLog = Arc<Mutex<Vec<Seen>>>;

/// Start a fake inference endpoint on an ephemeral port that always answers
/// `status` with `body`, after `delay`.
pub async fn spawn_upstream(
    status: StatusCode,
    body: &'static [u8],
    delay: Duration,
) -> (String, SeenLog) {
    let seen: SeenLog = Arc::new(Mutex::new(Vec::new()));
    let log = seen.clone();
    let app = Router::new().route(
        "/models/test",
        post(move |headers: HeaderMap, payload: Bytes| {
            let log = log.clone();
            async move {
                log.lock().unwrap().push(Seen {
                    authorization: header(&headers, "authorization"),
                    content_type: header(&headers, "content-type"),
                    body: serde_json::from_slice(&payload).unwrap_or(serde_json::Value::Null),
                });
                tokio::time::sleep(delay).await;
                (status, body).into_response()
            }
        }),
    );

    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::Server::from_tcp(listener)
            .unwrap()
            .serve(app.into_make_service())
            .await
            .unwrap();
    });
    (format!("http://{}/models/test", addr), seen)
}

/// An address nothing is listening on.
pub fn closed_address() -> SocketAddr {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    addr
}

pub fn config_for(api_url: &str) -> Config {
    let api_url = api_url.to_string();
    Config::from_lookup(move |key| match key {
        "HUGGINGFACE_TOKEN" => Some(TEST_TOKEN.to_string()),
        "HF_API_URL" => Some(api_url.clone()),
        _ => None,
    })
    .unwrap()
}

fn header(headers: &HeaderMap, name: &str) -> Option<String> {
    headers.get(name).and_then(|v| v.to_str().ok()).map(str::to_string)
}
