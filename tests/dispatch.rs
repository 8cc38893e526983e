mod common;

use std::time::Duration;

use axum::http::StatusCode;
use serde_json::json;

use hf_image_generator::inference::{TransportErrorKind, UNKNOWN_API_ERROR};
use hf_image_generator::{InferenceClient, InferenceOutcome, Prompt};

use common::{closed_address, config_for, spawn_upstream, TEST_TOKEN};

const PNG_BYTES: &[u8] = b"\x89PNG\r\n\x1a\n\x00\x00\x00\rIHDR";

#[tokio::test]
async fn ok_response_yields_exact_image_bytes() {
    let (url, seen) = spawn_upstream(StatusCode::OK, PNG_BYTES, Duration::ZERO).await;
    let client = InferenceClient::new(&config_for(&url)).unwrap();

    let outcome = client.dispatch(&Prompt::parse("a red balloon").unwrap()).await;
    assert_eq!(outcome, InferenceOutcome::Image(PNG_BYTES.to_vec()));

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].authorization.as_deref(), Some(format!("Bearer {}", TEST_TOKEN).as_str()));
    assert_eq!(seen[0].content_type.as_deref(), Some("application/json"));
    assert_eq!(seen[0].body, json!({"inputs": "a red balloon"}));
}

#[tokio::test]
async fn api_error_message_is_taken_from_error_field() {
    let (url, _) = spawn_upstream(
        StatusCode::SERVICE_UNAVAILABLE,
        br#"{"error":"model loading"}"#,
        Duration::ZERO,
    )
    .await;
    let client = InferenceClient::new(&config_for(&url)).unwrap();

    let outcome = client.dispatch(&Prompt::parse("x").unwrap()).await;
    assert_eq!(
        outcome,
        InferenceOutcome::ApiError { status: 503, message: "model loading".into() }
    );
}

#[tokio::test]
async fn api_error_without_error_field_uses_placeholder() {
    let (url, _) = spawn_upstream(
        StatusCode::BAD_REQUEST,
        br#"{"detail":"nope"}"#,
        Duration::ZERO,
    )
    .await;
    let client = InferenceClient::new(&config_for(&url)).unwrap();

    let outcome = client.dispatch(&Prompt::parse("x").unwrap()).await;
    assert_eq!(
        outcome,
        InferenceOutcome::ApiError { status: 400, message: UNKNOWN_API_ERROR.into() }
    );
}

#[tokio::test]
async fn slow_endpoint_times_out_once() {
    let (url, seen) = spawn_upstream(StatusCode::OK, PNG_BYTES, Duration::from_secs(3)).await;
    let mut config = config_for(&url);
    config.request_timeout = Duration::from_millis(200);
    let client = InferenceClient::new(&config).unwrap();

    let outcome = client.dispatch(&Prompt::parse("x").unwrap()).await;
    match outcome {
        InferenceOutcome::TransportError { kind, .. } => assert_eq!(kind, TransportErrorKind::Timeout),
        other => panic!("expected timeout, got {:?}", other),
    }
    // no retry
    assert_eq!(seen.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn refused_connection_is_connection_failed() {
    let url = format!("http://{}/models/test", closed_address());
    let client = InferenceClient::new(&config_for(&url)).unwrap();

    let outcome = client.dispatch(&Prompt::parse("x").unwrap()).await;
    match outcome {
        InferenceOutcome::TransportError { kind, .. } => {
            assert_eq!(kind, TransportErrorKind::ConnectionFailed)
        }
        other => panic!("expected connection failure, got {:?}", other),
    }
}

#[tokio::test]
async fn malformed_url_is_other_transport_error() {
    let client = InferenceClient::new(&config_for("not a url")).unwrap();

    let outcome = client.dispatch(&Prompt::parse("x").unwrap()).await;
    match outcome {
        InferenceOutcome::TransportError { kind, ref detail } => {
            assert_eq!(kind, TransportErrorKind::Other);
            assert!(!detail.is_empty());
        }
        other => panic!("expected other transport error, got {:?}", other),
    }
}
