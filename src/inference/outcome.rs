//! Classification of one inference attempt.
use serde_json::Value;

/// Message used when an error response carries no `error` field.
pub const UNKNOWN_API_ERROR: &str = "Unknown error";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportErrorKind {
    Timeout,
    ConnectionFailed,
    Other,
}

/// Result of exactly one request to the inference endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InferenceOutcome {
    /// Raw response body of a 200. Not decoded or checked.
    Image(Vec<u8>),
    /// Non-200 answer from the endpoint.
    ApiError { status: u16, message: String },
    /// The request never produced a usable answer.
    TransportError { kind: TransportErrorKind, detail: String },
}

impl InferenceOutcome {
    /// Classify a completed HTTP exchange.
    pub fn from_response(status: u16, body: &[u8]) -> Self {
        if status == 200 {
            return InferenceOutcome::Image(body.to_vec());
        }
        let parsed: Value = match serde_json::from_slice(body) {
            Ok(v) => v,
            Err(e) => {
                return InferenceOutcome::TransportError {
                    kind: TransportErrorKind::Other,
                    detail: format!("invalid error body (HTTP {}): {}", status, e),
                }
            }
        };
        let message = parsed
            .as_object()
            .and_then(|obj| obj.get("error"))
            .map(|err| match err {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .unwrap_or_else(|| UNKNOWN_API_ERROR.to_string());
        InferenceOutcome::ApiError { status, message }
    }

    /// Classify a failure raised by the HTTP layer.
    pub fn from_transport(err: &reqwest::Error) -> Self {
        let kind = if err.is_timeout() {
            TransportErrorKind::Timeout
        } else if err.is_connect() {
            TransportErrorKind::ConnectionFailed
        } else {
            TransportErrorKind::Other
        };
        InferenceOutcome::TransportError { kind, detail: err.to_string() }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, InferenceOutcome::Image(_))
    }

    /// Text shown to the user for this outcome.
    pub fn user_message(&self) -> String {
        match self {
            InferenceOutcome::Image(_) => "Image generated successfully!".to_string(),
            InferenceOutcome::ApiError { status, message } => {
                format!("API Error ({}): {}", status, message)
            }
            InferenceOutcome::TransportError { kind, detail } => match kind {
                TransportErrorKind::Timeout => {
                    "Request timed out. The server took too long to respond.".to_string()
                }
                TransportErrorKind::ConnectionFailed => {
                    "Network error: Unable to connect to the API.".to_string()
                }
                TransportErrorKind::Other => format!("Unexpected error: {}", detail),
            },
        }
    }
}
