//! What the output area shows after a click.
use crate::inference::InferenceOutcome;

pub const IMAGE_CAPTION: &str = "Generated Image";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feedback {
    Image { bytes: Vec<u8>, caption: String, message: String },
    Warning(String),
    Error(String),
}

impl Feedback {
    pub fn from_outcome(outcome: InferenceOutcome) -> Self {
        let message = outcome.user_message();
        match outcome {
            InferenceOutcome::Image(bytes) => Feedback::Image {
                bytes,
                caption: IMAGE_CAPTION.to_string(),
                message,
            },
            InferenceOutcome::ApiError { .. } | InferenceOutcome::TransportError { .. } => {
                Feedback::Error(message)
            }
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Feedback::Image { message, .. } => message,
            Feedback::Warning(m) | Feedback::Error(m) => m,
        }
    }
}

/// Best-effort content type from the leading magic bytes.
pub fn sniff_content_type(bytes: &[u8]) -> &'static str {
    if bytes.starts_with(b"\x89PNG\r\n\x1a\n") {
        "image/png"
    } else if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
        "image/jpeg"
    } else if bytes.starts_with(b"GIF87a") || bytes.starts_with(b"GIF89a") {
        "image/gif"
    } else if bytes.len() >= 12 && &bytes[0..4] == b"RIFF" && &bytes[8..12] == b"WEBP" {
        "image/webp"
    } else {
        "application/octet-stream"
    }
}

/// File extension matching a type returned by [`sniff_content_type`].
pub fn extension_for(content_type: &str) -> &'static str {
    match content_type {
        "image/png" => "png",
        "image/jpeg" => "jpg",
        "image/gif" => "gif",
        "image/webp" => "webp",
        _ => "bin",
    }
}
