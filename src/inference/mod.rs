pub mod client;
pub mod outcome;

pub use client::{ImageGenerator, InferenceClient};
pub use outcome::{InferenceOutcome, TransportErrorKind, UNKNOWN_API_ERROR};
