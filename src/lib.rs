//! Hugging Face image generator library
//!
//! Modules:
//! - `api`: Axum router and handlers for the single-page front-end.
//! - `inference`: Client for the hosted inference endpoint and outcome classification.
//! - `prompt`: Prompt validation and the sample default prompt.
//! - `ui`: Per-click interaction state and user-facing feedback.
//! - `config`: Env-driven configuration loader.
//! - `error`: Common error type and alias.
//!
//! Re-exports are provided for common types: `Config`, `InferenceClient`,
//! `InferenceOutcome`, and `Prompt`.
pub mod api;
pub mod config;
pub mod error;
pub mod inference;
pub mod prompt;
pub mod ui;

pub use config::Config;
pub use error::{AppError, AppResult};
pub use inference::{InferenceClient, InferenceOutcome};
pub use prompt::Prompt;
