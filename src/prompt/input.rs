//! Prompt validation.
//!
//! A [`Prompt`] is the trimmed, non-empty text typed by the user. Blank input
//! never becomes a `Prompt`, so it can never reach the dispatcher.
use std::fmt;

use crate::error::{AppError, AppResult};

/// Sample prompt pre-filled in the input field.
pub const DEFAULT_PROMPT: &str = "A futuristic cyberpunk city at sunset, ultra-detailed, 4K";

pub const EMPTY_PROMPT_WARNING: &str = "Please enter a valid prompt.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt(String);

impl Prompt {
    pub fn parse(raw: &str) -> AppResult<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(AppError::Validation(EMPTY_PROMPT_WARNING.to_string()));
        }
        Ok(Prompt(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Prompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
