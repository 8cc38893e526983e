//! Env-driven configuration for the front-end and the CLI.
//!
//! Values are read from the process environment; `dotenv` is loaded on demand
//! by the binaries. Everything except the bearer token has a default.
use std::env;
use std::fmt;
use std::time::Duration;

use crate::error::{AppError, AppResult};
use crate::prompt::DEFAULT_PROMPT;

pub const TOKEN_VAR: &str = "HUGGINGFACE_TOKEN";
pub const DEFAULT_API_URL: &str =
    "https://api-inference.huggingface.co/models/stabilityai/stable-diffusion-xl-base-1.0";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_API_HOST: &str = "127.0.0.1";
pub const DEFAULT_API_PORT: u16 = 8190;

/// Opaque bearer token for the inference endpoint.
///
/// Can only be built from a non-blank value, so holding one means startup
/// validation already passed.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(token: impl Into<String>) -> AppResult<Self> {
        let token = token.into();
        let token = token.trim();
        if token.is_empty() {
            return Err(AppError::Configuration(format!(
                "API token is missing! Set {} in the .env file and restart.",
                TOKEN_VAR
            )));
        }
        Ok(Credential(token.to_string()))
    }

    /// Raw token, for the `Authorization` header only.
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Masked form safe for logs. Tokens of eight characters or fewer are
    /// fully hidden; longer ones keep their first four.
    pub fn masked(&self) -> String {
        if self.0.chars().count() <= 8 {
            return "********".to_string();
        }
        let head: String = self.0.chars().take(4).collect();
        format!("{}****", head)
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Credential").field(&self.masked()).finish()
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub credential: Credential,
    pub api_url: String,
    pub request_timeout: Duration,
    pub default_prompt: String,
    pub api_host: String,
    pub api_port: u16,
}

impl Config {
    pub fn dotenv_load() {
        dotenv::dotenv().ok();
    }

    pub fn new() -> AppResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let credential = Credential::new(lookup(TOKEN_VAR).unwrap_or_default())?;

        let request_timeout = match lookup("REQUEST_TIMEOUT_SECS") {
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    tracing::warn!(
                        "Invalid REQUEST_TIMEOUT_SECS '{}', falling back to {}",
                        raw,
                        DEFAULT_TIMEOUT_SECS
                    );
                    Duration::from_secs(DEFAULT_TIMEOUT_SECS)
                }
            },
        };

        let api_port = match lookup("API_PORT") {
            None => DEFAULT_API_PORT,
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                tracing::warn!("Invalid API_PORT '{}', falling back to {}", raw, DEFAULT_API_PORT);
                DEFAULT_API_PORT
            }),
        };

        Ok(Config {
            credential,
            api_url: lookup("HF_API_URL")
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            request_timeout,
            default_prompt: lookup("DEFAULT_PROMPT")
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_PROMPT.to_string()),
            api_host: lookup("API_HOST").unwrap_or_else(|| DEFAULT_API_HOST.to_string()),
            api_port,
        })
    }

    /// Effective settings as `(name, value)` pairs, token masked.
    pub fn summary(&self) -> Vec<(&'static str, String)> {
        vec![
            (TOKEN_VAR, self.credential.masked()),
            ("HF_API_URL", self.api_url.clone()),
            ("REQUEST_TIMEOUT_SECS", self.request_timeout.as_secs().to_string()),
            ("DEFAULT_PROMPT", self.default_prompt.clone()),
            ("API_HOST", self.api_host.clone()),
            ("API_PORT", self.api_port.to_string()),
        ]
    }

    pub fn log_summary(&self) {
        for (key, value) in self.summary() {
            tracing::info!("{}: {}", key, value);
        }
    }
}
