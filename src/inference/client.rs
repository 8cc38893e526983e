//! Thin HTTP client for the hosted image-generation endpoint.
//!
//! `dispatch` posts `{"inputs": prompt}` with a bearer token and classifies
//! whatever comes back into an [`InferenceOutcome`]. One call, one request:
//! nothing is retried.
use std::future::Future;

use reqwest::{Client, StatusCode};
use serde::Serialize;

use crate::config::{Config, Credential};
use crate::error::AppResult;
use crate::inference::outcome::InferenceOutcome;
use crate::prompt::Prompt;

/// Anything that can turn a prompt into an outcome.
pub trait ImageGenerator {
    fn generate(&self, prompt: &Prompt) -> impl Future<Output = InferenceOutcome> + Send;
}

#[derive(Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
}

#[derive(Clone)]
pub struct InferenceClient {
    client: Client,
    api_url: String,
    credential: Credential,
}

impl InferenceClient {
    pub fn new(config: &Config) -> AppResult<Self> {
        let client = Client::builder().timeout(config.request_timeout).build()?;
        Ok(InferenceClient {
            client,
            api_url: config.api_url.clone(),
            credential: config.credential.clone(),
        })
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Send one generation request and classify the result.
    pub async fn dispatch(&self, prompt: &Prompt) -> InferenceOutcome {
        tracing::info!("Sending prompt to inference endpoint at URL: {}", self.api_url);
        tracing::debug!("Prompt payload: {:?}", prompt.as_str());

        let response = match self
            .client
            .post(&self.api_url)
            .bearer_auth(self.credential.expose())
            .json(&InferenceRequest { inputs: prompt.as_str() })
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("Request to inference endpoint failed: {}", e);
                return InferenceOutcome::from_transport(&e);
            }
        };

        let status = response.status();
        let body = match response.bytes().await {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!("Failed to read response body (status {}): {}", status, e);
                return InferenceOutcome::from_transport(&e);
            }
        };

        let outcome = InferenceOutcome::from_response(status.as_u16(), &body);
        if status == StatusCode::OK {
            tracing::info!("Received image payload ({} bytes)", body.len());
        } else {
            tracing::warn!("Inference endpoint answered {}: {}", status, outcome.user_message());
        }
        outcome
    }
}

impl ImageGenerator for InferenceClient {
    async fn generate(&self, prompt: &Prompt) -> InferenceOutcome {
        self.dispatch(prompt).await
    }
}
