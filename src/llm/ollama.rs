//! Ollama HTTP backend.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::{LlmError, OllamaError};

use super::{Provider, Summarizer};

/// Request timeout for generate calls; local models can be slow to load.
const REQUEST_TIMEOUT_SECS: u64 = 600;

#[derive(Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

#[derive(Deserialize)]
struct GenerateResponse {
    response: String,
}

/// Summarizer backed by an Ollama server's generate endpoint.
pub struct OllamaSummarizer {
    client: Client,
    base_url: String,
    model: String,
}

impl OllamaSummarizer {
    pub fn new(base_url: &str, model: &str) -> Result<Self, OllamaError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(OllamaError::ClientBuild)?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
        })
    }

    async fn generate(&self, prompt: &str) -> Result<String, OllamaError> {
        let url = format!("{}/api/generate", self.base_url);
        let request = GenerateRequest {
            model: &self.model,
            prompt,
            stream: false,
        };

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(OllamaError::RequestFailed)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(OllamaError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let body: GenerateResponse = response.json().await.map_err(OllamaError::RequestFailed)?;

        if body.response.trim().is_empty() {
            return Err(OllamaError::EmptyResponse);
        }

        Ok(body.response)
    }
}

#[async_trait]
impl Summarizer for OllamaSummarizer {
    async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        Ok(self.generate(prompt).await?)
    }

    fn provider(&self) -> Provider {
        Provider::Ollama
    }
}
