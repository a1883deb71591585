//! Summarization backends and the map-reduce pipeline.

pub mod claude;
pub mod ollama;
pub mod prompt;
pub mod retry;

use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::Config;
use crate::error::LlmError;
use crate::report::split_text;

/// Supported LLM providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    Claude,
    Ollama,
}

impl Provider {
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::Claude => "claude",
            Provider::Ollama => "ollama",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Provider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "claude" => Ok(Self::Claude),
            "ollama" => Ok(Self::Ollama),
            _ => Err(format!("Unknown provider: {}", s)),
        }
    }
}

/// A backend able to turn a prompt into completion text.
#[async_trait]
pub trait Summarizer: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, LlmError>;

    fn provider(&self) -> Provider;
}

/// Build the backend selected by the configuration.
pub fn from_config(config: &Config) -> Result<Box<dyn Summarizer>, LlmError> {
    match config.provider {
        Provider::Claude => Ok(Box::new(claude::ClaudeSummarizer::new())),
        Provider::Ollama => Ok(Box::new(ollama::OllamaSummarizer::new(
            &config.base_url,
            &config.model,
        )?)),
    }
}

/// Summarize the aggregated log text into the final standup report.
///
/// The text is chunked to fit the backend's context budget. Each chunk is
/// summarized independently, then the partial summaries are combined by
/// one final call. A single chunk skips the reduce step.
pub async fn summarize_log(
    summarizer: &dyn Summarizer,
    full_log: &str,
    config: &Config,
) -> Result<String, LlmError> {
    let chunks = split_text(full_log, config.chunk_size, config.chunk_overlap);

    if chunks.len() == 1 {
        return retry::complete_with_retry(summarizer, &prompt::standup_prompt(&chunks[0])).await;
    }

    let mut partials = Vec::with_capacity(chunks.len());
    for (idx, chunk) in chunks.iter().enumerate() {
        debug!(chunk = idx + 1, total = chunks.len(), "summarizing chunk");
        let partial =
            retry::complete_with_retry(summarizer, &prompt::standup_prompt(chunk)).await?;
        partials.push(partial);
    }

    let combined = partials.join("\n\n");
    retry::complete_with_retry(summarizer, &prompt::combine_prompt(&combined)).await
}
