//! Exponential backoff retry logic around summarizer calls.

use std::time::Duration;

use backoff::backoff::Backoff;
use backoff::ExponentialBackoff;
use tracing::warn;

use crate::error::LlmError;

use super::Summarizer;

/// 3 attempts, base 1s, max 30s.
const MAX_RETRIES: u32 = 3;
const INITIAL_INTERVAL_SECS: u64 = 1;
const MAX_INTERVAL_SECS: u64 = 30;

/// Run one completion with up to three attempts.
///
/// The last underlying error is preserved as the source of
/// [`LlmError::RetriesExhausted`].
pub async fn complete_with_retry(
    summarizer: &dyn Summarizer,
    prompt: &str,
) -> Result<String, LlmError> {
    let mut backoff = ExponentialBackoff {
        initial_interval: Duration::from_secs(INITIAL_INTERVAL_SECS),
        max_interval: Duration::from_secs(MAX_INTERVAL_SECS),
        max_elapsed_time: None, // retries are counted manually
        ..Default::default()
    };

    let mut attempt = 0;
    loop {
        attempt += 1;

        match summarizer.complete(prompt).await {
            Ok(output) => return Ok(output),
            Err(e) if attempt < MAX_RETRIES => {
                warn!(
                    attempt,
                    provider = %summarizer.provider(),
                    error = %e,
                    "summarization attempt failed, retrying"
                );
                if let Some(wait) = backoff.next_backoff() {
                    tokio::time::sleep(wait).await;
                }
            }
            Err(e) => return Err(LlmError::RetriesExhausted(Box::new(e))),
        }
    }
}
