//! Opt-in retry with exponential backoff for transient API failures.
//!
//! The storefront fetches once and surfaces failures to the shopper, so
//! `max_retries` defaults to `0` in configuration. Operators can raise it for
//! flaky networks without changing call sites.

use std::future::Future;
use std::time::Duration;

use crate::error::ClientError;

/// Transport failures and 5xx responses are transient; everything else is
/// returned immediately.
fn is_retriable(err: &ClientError) -> bool {
    match err {
        ClientError::Http(_) => true,
        ClientError::UnexpectedStatus { status, .. } => *status >= 500,
        ClientError::Deserialize { .. }
        | ClientError::UnexpectedFormat { .. }
        | ClientError::NotFound { .. }
        | ClientError::InvalidBaseUrl { .. } => false,
    }
}

/// Executes `operation`, retrying transient errors up to `max_retries`
/// additional times. The wait before retry `n` (1-based) is
/// `backoff_base_secs * 2^(n-1)` seconds.
pub(crate) async fn retry_with_backoff<T, F, Fut>(
    max_retries: u32,
    backoff_base_secs: u64,
    mut operation: F,
) -> Result<T, ClientError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, ClientError>>,
{
    let mut attempt = 0u32;

    loop {
        let err = match operation().await {
            Ok(value) => return Ok(value),
            Err(err) if !is_retriable(&err) || attempt >= max_retries => return Err(err),
            Err(err) => err,
        };

        let delay_secs = backoff_base_secs.saturating_mul(1u64 << attempt.min(62));
        tracing::warn!(
            attempt,
            max_retries,
            delay_secs,
            error = %err,
            "transient API error, retrying after backoff"
        );
        tokio::time::sleep(Duration::from_secs(delay_secs)).await;
        attempt += 1;
    }
}
