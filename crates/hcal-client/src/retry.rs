//! Retry with exponential backoff for upstream HTTP calls.
//!
//! Retries only on transport errors (connection failures, timeouts). A
//! response with any status is returned to the caller, which decides what
//! the status means. With `max_retries == 0` the request is sent once.

use std::time::Duration;

/// Base delay between retries (doubles each attempt: 200ms, 400ms, 800ms).
const BASE_DELAY_MS: u64 = 200;

/// Cap on the backoff exponent so a large `max_retries` cannot overflow.
const MAX_BACKOFF_EXPONENT: u32 = 6;

/// Send an HTTP request, retrying transport failures up to `max_retries` times.
pub(crate) async fn retry_send<F, Fut>(
    max_retries: u32,
    f: F,
) -> Result<reqwest::Response, reqwest::Error>
where
    F: Fn() -> Fut,
    Fut: std::future::Future<Output = Result<reqwest::Response, reqwest::Error>>,
{
    for attempt in 0..max_retries {
        match f().await {
            Ok(resp) => return Ok(resp),
            Err(e) => {
                let e = e.without_url();
                let delay = Duration::from_millis(
                    BASE_DELAY_MS * 2u64.pow(attempt.min(MAX_BACKOFF_EXPONENT)),
                );
                tracing::warn!(
                    attempt = attempt + 1,
                    max_retries,
                    "upstream request failed, retrying in {delay:?}: {e}"
                );
                tokio::time::sleep(delay).await;
            }
        }
    }
    f().await
}
