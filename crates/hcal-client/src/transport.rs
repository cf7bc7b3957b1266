//! Shared send-and-check path for both services.
//!
//! Transport errors are stripped of their URL before they leave this
//! module: the holidays URL carries the API key in its query string.

use crate::error::ApiError;
use crate::retry::retry_send;

/// Send a request built by `build`, reject non-2xx statuses, and return
/// the raw body text.
pub(crate) async fn send_for_body<F>(
    max_retries: u32,
    endpoint: &str,
    build: F,
) -> Result<String, ApiError>
where
    F: Fn() -> reqwest::RequestBuilder,
{
    tracing::debug!(endpoint, "sending upstream request");

    let resp = retry_send(max_retries, || build().send())
        .await
        .map_err(|e| ApiError::Http {
            endpoint: endpoint.to_string(),
            source: e.without_url(),
        })?;

    let status = resp.status();
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        tracing::warn!(endpoint, status = status.as_u16(), "upstream returned error status");
        return Err(ApiError::Status {
            endpoint: endpoint.to_string(),
            status: status.as_u16(),
            body,
        });
    }

    resp.text().await.map_err(|e| ApiError::Http {
        endpoint: endpoint.to_string(),
        source: e.without_url(),
    })
}
