//! HTTP plumbing shared by the remote provider adapters.

use std::future::Future;
use std::time::Duration;

use reqwest::Response;
use tokio::time::sleep;

use crate::ports::{AIError, CompletionResponse, FinishReason};

/// Maps a transport failure onto the port's error type.
pub(super) fn map_send_error(err: reqwest::Error, timeout: Duration) -> AIError {
    if err.is_timeout() {
        AIError::Timeout {
            timeout_secs: timeout.as_secs() as u32,
        }
    } else if err.is_connect() {
        AIError::network(format!("Connection failed: {}", err))
    } else {
        AIError::network(err.to_string())
    }
}

/// Passes successful responses through and classifies the rest.
pub(super) async fn check_status(response: Response) -> Result<Response, AIError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let error_body = response.text().await.unwrap_or_default();

    match status.as_u16() {
        401 | 403 => Err(AIError::AuthenticationFailed),
        429 => Err(AIError::rate_limited(parse_retry_after(&error_body))),
        400 if error_body.contains("API_KEY_INVALID") => Err(AIError::AuthenticationFailed),
        400 => Err(AIError::InvalidRequest(error_body)),
        500..=599 => Err(AIError::unavailable(format!(
            "Server error {}: {}",
            status, error_body
        ))),
        _ => Err(AIError::network(format!(
            "Unexpected status {}: {}",
            status, error_body
        ))),
    }
}

/// Extracts "try again in Ns" from an error body. Defaults to 30 seconds.
pub(super) fn parse_retry_after(error_body: &str) -> u32 {
    let message = serde_json::from_str::<serde_json::Value>(error_body)
        .ok()
        .and_then(|v| {
            v.get("error")
                .and_then(|e| e.get("message"))
                .and_then(|m| m.as_str())
                .map(str::to_string)
        });

    message
        .as_deref()
        .and_then(|s| s.find("try again in ").map(|idx| &s[idx + 13..]))
        .and_then(|rest| {
            let end = rest
                .find(|c: char| !c.is_ascii_digit())
                .unwrap_or(rest.len());
            rest[..end].parse::<u32>().ok()
        })
        .unwrap_or(30)
}

/// Normalizes vendor finish reasons.
pub(super) fn finish_reason(raw: Option<&str>) -> FinishReason {
    match raw.map(str::to_ascii_lowercase).as_deref() {
        Some("length") | Some("max_tokens") => FinishReason::Length,
        Some("content_filter") | Some("safety") => FinishReason::ContentFilter,
        _ => FinishReason::Stop,
    }
}

/// Runs `attempt` until it succeeds, fails permanently, or `max_retries`
/// extra attempts are used. Backs off 1s, 2s, 4s, ...
pub(super) async fn with_retries<F, Fut>(
    max_retries: u32,
    mut attempt: F,
) -> Result<CompletionResponse, AIError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<CompletionResponse, AIError>>,
{
    let mut retry_count = 0;
    loop {
        match attempt().await {
            Ok(completion) => return Ok(completion),
            Err(err) if !err.is_retryable() || retry_count >= max_retries => return Err(err),
            Err(err) => {
                tracing::warn!(error = %err, retry = retry_count + 1, "retrying AI request");
                sleep(Duration::from_secs(1 << retry_count.min(5))).await;
                retry_count += 1;
            }
        }
    }
}
