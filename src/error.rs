//! Error types for the mem.ai SDK.

use reqwest::header::{HeaderMap, RETRY_AFTER};
use thiserror::Error;

/// Result type for mem.ai operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the mem.ai SDK.
#[derive(Error, Debug)]
pub enum Error {
    /// The request payload was rejected by the API.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Authentication failed.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Access forbidden.
    #[error("Access forbidden: {0}")]
    Forbidden(String),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Rate limit exceeded.
    #[error("Rate limited: {message}")]
    RateLimit {
        /// Seconds to wait before retrying, from the `Retry-After` header.
        retry_after: Option<u64>,
        /// Error message
        message: String,
    },

    /// The API encountered an internal error.
    #[error("Server error ({status}): {message}")]
    Server {
        /// HTTP status code
        status: u16,
        /// Error message
        message: String,
    },

    /// The API returned an error response not covered by a specific variant.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Error message
        message: String,
    },

    /// Network or HTTP error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Request timeout.
    #[error("Request timed out")]
    Timeout,
}

impl Error {
    /// Create an API error from a non-success response.
    pub(crate) async fn from_response(response: reqwest::Response) -> Self {
        let status = response.status();
        let retry_after = parse_retry_after(response.headers());

        // Error bodies carry {"error": ..., "message": ...}; prefer the
        // human-readable message, fall back to the error code.
        let body: std::result::Result<ErrorBody, _> = response.json().await;
        let message = match body {
            Ok(b) => b.message.or(b.error),
            Err(_) => None,
        }
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("Unknown error")
                .to_string()
        });

        match status.as_u16() {
            400 => Error::BadRequest(message),
            401 => Error::Unauthorized(message),
            403 => Error::Forbidden(message),
            404 => Error::NotFound(message),
            429 => Error::RateLimit {
                retry_after,
                message,
            },
            s if s >= 500 => Error::Server { status: s, message },
            s => Error::Api { status: s, message },
        }
    }
}

/// Parse a `Retry-After` header into whole seconds.
///
/// Accepts both forms the header allows: a non-negative integer number of
/// seconds, or an HTTP-date, which is converted to seconds from now
/// (rounded up, floored at zero). Anything else is ignored.
pub(crate) fn parse_retry_after(headers: &HeaderMap) -> Option<u64> {
    let raw = headers.get(RETRY_AFTER)?.to_str().ok()?.trim();

    if let Ok(secs) = raw.parse::<u64>() {
        return Some(secs);
    }

    let date = chrono::DateTime::parse_from_rfc2822(raw).ok()?;
    let delta = date.with_timezone(&chrono::Utc) - chrono::Utc::now();
    Some((delta.num_milliseconds().max(0) as u64).div_ceil(1000))
}

#[derive(serde::Deserialize)]
struct ErrorBody {
    error: Option<String>,
    message: Option<String>,
}
