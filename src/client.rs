//! Main mem.ai client implementation.

use crate::error::{parse_retry_after, Error, Result};
use crate::types::*;
use crate::version::build_user_agent;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use reqwest::{Method, StatusCode};
use std::time::Duration;
use tokio::time::sleep;
use tracing::warn;

const DEFAULT_BASE_URL: &str = "https://api.mem.ai/v1";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_MAX_RETRIES: u32 = 3;
const DEFAULT_RETRY_DELAY_MS: u64 = 1000;

/// Upper bound on any single retry wait, whatever the server asks for.
const MAX_RETRY_DELAY: Duration = Duration::from_secs(60);

/// Builder for constructing a [`Client`].
pub struct ClientBuilder {
    api_key: String,
    base_url: String,
    timeout: Duration,
    max_retries: u32,
    retry_delay: Duration,
    user_agent_suffix: Option<String>,
}

impl ClientBuilder {
    /// Create a new client builder with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_retries: DEFAULT_MAX_RETRIES,
            retry_delay: Duration::from_millis(DEFAULT_RETRY_DELAY_MS),
            user_agent_suffix: None,
        }
    }

    /// Set the API base URL.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the maximum number of retries after a rate-limited attempt.
    pub fn max_retries(mut self, retries: u32) -> Self {
        self.max_retries = retries;
        self
    }

    /// Set the base delay for exponential backoff between retries.
    pub fn retry_delay(mut self, delay: Duration) -> Self {
        self.retry_delay = delay;
        self
    }

    /// Set a custom User-Agent suffix.
    pub fn user_agent_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.user_agent_suffix = Some(suffix.into());
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<Client> {
        if self.api_key.is_empty() {
            return Err(Error::Config("API key is required".into()));
        }

        // Warn about insecure connections
        if !self.base_url.starts_with("https://") {
            warn!(
                base_url = %self.base_url,
                "API base URL is not using HTTPS. This is insecure."
            );
        }

        let mut headers = HeaderMap::new();
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", self.api_key))
            .map_err(|_| Error::Config("API key contains invalid header characters".into()))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let user_agent = build_user_agent(self.user_agent_suffix.as_deref());
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&user_agent)
                .map_err(|_| Error::Config("User-Agent suffix contains invalid characters".into()))?,
        );

        let http_client = reqwest::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(Error::Http)?;

        Ok(Client {
            base_url: self.base_url,
            http_client,
            headers,
            max_retries: self.max_retries,
            retry_delay: self.retry_delay,
        })
    }
}

/// The main mem.ai SDK client.
///
/// # Example
///
/// ```rust,no_run
/// use memai::{Client, MemItRequest};
///
/// #[tokio::main]
/// async fn main() -> Result<(), memai::Error> {
///     let client = Client::builder("your-api-key").build()?;
///
///     let response = client.mem_it(MemItRequest {
///         input: "Remember to buy milk tomorrow.".into(),
///         instructions: Some("Add this to my reminders.".into()),
///         ..Default::default()
///     }).await?;
///
///     println!("{} operations", response.operations.len());
///     Ok(())
/// }
/// ```
#[derive(Debug)]
pub struct Client {
    base_url: String,
    http_client: reqwest::Client,
    headers: HeaderMap,
    max_retries: u32,
    retry_delay: Duration,
}

impl Client {
    /// Create a new client builder.
    pub fn builder(api_key: impl Into<String>) -> ClientBuilder {
        ClientBuilder::new(api_key)
    }

    /// Capture free-form input through the mem-it endpoint.
    ///
    /// The endpoint accepts text, Markdown, HTML, or URLs together with
    /// optional instructions, and reports the operations the service
    /// performed (note created, note added to a collection, ...).
    pub async fn mem_it(&self, request: MemItRequest) -> Result<MemItResponse> {
        self.post("/mem-it", &request).await
    }

    /// Create a note from Markdown content.
    pub async fn create_note(&self, request: CreateNoteRequest) -> Result<Note> {
        self.post("/notes", &request).await
    }

    /// Delete a note by its ID.
    ///
    /// An empty `id` is rejected before any request is sent.
    pub async fn delete_note(&self, id: &str) -> Result<()> {
        if id.is_empty() {
            return Err(Error::BadRequest("note ID must be a non-empty string".into()));
        }
        self.delete(&format!("/notes/{}", id)).await
    }

    // === Internal methods ===

    async fn post<T: serde::de::DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        self.request(Method::POST, path, Some(body)).await
    }

    async fn delete(&self, path: &str) -> Result<()> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .execute_with_retry(Method::DELETE, &url, None::<&()>, 0)
            .await?;

        if !response.status().is_success() {
            return Err(Error::from_response(response).await);
        }

        Ok(())
    }

    async fn request<T, B>(&self, method: Method, path: &str, body: Option<&B>) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
        B: serde::Serialize,
    {
        let url = format!("{}{}", self.base_url, path);
        let response = self.execute_with_retry(method, &url, body, 0).await?;

        if !response.status().is_success() {
            return Err(Error::from_response(response).await);
        }

        response.json().await.map_err(Error::Http)
    }

    /// Send a request, retrying rate-limited attempts.
    ///
    /// Only 429 responses are retried; transport errors and every other
    /// status are surfaced immediately. Retries are strictly sequential:
    /// attempt N+1 is sent only after attempt N's response was observed
    /// and the backoff elapsed.
    async fn execute_with_retry<B: serde::Serialize>(
        &self,
        method: Method,
        url: &str,
        body: Option<&B>,
        attempt: u32,
    ) -> Result<reqwest::Response> {
        let mut req = self
            .http_client
            .request(method.clone(), url)
            .headers(self.headers.clone());

        if let Some(b) = body {
            req = req.json(b);
        }

        let response = match req.send().await {
            Ok(r) => r,
            Err(e) if e.is_timeout() => return Err(Error::Timeout),
            Err(e) => return Err(Error::Http(e)),
        };

        if response.status() == StatusCode::TOO_MANY_REQUESTS && attempt < self.max_retries {
            let retry_after = parse_retry_after(response.headers());
            let delay = backoff_delay(self.retry_delay, attempt, retry_after);
            warn!(
                delay_ms = delay.as_millis() as u64,
                attempt = attempt + 1,
                max_retries = self.max_retries,
                "Rate limited. Retrying in {:?}",
                delay
            );
            sleep(delay).await;
            return Box::pin(self.execute_with_retry(method, url, body, attempt + 1)).await;
        }

        Ok(response)
    }
}

/// Compute the wait before retry number `attempt + 1`.
///
/// A usable `Retry-After` value takes precedence; otherwise the base delay
/// grows exponentially with the attempt number and is scaled by a jitter
/// factor drawn uniformly from [0.5, 1.0). Both paths are capped at
/// [`MAX_RETRY_DELAY`].
fn backoff_delay(base: Duration, attempt: u32, retry_after: Option<u64>) -> Duration {
    let delay = match retry_after {
        Some(secs) if secs > 0 => Duration::from_secs(secs),
        _ => {
            let exp = (base.as_millis() as u64).saturating_mul(2u64.saturating_pow(attempt));
            let jitter = 0.5 + rand::random::<f64>() * 0.5;
            Duration::from_millis((exp as f64 * jitter) as u64)
        }
    };
    delay.min(MAX_RETRY_DELAY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backoff_honors_retry_after() {
        assert_eq!(backoff_delay(Duration::from_secs(1), 0, Some(5)), Duration::from_secs(5));
        // Huge server-requested waits are capped
        assert_eq!(
            backoff_delay(Duration::from_secs(1), 0, Some(600)),
            MAX_RETRY_DELAY
        );
    }

    #[test]
    fn test_backoff_grows_exponentially_with_jitter() {
        let base = Duration::from_millis(1000);
        for attempt in 0..4 {
            let expected = 1000u64 * 2u64.pow(attempt);
            let delay = backoff_delay(base, attempt, None).as_millis() as u64;
            assert!(
                delay >= expected / 2 && delay <= expected,
                "attempt {}: {}ms outside [{}ms, {}ms]",
                attempt,
                delay,
                expected / 2,
                expected
            );
        }
    }

    #[test]
    fn test_backoff_retry_after_zero_falls_back_to_exponential() {
        let delay = backoff_delay(Duration::from_millis(1000), 0, Some(0));
        assert!(delay >= Duration::from_millis(500) && delay <= Duration::from_millis(1000));
    }

    #[test]
    fn test_backoff_is_capped() {
        assert_eq!(backoff_delay(Duration::from_secs(1), 30, None), MAX_RETRY_DELAY);
    }

    #[test]
    fn test_builder_trims_trailing_slash() {
        let client = Client::builder("test-api-key")
            .base_url("https://api.mem.ai/v1/")
            .build()
            .unwrap();
        assert_eq!(client.base_url, "https://api.mem.ai/v1");
    }

    #[test]
    fn test_builder_rejects_empty_api_key() {
        let err = Client::builder("").build().unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
