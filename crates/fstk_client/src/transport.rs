//! HTTP transport performing one exchange per call.
//!
//! The transport owns a `reqwest::Client` with standard TLS certificate
//! validation and fixed timeouts. It classifies how a call failed but never
//! retries; a non-2xx status is a successful exchange, not a failure.

use derive_getters::Getters;
use fstk_error::ChatError;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, error};

/// Default read timeout.
pub const DEFAULT_READ_TIMEOUT: Duration = Duration::from_secs(30);

/// Default write timeout.
pub const DEFAULT_WRITE_TIMEOUT: Duration = Duration::from_secs(30);

/// Raw result of one HTTP exchange.
#[derive(Debug, Clone, Getters)]
pub struct HttpResponse {
    /// HTTP status code
    status: u16,
    /// Response body text
    body: String,
}

impl HttpResponse {
    /// Creates an exchange result from its parts.
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// HTTP transport for OpenAI-compatible endpoints.
///
/// Holds only immutable configuration, so one transport value is safe to
/// share across concurrent calls. Each call creates and releases its own
/// connection-level resources on every exit path.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    read_timeout: Duration,
    write_timeout: Duration,
}

impl HttpTransport {
    /// Creates a transport with the default 30 second timeouts.
    pub fn new() -> Result<Self, ChatError> {
        Self::with_timeouts(DEFAULT_READ_TIMEOUT, DEFAULT_WRITE_TIMEOUT)
    }

    /// Creates a transport with explicit read and write timeouts.
    ///
    /// The read timeout bounds time-to-bytes on the response; the write
    /// timeout extends the overall request deadline, since the combined
    /// budget caps the full exchange.
    pub fn with_timeouts(read_timeout: Duration, write_timeout: Duration) -> Result<Self, ChatError> {
        let client = reqwest::Client::builder()
            .read_timeout(read_timeout)
            .timeout(read_timeout + write_timeout)
            // No connection outlives a single call; pooling is the caller's
            // concern.
            .pool_max_idle_per_host(0)
            .build()
            .map_err(|e| ChatError::transport(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            read_timeout,
            write_timeout,
        })
    }

    /// Returns the configured read timeout.
    pub fn read_timeout(&self) -> Duration {
        self.read_timeout
    }

    /// Returns the configured write timeout.
    pub fn write_timeout(&self) -> Duration {
        self.write_timeout
    }

    /// Performs one POST with a JSON body and bearer authorization.
    ///
    /// An externally supplied `deadline` overrides the transport's own
    /// request deadline, so a caller can race the call against its own
    /// cancellation signal.
    pub async fn post<B>(
        &self,
        url: &str,
        api_key: &str,
        body: &B,
        deadline: Option<Duration>,
    ) -> Result<HttpResponse, ChatError>
    where
        B: Serialize + ?Sized,
    {
        let mut request = self
            .client
            .post(url)
            .header(
                reqwest::header::AUTHORIZATION,
                format!("Bearer {api_key}"),
            )
            .json(body);
        if let Some(deadline) = deadline {
            request = request.timeout(deadline);
        }

        debug!(url, "sending POST request");
        self.exchange(request).await
    }

    /// Performs one GET with bearer authorization.
    pub async fn get(
        &self,
        url: &str,
        api_key: &str,
        deadline: Option<Duration>,
    ) -> Result<HttpResponse, ChatError> {
        let mut request = self.client.get(url).header(
            reqwest::header::AUTHORIZATION,
            format!("Bearer {api_key}"),
        );
        if let Some(deadline) = deadline {
            request = request.timeout(deadline);
        }

        debug!(url, "sending GET request");
        self.exchange(request).await
    }

    async fn exchange(&self, request: reqwest::RequestBuilder) -> Result<HttpResponse, ChatError> {
        let response = request.send().await.map_err(classify)?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(classify)?;

        debug!(status, body_len = body.len(), "received response");
        Ok(HttpResponse { status, body })
    }
}

/// Classifies a reqwest error into the network error taxonomy.
fn classify(err: reqwest::Error) -> ChatError {
    if err.is_timeout() {
        error!(error = %err, "request timed out");
        ChatError::timeout(err.to_string())
    } else {
        error!(error = %err, "transport failure");
        ChatError::transport(err.to_string())
    }
}
