//! Client configuration options.

use std::time::Duration;

/// Default Aircall REST endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.aircall.io/v1/";

/// Configuration for the Aircall client.
///
/// Every field is optional in practice: absent values fall back to the
/// public Aircall endpoint and a `reqwest` client built from `timeout`.
///
/// # Example
///
/// ```
/// use aircall_rs::ClientConfig;
/// use std::time::Duration;
///
/// let config = ClientConfig::default()
///     .with_base_url("https://api.aircall.io/v1/")
///     .with_timeout(Duration::from_secs(60));
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Pre-built transport; when set, `timeout` is not applied
    pub http_client: Option<reqwest::Client>,
    /// Override of the REST endpoint
    pub base_url: Option<String>,
    /// Request timeout for the default transport
    pub timeout: Duration,
    /// User-Agent header value
    pub user_agent: String,
    /// Retry configuration
    pub retry: RetryConfig,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            http_client: None,
            base_url: None,
            timeout: Duration::from_secs(30),
            user_agent: format!("aircall-rs/{}", env!("CARGO_PKG_VERSION")),
            retry: RetryConfig::default(),
        }
    }
}

impl ClientConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use an existing `reqwest` client as transport.
    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Point the client at another endpoint.
    ///
    /// Relative paths are resolved against this URL, so it should end with
    /// a `/` when it carries a path prefix such as `/v1/`.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the User-Agent header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the retry configuration.
    pub fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    pub(crate) fn base_url(&self) -> &str {
        self.base_url.as_deref().filter(|url| !url.is_empty()).unwrap_or(DEFAULT_BASE_URL)
    }
}

/// Configuration for retrying failed dispatch attempts.
///
/// A request is sent again after a transport failure or a 5xx answer, with
/// a fixed pause before each new attempt. 4xx answers are never retried.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Total number of attempts, the first one included
    pub max_attempts: u32,
    /// Pause before every attempt after the first
    pub delay: Duration,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 2,
            delay: Duration::from_millis(1000),
        }
    }
}

impl RetryConfig {
    /// Create a configuration with a single attempt.
    pub fn no_retry() -> Self {
        Self {
            max_attempts: 1,
            ..Default::default()
        }
    }

    /// Set the total number of attempts.
    pub fn with_max_attempts(mut self, max: u32) -> Self {
        self.max_attempts = max;
        self
    }

    /// Set the pause between attempts.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Check if a status code should be retried.
    pub fn should_retry_status(&self, status: u16) -> bool {
        status >= 500
    }
}
