//! Client configuration options.

use std::time::Duration;

use secrecy::SecretString;
use url::Url;

use crate::{Error, Result};

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for the Lightdash client.
///
/// The base URL and API token are required; everything else has a default.
/// Fields are set through the builder methods and read through accessors;
/// a client never sees the configuration change after it is built.
/// The token is held as a [`SecretString`] and is redacted from `Debug` output.
///
/// # Example
///
/// ```
/// use lightdash_rs::ClientConfig;
/// use std::time::Duration;
///
/// let config = ClientConfig::new("https://app.lightdash.cloud", "my-personal-access-token")?
///     .with_timeout(Duration::from_secs(60))
///     .with_user_agent("my-app/1.0");
/// assert_eq!(config.timeout(), Duration::from_secs(60));
/// # Ok::<(), lightdash_rs::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    base_url: String,
    token: SecretString,
    timeout: Duration,
    user_agent: String,
}

impl ClientConfig {
    /// Create a configuration for the given instance and token.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if `base_url` is not an absolute http(s) URL.
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into();
        let parsed = Url::parse(&base_url)
            .map_err(|e| Error::Config(format!("invalid base URL {base_url:?}: {e}")))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(Error::Config(format!(
                "base URL must use http or https, got {:?}",
                parsed.scheme()
            )));
        }

        Ok(Self {
            base_url,
            token: SecretString::from(token.into()),
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("lightdash-rs/{} (Rust)", env!("CARGO_PKG_VERSION")),
        })
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

    /// Base URL of the Lightdash instance, without the `/api/...` suffix.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Personal access token sent as `Authorization: ApiKey <token>`.
    pub fn token(&self) -> &SecretString {
        &self.token
    }

    /// Request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// User-Agent header value.
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Check invariants that cannot be enforced by the builder methods.
    pub(crate) fn validate(&self) -> Result<()> {
        if self.timeout.is_zero() {
            return Err(Error::Config("timeout must be positive".to_string()));
        }
        Ok(())
    }

    /// Join the base URL and an API path with exactly one `/` between them.
    pub(crate) fn url_for(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }
}

pub(crate) fn join_url(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
