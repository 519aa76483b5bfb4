//! HTTP transport for the Lightdash API.

use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use secrecy::ExposeSecret;
use serde_json::Value;

use crate::api::{ApiCaller, Operation, OrganizationService};
use crate::{Error, Result};

use super::blocking::BlockingRuntime;
use super::config::ClientConfig;
use super::request::ApiRequest;

/// The main client for interacting with the Lightdash API.
///
/// Cloning is cheap; clones share one connection pool.
///
/// # Example
///
/// ```no_run
/// use lightdash_rs::{ClientConfig, LightdashClient};
/// use lightdash_rs::api::ListOrganizationProjects;
///
/// # async fn example() -> lightdash_rs::Result<()> {
/// let config = ClientConfig::new("https://app.lightdash.cloud", "my-token")?;
/// let client = LightdashClient::new(config)?;
///
/// let projects = client.caller::<ListOrganizationProjects>().acall(&()).await?;
/// for project in projects {
///     println!("{} ({})", project.name, project.project_uuid);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct LightdashClient {
    pub(crate) inner: Arc<ClientInner>,
}

pub(crate) struct ClientInner {
    pub(crate) http: reqwest::Client,
    pub(crate) config: ClientConfig,
    pub(crate) blocking: BlockingRuntime,
}

impl LightdashClient {
    /// Create a client from a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the configuration is invalid or the token
    /// cannot be used as a header value.
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;
        let http = build_http_client(&config)?;

        Ok(Self {
            inner: Arc::new(ClientInner {
                http,
                blocking: BlockingRuntime::new(),
                config,
            }),
        })
    }

    /// Shorthand for `LightdashClient::new(ClientConfig::new(base_url, token)?)`.
    pub fn from_token(base_url: impl Into<String>, token: impl Into<String>) -> Result<Self> {
        Self::new(ClientConfig::new(base_url, token)?)
    }

    /// Get the typed caller for one operation.
    pub fn caller<O: Operation>(&self) -> ApiCaller<O> {
        ApiCaller::new(self.inner.clone())
    }

    /// Get the organization service (members and groups, fully paginated).
    pub fn organization(&self) -> OrganizationService {
        OrganizationService::new(self.inner.clone())
    }

    /// Issue a raw request and return the decoded JSON body.
    ///
    /// Most callers want [`caller`](Self::caller) instead, which also
    /// validates the response.
    pub async fn send(&self, request: &ApiRequest) -> Result<Value> {
        self.inner.execute(&self.inner.http, request).await
    }

    /// Get the client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }
}

/// Build the reqwest client with the default auth and content-type headers.
pub(crate) fn build_http_client(config: &ClientConfig) -> Result<reqwest::Client> {
    let mut headers = HeaderMap::new();

    let mut auth = HeaderValue::from_str(&format!("ApiKey {}", config.token().expose_secret()))
        .map_err(|_| Error::Config("API token contains invalid header characters".to_string()))?;
    auth.set_sensitive(true);
    headers.insert(AUTHORIZATION, auth);
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    reqwest::Client::builder()
        .default_headers(headers)
        .timeout(config.timeout())
        .user_agent(config.user_agent())
        .build()
        .map_err(|e| Error::Config(format!("failed to build HTTP client: {e}")))
}

impl ClientInner {
    /// Perform exactly one round-trip and return the parsed JSON body.
    ///
    /// `http` is passed in so the blocking path can use the connection pool
    /// that belongs to its own runtime.
    pub(crate) async fn execute(&self, http: &reqwest::Client, request: &ApiRequest) -> Result<Value> {
        let url = self.config.url_for(&request.path);
        let parameters = request.query_json();

        tracing::debug!(
            method = %request.method,
            url = %url,
            parameters = ?parameters,
            "Sending Lightdash API request"
        );

        let mut builder = http.request(request.method.into(), &url);
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(ref body) = request.body {
            builder = builder.json(body);
        }

        let result = async {
            let response = builder.send().await?.error_for_status()?;
            response.json::<Value>().await
        }
        .await;

        result.map_err(|source| {
            tracing::warn!(
                method = %request.method,
                url = %url,
                status = ?source.status(),
                timeout = source.is_timeout(),
                "Lightdash API call failed"
            );
            Error::ApiCall {
                method: request.method,
                url,
                parameters,
                body: request.body.clone(),
                source: source.without_url(),
            }
        })
    }
}

impl std::fmt::Debug for LightdashClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LightdashClient")
            .field("config", &self.inner.config)
            .finish()
    }
}
