//! Error types for the Lightdash API client.
//!
//! Calls fail in one of two ways: the HTTP round-trip itself failed
//! ([`Error::ApiCall`]), or the server answered with JSON that does not match
//! the record type the operation expects ([`Error::InvalidResponse`]). The
//! remaining variants cover problems detected before any request is sent.

use serde_json::Value;
use thiserror::Error;

use crate::client::RequestMethod;

/// A specialized `Result` type for Lightdash operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for all Lightdash API operations.
#[derive(Error, Debug)]
pub enum Error {
    /// The HTTP round-trip failed: network error, timeout, non-2xx status,
    /// or a success response whose body is not JSON.
    ///
    /// The rendered message never contains the API token.
    #[error(
        "API call failed: {source}; method: {method}; URL: {url}; parameters: {}; data: {}",
        render_json(.parameters),
        render_json(.body)
    )]
    ApiCall {
        /// HTTP method of the failed request
        method: RequestMethod,
        /// Fully resolved request URL (without query string)
        url: String,
        /// Query parameters that were sent, if any
        parameters: Option<Value>,
        /// JSON body that was sent, if any
        body: Option<Value>,
        /// Underlying transport error
        #[source]
        source: reqwest::Error,
    },

    /// The response was valid JSON but did not match the expected schema.
    #[error("Invalid response from {operation}: {source}")]
    InvalidResponse {
        /// Name of the operation whose response failed validation
        operation: &'static str,
        /// Validation failure details
        #[source]
        source: serde_json::Error,
    },

    /// Invalid input provided to a function
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// The runtime backing blocking calls could not be started
    #[error("Failed to start blocking runtime: {0}")]
    Runtime(#[from] std::io::Error),
}

fn render_json(value: &Option<Value>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "none".to_string(),
    }
}

impl Error {
    /// Returns `true` for transport failures (network, timeout, HTTP status).
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::ApiCall { .. })
    }

    /// Returns `true` when the server's response did not match the expected schema.
    pub fn is_invalid_response(&self) -> bool {
        matches!(self, Error::InvalidResponse { .. })
    }

    /// Returns `true` if the request timed out.
    pub fn is_timeout(&self) -> bool {
        match self {
            Error::ApiCall { source, .. } => source.is_timeout(),
            _ => false,
        }
    }

    /// HTTP status code of a transport failure caused by a non-2xx response.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::ApiCall { source, .. } => source.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Returns `true` if this error indicates a client-side issue
    /// (4xx status, invalid input, bad configuration).
    pub fn is_client_error(&self) -> bool {
        match self {
            Error::ApiCall { .. } => self.status().is_some_and(|s| (400..500).contains(&s)),
            Error::InvalidInput(_) | Error::Config(_) => true,
            _ => false,
        }
    }

    /// Returns `true` if the server answered with a 5xx status.
    pub fn is_server_error(&self) -> bool {
        self.status().is_some_and(|s| s >= 500)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_response_is_not_transport() {
        let source = serde_json::from_str::<u32>("\"nope\"").unwrap_err();
        let err = Error::InvalidResponse {
            operation: "GetProject",
            source,
        };
        assert!(err.is_invalid_response());
        assert!(!err.is_transport());
        assert!(!err.is_timeout());
        assert_eq!(err.status(), None);
        assert!(err.to_string().starts_with("Invalid response from GetProject:"));
    }

    #[test]
    fn test_client_error_classification() {
        assert!(Error::InvalidInput("bad".into()).is_client_error());
        assert!(Error::Config("bad".into()).is_client_error());
        assert!(!Error::Config("bad".into()).is_server_error());
    }

    #[test]
    fn test_render_json() {
        assert_eq!(render_json(&None), "none");
        assert_eq!(
            render_json(&Some(serde_json::json!({"page": 1}))),
            r#"{"page":1}"#
        );
    }
}
