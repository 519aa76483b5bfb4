//! Request descriptors.
//!
//! An [`ApiRequest`] is built fresh for every call by an
//! [`Operation`](crate::api::Operation) and consumed by the transport.

use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::{Error, Result};

/// HTTP method of a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestMethod {
    /// `GET`
    Get,
    /// `POST`
    Post,
    /// `PUT`
    Put,
    /// `PATCH`
    Patch,
    /// `DELETE`
    Delete,
}

impl RequestMethod {
    /// The method name as sent on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestMethod::Get => "GET",
            RequestMethod::Post => "POST",
            RequestMethod::Put => "PUT",
            RequestMethod::Patch => "PATCH",
            RequestMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for RequestMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<RequestMethod> for reqwest::Method {
    fn from(method: RequestMethod) -> Self {
        match method {
            RequestMethod::Get => reqwest::Method::GET,
            RequestMethod::Post => reqwest::Method::POST,
            RequestMethod::Put => reqwest::Method::PUT,
            RequestMethod::Patch => reqwest::Method::PATCH,
            RequestMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

/// A query parameter value: either text or an integer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum QueryValue {
    /// Text value
    Text(String),
    /// Integer value
    Int(i64),
}

impl From<String> for QueryValue {
    fn from(s: String) -> Self {
        QueryValue::Text(s)
    }
}

impl From<&str> for QueryValue {
    fn from(s: &str) -> Self {
        QueryValue::Text(s.to_string())
    }
}

impl From<&String> for QueryValue {
    fn from(s: &String) -> Self {
        QueryValue::Text(s.clone())
    }
}

impl From<u32> for QueryValue {
    fn from(n: u32) -> Self {
        QueryValue::Int(i64::from(n))
    }
}

impl From<i64> for QueryValue {
    fn from(n: i64) -> Self {
        QueryValue::Int(n)
    }
}

/// Percent-encode one path segment.
///
/// Everything but unreserved characters is escaped, so a `/`, `?` or `#`
/// inside an identifier stays inside its segment.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] for an empty segment or a `.`/`..` dot
/// segment, which would otherwise address a different endpoint.
///
/// ```
/// use lightdash_rs::client::path_segment;
///
/// assert_eq!(path_segment("a/b").unwrap(), "a%2Fb");
/// assert!(path_segment("..").is_err());
/// ```
pub fn path_segment(value: &str) -> Result<String> {
    if matches!(value, "" | "." | "..") {
        return Err(Error::InvalidInput(format!(
            "{value:?} is not a valid path segment"
        )));
    }
    Ok(urlencoding::encode(value).into_owned())
}

/// One HTTP request against the Lightdash API.
///
/// # Example
///
/// ```
/// use lightdash_rs::client::{ApiRequest, RequestMethod};
///
/// let request = ApiRequest::get("/api/v1/org/users")
///     .query("page", 2u32)
///     .query_opt("searchQuery", None::<&str>);
/// assert_eq!(request.method, RequestMethod::Get);
/// assert_eq!(request.query.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    /// HTTP method
    pub method: RequestMethod,
    /// Path with path parameters already substituted, e.g. `/api/v1/projects/<uuid>`
    pub path: String,
    /// Query parameters, in insertion order
    pub query: Vec<(String, QueryValue)>,
    /// JSON body
    pub body: Option<Value>,
}

impl ApiRequest {
    /// Create a request with no query parameters and no body.
    pub fn new(method: RequestMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    /// Create a `GET` request.
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(RequestMethod::Get, path)
    }

    /// Create a `POST` request.
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(RequestMethod::Post, path)
    }

    /// Create a `PUT` request.
    pub fn put(path: impl Into<String>) -> Self {
        Self::new(RequestMethod::Put, path)
    }

    /// Create a `PATCH` request.
    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(RequestMethod::Patch, path)
    }

    /// Create a `DELETE` request.
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(RequestMethod::Delete, path)
    }

    /// Append a query parameter.
    pub fn query(mut self, key: impl Into<String>, value: impl Into<QueryValue>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Append a query parameter only when `value` is `Some`.
    pub fn query_opt<V: Into<QueryValue>>(self, key: impl Into<String>, value: Option<V>) -> Self {
        match value {
            Some(v) => self.query(key, v),
            None => self,
        }
    }

    /// Attach a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if `body` cannot be represented as JSON.
    pub fn json<B: Serialize>(mut self, body: &B) -> Result<Self> {
        let value = serde_json::to_value(body)
            .map_err(|e| Error::InvalidInput(format!("request body is not serializable: {e}")))?;
        self.body = Some(value);
        Ok(self)
    }

    /// Query parameters as a JSON object, for diagnostics.
    pub(crate) fn query_json(&self) -> Option<Value> {
        if self.query.is_empty() {
            return None;
        }
        let map = self
            .query
            .iter()
            .map(|(k, v)| {
                let v = match v {
                    QueryValue::Text(s) => Value::from(s.as_str()),
                    QueryValue::Int(n) => Value::from(*n),
                };
                (k.clone(), v)
            })
            .collect();
        Some(Value::Object(map))
    }
}
