//! Typed operations and the generic caller that runs them.
//!
//! An [`Operation`] describes one Lightdash endpoint: how to turn its
//! parameters into an [`ApiRequest`] and what the `results` field of the
//! response deserializes into. [`ApiCaller`] runs any operation either
//! asynchronously ([`acall`](ApiCaller::acall)) or blocking
//! ([`call`](ApiCaller::call)); both go through the same request path.

use std::marker::PhantomData;
use std::sync::Arc;

use futures_util::TryStreamExt;
use serde::de::{DeserializeOwned, Error as _};
use serde::Deserialize;
use serde_json::Value;

use crate::client::{ApiRequest, ClientInner, Page, PaginatedStream, RequestMethod};
use crate::{Error, Result};

/// One Lightdash API endpoint.
///
/// Implementors are zero-sized marker types. Only [`path`](Operation::path)
/// is required; endpoints with query parameters or a body override
/// [`build`](Operation::build).
///
/// # Example
///
/// ```
/// use lightdash_rs::api::Operation;
/// use lightdash_rs::client::{path_segment, RequestMethod};
/// use lightdash_rs::{ProjectUuid, Result};
///
/// /// Charts saved in a project.
/// struct ListCharts;
///
/// impl Operation for ListCharts {
///     type Params = ProjectUuid;
///     type Results = Vec<serde_json::Value>;
///     const NAME: &'static str = "ListCharts";
///     const METHOD: RequestMethod = RequestMethod::Get;
///
///     fn path(project: &ProjectUuid) -> Result<String> {
///         Ok(format!("/api/v1/projects/{}/charts", path_segment(project.as_str())?))
///     }
/// }
///
/// let request = ListCharts::request(&ProjectUuid::new("p1")).unwrap();
/// assert_eq!(request.path, "/api/v1/projects/p1/charts");
/// ```
pub trait Operation: Send + Sync + 'static {
    /// Input of the operation.
    type Params: Send + Sync + 'static;
    /// What the `results` field of the response holds.
    type Results: DeserializeOwned + Send + 'static;

    /// Name used in logs and errors.
    const NAME: &'static str;
    /// HTTP method.
    const METHOD: RequestMethod;

    /// Endpoint path relative to the base URL.
    ///
    /// Identifiers must go through [`path_segment`](crate::client::path_segment).
    fn path(params: &Self::Params) -> Result<String>;

    /// Add query parameters or a body to the request.
    fn build(request: ApiRequest, _params: &Self::Params) -> Result<ApiRequest> {
        Ok(request)
    }

    /// The full request for `params`.
    fn request(params: &Self::Params) -> Result<ApiRequest> {
        Self::build(ApiRequest::new(Self::METHOD, Self::path(params)?), params)
    }
}

/// An operation whose results are one page of a longer listing.
pub trait PaginatedOperation: Operation {
    /// Element type of the listing.
    type Item: Send + 'static;

    /// Copy of `params` that asks for page `page`.
    fn with_page(params: &Self::Params, page: u32) -> Self::Params;

    /// The page carried by one response.
    fn into_page(results: Self::Results) -> Page<Self::Item>;
}

/// The envelope wrapped around every Lightdash response.
#[derive(Deserialize)]
struct ApiResponse<T> {
    status: String,
    results: T,
}

/// Runs one [`Operation`] against the API.
///
/// Obtained from [`LightdashClient::caller`](crate::LightdashClient::caller).
/// Cloning is cheap.
pub struct ApiCaller<O> {
    inner: Arc<ClientInner>,
    _operation: PhantomData<fn() -> O>,
}

impl<O> Clone for ApiCaller<O> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            _operation: PhantomData,
        }
    }
}

impl<O: Operation> ApiCaller<O> {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self {
            inner,
            _operation: PhantomData,
        }
    }

    /// Run the operation asynchronously.
    ///
    /// # Errors
    ///
    /// - [`Error::ApiCall`] if the request could not be completed or the
    ///   server answered with a non-success status
    /// - [`Error::InvalidResponse`] if the body does not match the expected
    ///   shape
    pub async fn acall(&self, params: &O::Params) -> Result<O::Results> {
        fetch::<O>(&self.inner, &self.inner.http, params).await
    }

    /// Run the operation, blocking the current thread until it completes.
    ///
    /// Same request and same errors as [`acall`](Self::acall).
    ///
    /// # Panics
    ///
    /// Panics when called from within an async runtime, like
    /// `reqwest::blocking`. Use [`acall`](Self::acall) there.
    pub fn call(&self, params: &O::Params) -> Result<O::Results> {
        let inner = &self.inner;
        inner
            .blocking
            .block_on(&inner.config, move |http| async move { fetch::<O>(inner, &http, params).await })
    }
}

impl<O: PaginatedOperation> ApiCaller<O> {
    /// Stream every item of the listing, fetching pages lazily from page 1.
    ///
    /// The page size is taken from `params`.
    pub fn stream(&self, params: O::Params) -> PaginatedStream<O::Item> {
        stream_with::<O>(self.inner.clone(), self.inner.http.clone(), params)
    }

    /// Collect every page into one list.
    ///
    /// Pages are requested in order until one comes back empty or the server
    /// reports the last page. The first failure is returned and nothing
    /// collected so far is kept.
    pub async fn acall_all(&self, params: O::Params) -> Result<Vec<O::Item>> {
        self.stream(params).try_collect().await
    }

    /// Blocking version of [`acall_all`](Self::acall_all).
    ///
    /// # Panics
    ///
    /// Panics when called from within an async runtime.
    pub fn call_all(&self, params: O::Params) -> Result<Vec<O::Item>> {
        let inner = self.inner.clone();
        self.inner.blocking.block_on(&self.inner.config, move |http| {
            stream_with::<O>(inner, http, params).try_collect()
        })
    }
}

fn stream_with<O: PaginatedOperation>(
    inner: Arc<ClientInner>,
    http: reqwest::Client,
    params: O::Params,
) -> PaginatedStream<O::Item> {
    PaginatedStream::new(move |page| {
        let inner = inner.clone();
        let http = http.clone();
        let params = O::with_page(&params, page);
        Box::pin(async move { fetch::<O>(&inner, &http, &params).await.map(O::into_page) })
    })
}

/// Build, send and validate one request.
async fn fetch<O: Operation>(
    inner: &ClientInner,
    http: &reqwest::Client,
    params: &O::Params,
) -> Result<O::Results> {
    let request = O::request(params)?;
    let body = inner.execute(http, &request).await?;
    parse::<O>(body)
}

fn parse<O: Operation>(body: Value) -> Result<O::Results> {
    let parsed = serde_json::from_value::<ApiResponse<O::Results>>(body).and_then(|envelope| {
        if envelope.status == "ok" {
            Ok(envelope.results)
        } else {
            Err(serde_json::Error::custom(format!(
                "unexpected response status `{}`",
                envelope.status
            )))
        }
    });

    parsed.map_err(|source| {
        tracing::warn!(operation = O::NAME, error = %source, "Invalid Lightdash API response");
        Error::InvalidResponse {
            operation: O::NAME,
            source,
        }
    })
}
