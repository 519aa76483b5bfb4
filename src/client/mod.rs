//! HTTP client for the Lightdash API.
//!
//! This module provides the main entry point [`LightdashClient`], the
//! [`ApiRequest`] descriptor every operation is lowered to, and the
//! pagination types shared by list endpoints.
//!
//! # Example
//!
//! ```no_run
//! use lightdash_rs::client::{ApiRequest, ClientConfig, LightdashClient};
//!
//! # async fn example() -> lightdash_rs::Result<()> {
//! let client = LightdashClient::new(ClientConfig::new(
//!     "https://app.lightdash.cloud",
//!     "my-token",
//! )?)?;
//!
//! // Raw request, envelope included
//! let body = client.send(&ApiRequest::get("/api/v1/org")).await?;
//! println!("{}", body["status"]);
//! # Ok(())
//! # }
//! ```

mod blocking;
mod config;
mod http;
pub mod paginated;
mod request;

pub use config::{ClientConfig, DEFAULT_TIMEOUT};
pub use http::LightdashClient;
pub use paginated::{Page, PaginatedStream, Pagination, DEFAULT_PAGE_SIZE};
pub use request::{path_segment, ApiRequest, QueryValue, RequestMethod};
pub(crate) use http::ClientInner;
