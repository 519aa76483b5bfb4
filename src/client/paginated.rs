//! Pagination over Lightdash list endpoints.
//!
//! Paginated endpoints answer with a [`Page`]: one slice of `data` plus a
//! [`Pagination`] envelope. [`PaginatedStream`] walks the pages lazily and
//! yields items one by one; draining it with `try_collect` gives the
//! all-or-nothing list used by
//! [`ApiCaller::acall_all`](crate::api::ApiCaller::acall_all).

use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures_util::Stream;
use serde::{Deserialize, Serialize};

use crate::Result;

/// Default number of items per page.
pub const DEFAULT_PAGE_SIZE: u32 = 100;

/// Pagination envelope attached to list responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    /// Current page (1-based)
    pub page: u32,
    /// Items per page
    pub page_size: u32,
    /// Total number of items across all pages
    pub total_results: u64,
    /// Total number of pages
    pub total_page_count: u32,
}

impl Pagination {
    /// Returns `true` if the server reports this as the final page.
    pub fn is_last_page(&self) -> bool {
        self.page >= self.total_page_count
    }
}

/// One page of a paginated list response.
#[derive(Debug, Clone, Deserialize)]
pub struct Page<T> {
    /// Items on this page, in server order
    pub data: Vec<T>,
    /// Pagination metadata; absent when the request carried no page number
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

impl<T> Page<T> {
    /// The page to request after `requested`, or `None` when the listing is
    /// exhausted: this page is empty, or it is the last one.
    ///
    /// The bound uses the larger of `requested` and the page the server
    /// reports, so a server that keeps echoing an earlier page number cannot
    /// keep the drain going past `total_page_count`.
    pub fn next_page(&self, requested: u32) -> Option<u32> {
        if self.data.is_empty() {
            return None;
        }
        match self.pagination {
            Some(p) if requested.max(p.page) < p.total_page_count => Some(requested + 1),
            _ => None,
        }
    }
}

/// Type alias for a boxed future used internally.
pub(crate) type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

type FetchPage<T> = Box<dyn Fn(u32) -> BoxFuture<'static, Result<Page<T>>> + Send + Sync>;

/// A stream that lazily fetches pages from a paginated endpoint.
///
/// Page N+1 is requested only after every item of page N has been yielded.
/// The first error ends the stream.
///
/// # Example
///
/// ```no_run
/// use futures_util::StreamExt;
/// use lightdash_rs::api::{ListGroupsInOrganization, ListGroupsParams};
///
/// # async fn example(client: lightdash_rs::LightdashClient) -> lightdash_rs::Result<()> {
/// let mut groups = client
///     .caller::<ListGroupsInOrganization>()
///     .stream(ListGroupsParams::default());
///
/// while let Some(group) = groups.next().await {
///     println!("{}", group?.name);
/// }
/// # Ok(())
/// # }
/// ```
pub struct PaginatedStream<T> {
    /// Function to fetch a page by number.
    fetch_page: FetchPage<T>,
    /// Items of the current page not yet yielded.
    current_items: VecDeque<T>,
    /// Next page to fetch, None if exhausted.
    next_page: Option<u32>,
    /// In-flight fetch and the page number it asked for.
    pending_fetch: Option<(u32, BoxFuture<'static, Result<Page<T>>>)>,
}

impl<T> PaginatedStream<T> {
    /// Create a stream starting at page 1.
    pub(crate) fn new<F>(fetch_page: F) -> Self
    where
        F: Fn(u32) -> BoxFuture<'static, Result<Page<T>>> + Send + Sync + 'static,
    {
        Self {
            fetch_page: Box::new(fetch_page),
            current_items: VecDeque::new(),
            next_page: Some(1),
            pending_fetch: None,
        }
    }
}

impl<T> Stream for PaginatedStream<T> {
    type Item = Result<T>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = &mut *self;

        loop {
            if let Some(item) = this.current_items.pop_front() {
                return Poll::Ready(Some(Ok(item)));
            }

            if let Some((requested, ref mut fut)) = this.pending_fetch {
                match fut.as_mut().poll(cx) {
                    Poll::Ready(Ok(page)) => {
                        this.pending_fetch = None;
                        this.next_page = page.next_page(requested);

                        tracing::debug!(
                            page = requested,
                            items = page.data.len(),
                            total_pages = ?page.pagination.map(|p| p.total_page_count),
                            "Fetched Lightdash page"
                        );

                        this.current_items = page.data.into();
                        if this.current_items.is_empty() {
                            return Poll::Ready(None);
                        }
                        continue;
                    }
                    Poll::Ready(Err(e)) => {
                        this.pending_fetch = None;
                        this.next_page = None;
                        return Poll::Ready(Some(Err(e)));
                    }
                    Poll::Pending => return Poll::Pending,
                }
            }

            if let Some(page) = this.next_page.take() {
                this.pending_fetch = Some((page, (this.fetch_page)(page)));
                continue;
            }

            return Poll::Ready(None);
        }
    }
}

impl<T> Unpin for PaginatedStream<T> {}
