//! Blocking adapter over the async transport.
//!
//! Blocking calls run the same futures as the async API to completion on a
//! private current-thread runtime. The runtime and its own connection pool
//! are created on first use, so purely async users never pay for them.
//! Pooled connections are driven by the runtime that opened them, which is
//! why the blocking path never shares the async client's pool.

use std::future::Future;
use std::sync::OnceLock;

use tokio::runtime::{Builder, Runtime};

use crate::{Error, Result};

use super::config::ClientConfig;
use super::http::build_http_client;

pub(crate) struct BlockingRuntime {
    state: OnceLock<BlockingState>,
}

struct BlockingState {
    runtime: Option<Runtime>,
    http: reqwest::Client,
}

impl BlockingRuntime {
    pub(crate) fn new() -> Self {
        Self {
            state: OnceLock::new(),
        }
    }

    /// Run `f` to completion, handing it the blocking connection pool.
    ///
    /// # Panics
    ///
    /// Panics when called from within an asynchronous execution context,
    /// like any nested tokio `block_on`.
    pub(crate) fn block_on<F, Fut, T>(&self, config: &ClientConfig, f: F) -> Result<T>
    where
        F: FnOnce(reqwest::Client) -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        let state = self.state(config)?;
        let runtime = state
            .runtime
            .as_ref()
            .ok_or_else(|| Error::Config("blocking runtime already shut down".to_string()))?;
        runtime.block_on(f(state.http.clone()))
    }

    fn state(&self, config: &ClientConfig) -> Result<&BlockingState> {
        if let Some(state) = self.state.get() {
            return Ok(state);
        }

        let runtime = Builder::new_current_thread().enable_all().build()?;
        let http = build_http_client(config)?;
        tracing::debug!("Started runtime for blocking Lightdash calls");

        // A concurrent first call may have won the race; its state is kept.
        let _ = self.state.set(BlockingState {
            runtime: Some(runtime),
            http,
        });
        self.state
            .get()
            .ok_or_else(|| Error::Config("blocking runtime unavailable".to_string()))
    }
}

impl Drop for BlockingState {
    fn drop(&mut self) {
        // The last client handle may be dropped inside an async task, where a
        // blocking runtime shutdown would panic.
        if let Some(runtime) = self.runtime.take() {
            runtime.shutdown_background();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runtime_is_lazy() {
        let blocking = BlockingRuntime::new();
        assert!(blocking.state.get().is_none());

        let config = ClientConfig::new("https://example.lightdash.com", "t").unwrap();
        let value = blocking.block_on(&config, |_http| async { Ok(41 + 1) }).unwrap();
        assert_eq!(value, 42);
        assert!(blocking.state.get().is_some());
    }

    #[tokio::test]
    async fn test_drop_inside_async_context() {
        let blocking = std::thread::spawn(|| {
            let blocking = BlockingRuntime::new();
            let config = ClientConfig::new("https://example.lightdash.com", "t").unwrap();
            blocking.block_on(&config, |_http| async { Ok(()) }).unwrap();
            blocking
        })
        .join()
        .unwrap();

        drop(blocking);
    }
}
