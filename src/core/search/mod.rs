//! core/search/mod.rs
//! Video search + stream resolution.
//!
//! Both calls block on the network. Only ever call them from a worker thread.

use tracing::{debug, info};

use crate::core::error::{BackendError, ResolveError, SearchError};
use crate::core::types::SearchResult;

mod ytdlp;

pub use ytdlp::YtDlp;

/// Largest result count a single search may ask for.
pub const MAX_RESULTS: usize = 10;

/// The seam to whatever actually talks to the video site.
#[cfg_attr(test, mockall::automock)]
pub trait SearchBackend: Send + Sync {
    /// Up to `limit` results in rank order.
    fn search(&self, query: &str, limit: usize) -> Result<Vec<SearchResult>, BackendError>;

    /// Turn a page link into a URL the engine can stream.
    fn resolve(&self, link: &str) -> Result<String, BackendError>;
}

pub struct SearchClient {
    backend: Box<dyn SearchBackend>,
}

impl SearchClient {
    pub fn new(backend: Box<dyn SearchBackend>) -> Self {
        Self { backend }
    }

    /// Search by text. `limit` is clamped to `0..=MAX_RESULTS`.
    pub fn search(&self, query: &str, limit: usize) -> Result<Vec<SearchResult>, SearchError> {
        let limit = limit.min(MAX_RESULTS);
        if limit == 0 {
            return Err(SearchError::NoResults);
        }

        debug!(query, limit, "searching");
        let mut results = self.backend.search(query, limit)?;
        results.truncate(limit);

        if results.is_empty() {
            return Err(SearchError::NoResults);
        }
        info!(query, count = results.len(), "search finished");
        Ok(results)
    }

    pub fn resolve_stream_url(&self, link: &str) -> Result<String, ResolveError> {
        debug!(link, "resolving stream url");
        let url = self.backend.resolve(link)?;
        let url = url.trim();
        if url.is_empty() {
            return Err(ResolveError::NoStream);
        }
        Ok(url.to_string())
    }
}
