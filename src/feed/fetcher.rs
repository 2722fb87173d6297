//! The page-fetching contract shared by every feed source.
//!
//! The loader only ever talks to a [`FeedFetcher`]; whether pages come from an
//! HTTP endpoint ([`crate::feed::RemoteFetcher`]) or a local JSON fixture
//! ([`crate::feed::FixtureFetcher`]) is decided once by the composition root
//! and injected through the constructor.

use async_trait::async_trait;
use thiserror::Error;

use crate::feed::types::FeedItem;

/// Errors that can occur while fetching a feed page.
///
/// The loader treats all of these uniformly (any failure becomes the error
/// view state); the only distinction it consults is [`FetchError::is_offline`]
/// when formatting the user-facing notice.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Network-level error (DNS, connection, TLS, etc.)
    #[error("Request failed: {0}")]
    Network(#[from] reqwest::Error),
    /// HTTP response with non-2xx status code
    #[error("HTTP error: status {0}")]
    HttpStatus(u16),
    /// Request exceeded the configured timeout
    #[error("Request timed out")]
    Timeout,
    /// Response or fixture body was not a valid page envelope
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),
    /// Response body exceeded the size limit
    #[error("Response too large")]
    ResponseTooLarge,
    /// Fixture file could not be read
    #[error("Fixture error: {0}")]
    Fixture(#[from] std::io::Error),
}

impl FetchError {
    /// Whether this failure looks like a connectivity problem rather than a
    /// malformed response or a server-side rejection. Drives the
    /// "You are offline!" split in [`crate::feed::ErrorNotice`].
    pub fn is_offline(&self) -> bool {
        matches!(self, FetchError::Network(_) | FetchError::Timeout)
    }
}

/// One page of feed items plus the token for the page after it.
///
/// `next_cursor == None` means the source has nothing further to serve.
/// Item order is exactly as stored/received; fetchers never sort or dedupe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedPage {
    pub items: Vec<FeedItem>,
    pub next_cursor: Option<String>,
}

/// A source of feed pages.
///
/// One underlying request/read per call, no internal retries: failure
/// handling is the caller's job, and the loader surfaces failures immediately
/// as its error state.
#[async_trait]
pub trait FeedFetcher: Send + Sync {
    /// Fetch the page after `cursor` (`None` for the first page), at most
    /// `limit` items.
    async fn fetch_page(&self, cursor: Option<&str>, limit: u32) -> Result<FeedPage, FetchError>;
}
