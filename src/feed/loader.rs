//! The feed loader: page accumulation and the observable view state.
//!
//! One loader instance lives for one feed session. It owns every item loaded
//! so far, the pagination cursor, and a [`ViewState`] the presentation layer
//! renders from. All it knows about the outside world is the injected
//! [`FeedFetcher`]; the choice of a concrete source is the composition root's.
//!
//! State transitions:
//!
//! ```text
//! Loading --(fetch ok, store empty)-----> Empty
//! Loading --(fetch ok, store non-empty)-> Ready
//! Loading --(fetch fails)--------------->  Error
//! Ready --(load_more ok)----------------> Ready
//! Ready --(load_more fails)------------->  Error
//! Error/Empty/Ready --(refresh/retry)---> Loading
//! ```
//!
//! Every operation takes `&mut self`, so two fetches can never overlap on one
//! loader: the exclusive borrow serializes callers, and a loader shared
//! across tasks has to live behind an async mutex, which queues operations.
//! A started fetch therefore always folds its result into state before the
//! next operation can begin.

use std::sync::Arc;

use crate::feed::fetcher::{FeedFetcher, FetchError};
use crate::feed::notice::ErrorNotice;
use crate::feed::types::FeedItem;

pub const DEFAULT_PAGE_LIMIT: u32 = 5;

/// What the presentation layer should currently render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    /// No items rendered yet; a fetch is in flight or about to start.
    Loading,
    /// Everything accumulated so far, in arrival order.
    Ready(Vec<FeedItem>),
    /// A completed fetch cycle produced zero items overall.
    Empty,
    /// The most recent fetch failed. Previously accumulated items stay in the
    /// loader's private store but are deliberately not exposed here; recovery
    /// via [`FeedLoader::retry`] reloads from the start.
    Error(ErrorNotice),
}

/// Cursor-paginated feed session.
pub struct FeedLoader {
    fetcher: Arc<dyn FeedFetcher>,
    page_limit: u32,
    items: Vec<FeedItem>,
    next_cursor: Option<String>,
    state: ViewState,
}

impl FeedLoader {
    pub fn new(fetcher: Arc<dyn FeedFetcher>) -> Self {
        Self::with_page_limit(fetcher, DEFAULT_PAGE_LIMIT)
    }

    pub fn with_page_limit(fetcher: Arc<dyn FeedFetcher>, page_limit: u32) -> Self {
        Self {
            fetcher,
            page_limit,
            items: Vec::new(),
            next_cursor: None,
            state: ViewState::Loading,
        }
    }

    /// The state to render right now. Valid after every awaited operation.
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// True iff the last fetch handed back a usable cursor.
    pub fn next_page_available(&self) -> bool {
        self.next_cursor.as_deref().is_some_and(|c| !c.is_empty())
    }

    /// Fetch the next page and fold it into the store.
    ///
    /// On success the returned items are appended (never reordered, never
    /// deduplicated) and the cursor advances; the state becomes [`ViewState::Empty`]
    /// when the whole store is still empty, [`ViewState::Ready`] otherwise.
    /// On failure the store is left untouched and the state becomes
    /// [`ViewState::Error`].
    pub async fn load(&mut self) {
        let result = self
            .fetcher
            .fetch_page(self.next_cursor.as_deref(), self.page_limit)
            .await;

        match result {
            Ok(page) => {
                self.items.extend(page.items);
                // An empty cursor token means the same as no token at all.
                self.next_cursor = page.next_cursor.filter(|c| !c.is_empty());
                self.state = if self.items.is_empty() {
                    ViewState::Empty
                } else {
                    ViewState::Ready(self.items.clone())
                };
            }
            Err(error) => {
                self.fail(error);
            }
        }
    }

    /// Fetch another page if one is available; otherwise resolve immediately
    /// without touching the fetcher. The call site for scroll-driven
    /// pagination triggers.
    pub async fn load_more(&mut self) {
        if !self.next_page_available() {
            return;
        }
        self.load().await;
    }

    /// Start the session over: drop everything accumulated, reset the cursor,
    /// show [`ViewState::Loading`], and fetch the first page again. Serves
    /// both pull-to-refresh and error recovery.
    pub async fn refresh(&mut self) {
        self.items.clear();
        self.next_cursor = None;
        self.state = ViewState::Loading;
        self.load().await;
    }

    /// Recover from the error state. Identical to [`FeedLoader::refresh`]:
    /// the reload starts from the first page, not from the failure point.
    pub async fn retry(&mut self) {
        self.refresh().await;
    }

    fn fail(&mut self, error: FetchError) {
        tracing::warn!(error = %error, retained = self.items.len(), "Feed fetch failed");
        self.state = ViewState::Error(ErrorNotice::from_error(&error));
    }
}
