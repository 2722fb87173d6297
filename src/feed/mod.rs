//! The feed module: domain model, fetcher implementations, and the loader.
//!
//! Everything the application knows about the video feed lives here:
//!
//! - **Domain model**: [`FeedItem`], built only from wire DTOs
//! - **Fetching**: the [`FeedFetcher`] contract with an HTTP implementation
//!   ([`RemoteFetcher`]) and a local-fixture one ([`FixtureFetcher`])
//! - **Loading**: [`FeedLoader`], the pagination state machine that
//!   accumulates pages and exposes a [`ViewState`] to the presentation layer
//!
//! # Architecture
//!
//! Data flows one direction: the presentation layer invokes loader
//! operations, the loader calls its injected fetcher, and the fetch result
//! folds into the view state the presentation layer re-renders from. The
//! loader never selects its own source; the composition root constructs one
//! fetcher and hands it over.

mod dto;
mod fetcher;
mod fixture;
mod loader;
mod notice;
mod remote;
mod types;

pub use dto::{CreatorDto, FeedPageResponse, VideoDto};
pub use fetcher::{FeedFetcher, FeedPage, FetchError};
pub use fixture::FixtureFetcher;
pub use loader::{FeedLoader, ViewState, DEFAULT_PAGE_LIMIT};
pub use notice::ErrorNotice;
pub use remote::RemoteFetcher;
pub use types::FeedItem;
