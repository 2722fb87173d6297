//! Client library for a cursor-paginated short-video feed.
//!
//! The core is [`feed::FeedLoader`], a view-state-driven pagination state
//! machine over the [`feed::FeedFetcher`] contract. The `reel` binary wires a
//! concrete fetcher (HTTP endpoint or local JSON fixture) into a loader and
//! walks the feed from a terminal.

pub mod config;
pub mod feed;
pub mod util;
