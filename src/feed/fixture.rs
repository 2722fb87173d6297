//! Local fixture implementation of the fetcher contract.
//!
//! Reads a complete feed from a JSON file shaped like the wire envelope and
//! serves it one cursor-addressed slice at a time. Used as the development
//! source and by the end-to-end tests; an optional artificial delay makes it
//! feel like a network round-trip.

use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;

use crate::feed::dto::FeedPageResponse;
use crate::feed::fetcher::{FeedFetcher, FeedPage, FetchError};

/// Serves pages out of a local JSON fixture file.
///
/// The file is re-read on every call, so edits show up without a restart.
/// Pagination is a linear scan: the page starts right after the item whose id
/// equals the cursor (from the top when the cursor is absent or unknown) and
/// takes at most `limit` items, preserving file order.
pub struct FixtureFetcher {
    path: PathBuf,
    delay: Duration,
}

impl FixtureFetcher {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            delay: Duration::ZERO,
        }
    }

    /// Sleep this long before serving each page, simulating network latency.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl FeedFetcher for FixtureFetcher {
    async fn fetch_page(&self, cursor: Option<&str>, limit: u32) -> Result<FeedPage, FetchError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let bytes = tokio::fs::read(&self.path).await?;
        let response: FeedPageResponse = serde_json::from_slice(&bytes)?;
        let all: Vec<_> = response
            .videos
            .into_iter()
            .map(|dto| dto.into_item())
            .collect();

        // Page starts right after the cursor item. An unknown cursor restarts
        // from the top rather than failing.
        let start = match cursor {
            Some(id) => all
                .iter()
                .position(|item| item.id == id)
                .map(|pos| pos + 1)
                .unwrap_or(0),
            None => 0,
        };

        let end = start.saturating_add(limit as usize).min(all.len());
        let items: Vec<_> = all[start..end].to_vec();

        // No cursor once the slice runs out or touches the last fixture item;
        // otherwise the last id of the slice addresses the next page.
        let next_cursor = if items.is_empty() || end >= all.len() {
            None
        } else {
            items.last().map(|item| item.id.clone())
        };

        tracing::debug!(
            path = %self.path.display(),
            cursor = cursor.unwrap_or("-"),
            limit = limit,
            served = items.len(),
            "Served fixture page"
        );

        Ok(FeedPage { items, next_cursor })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Build a fixture file with `count` items ids `v1..vN` in a fresh temp dir.
    fn write_fixture(name: &str, count: usize) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("reel_fixture_test_{}", name));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("feed.json");

        let videos: Vec<String> = (1..=count)
            .map(|i| {
                format!(
                    r#"{{
                        "id": "v{i}",
                        "creator": {{ "id": "u{i}", "name": "User {i}", "avatarURL": "https://example.com/a{i}.jpg" }},
                        "shortVideoURL": "https://example.com/v{i}.mp4",
                        "fullVideoURL": "https://example.com/f{i}.mp4",
                        "description": "Caption {i}",
                        "likes": {i},
                        "comments": {i}
                    }}"#
                )
            })
            .collect();
        let body = format!(r#"{{ "videos": [{}], "nextCursor": null }}"#, videos.join(","));
        std::fs::write(&path, body).unwrap();
        path
    }

    fn ids(page: &FeedPage) -> Vec<&str> {
        page.items.iter().map(|i| i.id.as_str()).collect()
    }

    #[tokio::test]
    async fn test_first_page_from_top() {
        let path = write_fixture("first_page", 5);
        let fetcher = FixtureFetcher::new(&path);

        let page = fetcher.fetch_page(None, 2).await.unwrap();
        assert_eq!(ids(&page), ["v1", "v2"]);
        assert_eq!(page.next_cursor.as_deref(), Some("v2"));
    }

    #[tokio::test]
    async fn test_cursor_resumes_after_item() {
        let path = write_fixture("resume", 5);
        let fetcher = FixtureFetcher::new(&path);

        let page = fetcher.fetch_page(Some("v2"), 2).await.unwrap();
        assert_eq!(ids(&page), ["v3", "v4"]);
        assert_eq!(page.next_cursor.as_deref(), Some("v4"));
    }

    #[tokio::test]
    async fn test_final_full_page_reports_no_cursor() {
        let path = write_fixture("final_page", 5);
        let fetcher = FixtureFetcher::new(&path);

        // All five items in one page: the slice touches the end of the
        // fixture, so there is nothing further to serve.
        let page = fetcher.fetch_page(None, 5).await.unwrap();
        assert_eq!(page.items.len(), 5);
        assert!(page.next_cursor.is_none());
    }

    #[tokio::test]
    async fn test_limit_past_the_end_clamps() {
        let path = write_fixture("clamp", 3);
        let fetcher = FixtureFetcher::new(&path);

        let page = fetcher.fetch_page(Some("v2"), 10).await.unwrap();
        assert_eq!(ids(&page), ["v3"]);
        assert!(page.next_cursor.is_none());
    }

    #[tokio::test]
    async fn test_cursor_at_last_item_yields_empty_page() {
        let path = write_fixture("exhausted", 3);
        let fetcher = FixtureFetcher::new(&path);

        let page = fetcher.fetch_page(Some("v3"), 5).await.unwrap();
        assert!(page.items.is_empty());
        assert!(page.next_cursor.is_none());
    }

    #[tokio::test]
    async fn test_unknown_cursor_restarts_from_top() {
        let path = write_fixture("unknown_cursor", 3);
        let fetcher = FixtureFetcher::new(&path);

        let page = fetcher.fetch_page(Some("no-such-id"), 2).await.unwrap();
        assert_eq!(ids(&page), ["v1", "v2"]);
    }

    #[tokio::test]
    async fn test_empty_fixture() {
        let dir = std::env::temp_dir().join("reel_fixture_test_empty");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("feed.json");
        std::fs::write(&path, r#"{ "videos": [], "nextCursor": null }"#).unwrap();

        let fetcher = FixtureFetcher::new(&path);
        let page = fetcher.fetch_page(None, 5).await.unwrap();
        assert!(page.items.is_empty());
        assert!(page.next_cursor.is_none());
    }

    #[tokio::test]
    async fn test_missing_file_is_fixture_error() {
        let fetcher = FixtureFetcher::new("/nonexistent/reel/feed.json");
        let err = fetcher.fetch_page(None, 5).await.unwrap_err();
        assert!(matches!(err, FetchError::Fixture(_)));
    }

    #[tokio::test]
    async fn test_invalid_json_is_decode_error() {
        let dir = std::env::temp_dir().join("reel_fixture_test_bad_json");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("feed.json");
        std::fs::write(&path, "{ not json").unwrap();

        let fetcher = FixtureFetcher::new(&path);
        let err = fetcher.fetch_page(None, 5).await.unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_simulated_delay_is_applied() {
        let path = write_fixture("delay", 1);
        let fetcher = FixtureFetcher::new(&path).with_delay(Duration::from_secs(1));

        let started = tokio::time::Instant::now();
        let page = fetcher.fetch_page(None, 1).await.unwrap();
        assert_eq!(page.items.len(), 1);
        assert!(started.elapsed() >= Duration::from_secs(1));
    }
}
