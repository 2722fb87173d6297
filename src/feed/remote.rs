//! HTTP implementation of the fetcher contract.
//!
//! One GET per page against the feed endpoint, with the cursor and limit as
//! query parameters. No retries here: the contract is a single attempt per
//! call, and the loader turns any failure into its error state immediately.

use std::time::Duration;

use async_trait::async_trait;
use futures::StreamExt;
use url::Url;

use crate::feed::dto::FeedPageResponse;
use crate::feed::fetcher::{FeedFetcher, FeedPage, FetchError};

/// A page response has no business being megabytes; cap the body so a
/// misbehaving server cannot exhaust memory.
const MAX_BODY_SIZE: usize = 2 * 1024 * 1024; // 2MB

/// Fetches feed pages from an HTTP endpoint.
pub struct RemoteFetcher {
    client: reqwest::Client,
    endpoint: Url,
    timeout: Duration,
}

impl RemoteFetcher {
    pub fn new(client: reqwest::Client, endpoint: Url) -> Self {
        Self {
            client,
            endpoint,
            timeout: Duration::from_secs(30),
        }
    }

    /// Override the per-request timeout (default 30 seconds).
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl FeedFetcher for RemoteFetcher {
    async fn fetch_page(&self, cursor: Option<&str>, limit: u32) -> Result<FeedPage, FetchError> {
        let mut request = self
            .client
            .get(self.endpoint.clone())
            .query(&[("limit", limit.to_string())]);
        if let Some(cursor) = cursor {
            request = request.query(&[("cursor", cursor)]);
        }

        let response = tokio::time::timeout(self.timeout, request.send())
            .await
            .map_err(|_| FetchError::Timeout)?
            .map_err(FetchError::Network)?;

        if !response.status().is_success() {
            return Err(FetchError::HttpStatus(response.status().as_u16()));
        }

        let bytes = read_limited_bytes(response, MAX_BODY_SIZE).await?;
        let page: FeedPageResponse = serde_json::from_slice(&bytes)?;

        tracing::debug!(
            endpoint = %self.endpoint,
            cursor = cursor.unwrap_or("-"),
            limit = limit,
            received = page.videos.len(),
            "Fetched feed page"
        );

        Ok(FeedPage {
            items: page.videos.into_iter().map(|dto| dto.into_item()).collect(),
            next_cursor: page.next_cursor,
        })
    }
}

async fn read_limited_bytes(
    response: reqwest::Response,
    limit: usize,
) -> Result<Vec<u8>, FetchError> {
    // Fast path: trust Content-Length when the server sends one.
    if let Some(len) = response.content_length() {
        if len as usize > limit {
            return Err(FetchError::ResponseTooLarge);
        }
    }

    let mut bytes = Vec::new();
    let mut stream = response.bytes_stream();

    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(FetchError::Network)?;
        if bytes.len().saturating_add(chunk.len()) > limit {
            return Err(FetchError::ResponseTooLarge);
        }
        bytes.extend_from_slice(&chunk);
    }

    Ok(bytes)
}
