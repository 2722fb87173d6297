//! Wire types for the feed endpoint and the local fixture file.
//!
//! Both sources speak the same JSON shape: an envelope with a `videos` array
//! and a `nextCursor` token. The structs here mirror the wire spelling exactly
//! (`shortVideoURL`, `avatarURL`, ...) and convert into the domain model via
//! [`VideoDto::into_item`]. Keeping the DTOs separate from [`FeedItem`] means
//! a wire rename never leaks past this module.

use serde::Deserialize;

use crate::feed::types::FeedItem;

/// Page envelope: `{ "videos": [...], "nextCursor": "..." | null }`.
#[derive(Debug, Deserialize)]
pub struct FeedPageResponse {
    pub videos: Vec<VideoDto>,
    #[serde(rename = "nextCursor", default)]
    pub next_cursor: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct VideoDto {
    pub id: String,
    pub creator: CreatorDto,
    #[serde(rename = "shortVideoURL")]
    pub short_video_url: String,
    // Optional on the wire in practice even though every current payload
    // carries it; the domain field is optional either way.
    #[serde(rename = "fullVideoURL", default)]
    pub full_video_url: Option<String>,
    pub description: String,
    pub likes: u32,
    pub comments: u32,
}

#[derive(Debug, Deserialize)]
pub struct CreatorDto {
    pub id: String,
    pub name: String,
    #[serde(rename = "avatarURL", default)]
    pub avatar_url: Option<String>,
}

impl VideoDto {
    /// Map the wire representation into the domain model.
    ///
    /// Renames: `description` -> `caption`, `likes` -> `like_count`,
    /// `comments` -> `comment_count`, `creator.avatarURL` ->
    /// `creator_avatar_url`. Everything else maps by identity.
    pub fn into_item(self) -> FeedItem {
        FeedItem {
            id: self.id,
            creator_id: self.creator.id,
            creator_name: self.creator.name,
            creator_avatar_url: self.creator.avatar_url,
            short_video_url: self.short_video_url,
            full_video_url: self.full_video_url,
            caption: self.description,
            like_count: self.likes,
            comment_count: self.comments,
        }
    }
}
