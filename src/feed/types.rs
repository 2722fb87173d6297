// ============================================================================
// Data Structures
// ============================================================================

/// A single entry in the video feed.
///
/// Produced only by mapping from the wire representation ([`crate::feed::VideoDto`])
/// and never mutated afterwards. The loader accumulates these in arrival order;
/// duplicate ids across pages are passed through untouched.
///
/// The counters are unsigned on purpose: the wire promises non-negative values
/// and a negative count is a decode error, not a representable state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedItem {
    /// Unique item id. Also doubles as a pagination cursor value.
    pub id: String,
    pub creator_id: String,
    pub creator_name: String,
    pub creator_avatar_url: Option<String>,
    pub short_video_url: String,
    pub full_video_url: Option<String>,
    pub caption: String,
    pub like_count: u32,
    pub comment_count: u32,
}
