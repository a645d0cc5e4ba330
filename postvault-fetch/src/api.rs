//! Wire-format types for the X API v2 endpoints postvault consumes.
//!
//! Only the fields this tool reads are modeled; everything else in the
//! responses is ignored.
//!
//! # Endpoints
//!
//! ```text
//! GET /2/users/by/username/{handle}
//! GET /2/users/{id}/tweets?max_results=N&tweet.fields=created_at,public_metrics
//! ```

use chrono::DateTime;
use postvault_core::{CoreError, Post, PostMetrics};
use serde::Deserialize;

// ============================================================================
// User Lookup
// ============================================================================

/// Response from the user lookup endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct UserLookupResponse {
    /// User object, absent when the handle is unknown.
    pub data: Option<UserObject>,
}

/// User object from the lookup response.
#[derive(Debug, Clone, Deserialize)]
pub struct UserObject {
    /// Opaque account id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Handle, echoed back without the `@`.
    pub username: String,
}

// ============================================================================
// Timeline Page
// ============================================================================

/// Raw response from the timeline endpoint.
///
/// An empty timeline answers 200 with no `data` array at all, so the field
/// defaults to empty rather than failing deserialization.
#[derive(Debug, Clone, Deserialize)]
pub struct TimelineResponse {
    /// Posts in response order.
    #[serde(default)]
    pub data: Vec<RawPost>,
    /// Pagination metadata.
    pub meta: Option<TimelineMeta>,
}

/// Pagination metadata from the timeline endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct TimelineMeta {
    /// Cursor for the next page; absent on the last page.
    pub next_token: Option<String>,
    /// Item count the API claims for this page.
    pub result_count: Option<u32>,
}

impl TimelineResponse {
    /// Flattens the response into the page shape the engine consumes.
    pub fn into_page(self) -> PostsPage {
        let next_token = self.meta.and_then(|m| m.next_token);
        PostsPage {
            posts: self.data,
            next_token,
        }
    }
}

/// One page of posts as handed to the pagination engine: the raw items in
/// response order plus the opaque continuation cursor, if any.
#[derive(Debug, Clone)]
pub struct PostsPage {
    /// Raw posts, not yet validated.
    pub posts: Vec<RawPost>,
    /// Opaque cursor for the next page.
    pub next_token: Option<String>,
}

// ============================================================================
// Raw Post
// ============================================================================

/// One unvalidated post element from a timeline page.
#[derive(Debug, Clone, Deserialize)]
pub struct RawPost {
    /// Post id.
    #[serde(default)]
    pub id: String,
    /// Post body text.
    #[serde(default)]
    pub text: String,
    /// Creation timestamp as the API sent it (RFC 3339).
    pub created_at: Option<String>,
    /// Engagement counters.
    pub public_metrics: Option<RawMetrics>,
}

/// The `public_metrics` object of a post.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct RawMetrics {
    /// Repost count.
    #[serde(default)]
    pub retweet_count: u64,
    /// Reply count.
    #[serde(default)]
    pub reply_count: u64,
    /// Like count.
    #[serde(default)]
    pub like_count: u64,
    /// Quote count.
    #[serde(default)]
    pub quote_count: u64,
    /// Bookmark count (newer API tiers only).
    pub bookmark_count: Option<u64>,
    /// Impression count (newer API tiers only).
    pub impression_count: Option<u64>,
}

impl RawPost {
    /// Validates this element into a [`Post`].
    ///
    /// Fails on an empty id or a missing/unparseable timestamp; the engine
    /// logs and skips such elements without failing the page.
    pub fn into_post(self) -> Result<Post, CoreError> {
        let raw_ts = self
            .created_at
            .ok_or_else(|| CoreError::InvalidData("post missing created_at".to_string()))?;
        let created_at = DateTime::parse_from_rfc3339(&raw_ts)
            .map_err(|e| CoreError::InvalidData(format!("bad created_at '{raw_ts}': {e}")))?;
        let metrics = self.public_metrics.map(|m| PostMetrics {
            retweet_count: m.retweet_count,
            reply_count: m.reply_count,
            like_count: m.like_count,
            quote_count: m.quote_count,
            bookmark_count: m.bookmark_count,
            impression_count: m.impression_count,
        });
        Post::new(self.id, self.text, created_at, metrics)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_timeline_response() {
        let json = r#"{
            "data": [
                {
                    "id": "100",
                    "text": "first",
                    "created_at": "2023-01-01T12:00:00.000Z",
                    "public_metrics": {
                        "retweet_count": 1,
                        "reply_count": 0,
                        "like_count": 5,
                        "quote_count": 0
                    }
                },
                {"id": "101", "text": "second", "created_at": "2023-01-02T08:30:00.000Z"}
            ],
            "meta": {"next_token": "7140dibdnow9c7btw482", "result_count": 2}
        }"#;

        let response: TimelineResponse = serde_json::from_str(json).unwrap();
        let page = response.into_page();

        assert_eq!(page.posts.len(), 2);
        assert_eq!(page.next_token.as_deref(), Some("7140dibdnow9c7btw482"));

        let post = page.posts[0].clone().into_post().unwrap();
        assert_eq!(post.id, "100");
        assert_eq!(post.metrics.unwrap().like_count, 5);
    }

    #[test]
    fn test_parse_empty_timeline() {
        // Accounts with no posts answer without a data array.
        let json = r#"{"meta": {"result_count": 0}}"#;
        let response: TimelineResponse = serde_json::from_str(json).unwrap();
        let page = response.into_page();

        assert!(page.posts.is_empty());
        assert!(page.next_token.is_none());
    }

    #[test]
    fn test_into_post_rejects_missing_timestamp() {
        let raw = RawPost {
            id: "1".to_string(),
            text: "no timestamp".to_string(),
            created_at: None,
            public_metrics: None,
        };
        assert!(raw.into_post().is_err());
    }

    #[test]
    fn test_into_post_rejects_empty_id() {
        let raw = RawPost {
            id: String::new(),
            text: "anonymous".to_string(),
            created_at: Some("2023-01-01T12:00:00Z".to_string()),
            public_metrics: None,
        };
        assert!(raw.into_post().is_err());
    }

    #[test]
    fn test_into_post_keeps_offset() {
        let raw = RawPost {
            id: "1".to_string(),
            text: "offset".to_string(),
            created_at: Some("2023-06-15T09:30:00+02:00".to_string()),
            public_metrics: None,
        };
        let post = raw.into_post().unwrap();
        assert_eq!(post.created_at.offset().local_minus_utc(), 2 * 3600);
    }

    #[test]
    fn test_parse_user_lookup() {
        let json = r#"{"data": {"id": "2244994945", "name": "Dev", "username": "dev"}}"#;
        let response: UserLookupResponse = serde_json::from_str(json).unwrap();
        let user = response.data.unwrap();
        assert_eq!(user.id, "2244994945");
        assert_eq!(user.username, "dev");
    }
}
