//! Archived post types.
//!
//! A [`Post`] is constructed once from a page-response element, validated,
//! persisted, and never mutated afterwards. The archive on disk is a JSON
//! array of these.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ============================================================================
// Post
// ============================================================================

/// One post as persisted in the archive.
///
/// Serialized timestamps are RFC 3339 and keep the offset the API reported,
/// so a document written on one machine reads back bit-identical elsewhere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    /// Opaque id assigned by the remote system. Never empty, never reused.
    pub id: String,
    /// Post body text.
    pub text: String,
    /// Creation time with the original UTC offset.
    pub created_at: DateTime<FixedOffset>,
    /// Public engagement counters, absent when the API omitted them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metrics: Option<PostMetrics>,
}

impl Post {
    /// Builds a post, enforcing the non-empty id invariant.
    pub fn new(
        id: impl Into<String>,
        text: impl Into<String>,
        created_at: DateTime<FixedOffset>,
        metrics: Option<PostMetrics>,
    ) -> Result<Self, CoreError> {
        let id = id.into();
        if id.is_empty() {
            return Err(CoreError::InvalidData("post id is empty".to_string()));
        }
        Ok(Self {
            id,
            text: text.into(),
            created_at,
            metrics,
        })
    }
}

// ============================================================================
// Post Metrics
// ============================================================================

/// Public engagement counters for a single post.
///
/// Mirrors the `public_metrics` object of the X API v2. The bookmark and
/// impression counters only exist on newer API tiers and stay `None` (and
/// unserialized) when the response omits them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PostMetrics {
    /// Number of reposts.
    pub retweet_count: u64,
    /// Number of replies.
    pub reply_count: u64,
    /// Number of likes.
    pub like_count: u64,
    /// Number of quote posts.
    pub quote_count: u64,
    /// Number of bookmarks, when the API tier reports it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bookmark_count: Option<u64>,
    /// Number of impressions, when the API tier reports it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub impression_count: Option<u64>,
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(s: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(s).unwrap()
    }

    #[test]
    fn test_new_rejects_empty_id() {
        let result = Post::new("", "hello", ts("2023-01-01T12:00:00Z"), None);
        assert!(result.is_err());
    }

    #[test]
    fn test_new_accepts_valid_post() {
        let post = Post::new("1", "hello", ts("2023-01-01T12:00:00Z"), None).unwrap();
        assert_eq!(post.id, "1");
        assert_eq!(post.text, "hello");
        assert!(post.metrics.is_none());
    }
}
