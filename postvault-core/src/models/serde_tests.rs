//! Serde round-trip tests for core types.
//!
//! These verify that archived posts survive serialization unchanged, in
//! particular that timestamps keep their full precision and UTC offset.

use chrono::DateTime;

use crate::{Account, Post, PostMetrics};

// ============================================================================
// Post Serde Tests
// ============================================================================

#[test]
fn test_post_roundtrip_preserves_offset() {
    let post = Post::new(
        "1580661436132757504",
        "hello from Lisbon",
        DateTime::parse_from_rfc3339("2023-06-15T09:30:00+01:00").unwrap(),
        None,
    )
    .unwrap();

    let json = serde_json::to_string(&post).unwrap();
    let back: Post = serde_json::from_str(&json).unwrap();

    assert_eq!(back, post);
    // Offset must survive verbatim, not be normalized to UTC.
    assert!(json.contains("+01:00"), "offset lost in {json}");
}

#[test]
fn test_post_roundtrip_utc_timestamp() {
    let post = Post::new(
        "2",
        "utc post",
        DateTime::parse_from_rfc3339("2023-01-02T12:00:00Z").unwrap(),
        None,
    )
    .unwrap();

    let json = serde_json::to_string(&post).unwrap();
    let back: Post = serde_json::from_str(&json).unwrap();
    assert_eq!(back.created_at, post.created_at);
}

#[test]
fn test_post_metrics_omitted_when_absent() {
    let post = Post::new(
        "3",
        "no counters",
        DateTime::parse_from_rfc3339("2023-01-03T12:00:00Z").unwrap(),
        None,
    )
    .unwrap();

    let json = serde_json::to_string(&post).unwrap();
    assert!(!json.contains("metrics"));
}

#[test]
fn test_post_with_metrics_roundtrip() {
    let metrics = PostMetrics {
        retweet_count: 10,
        reply_count: 2,
        like_count: 150,
        quote_count: 1,
        bookmark_count: Some(7),
        impression_count: None,
    };
    let post = Post::new(
        "4",
        "popular post",
        DateTime::parse_from_rfc3339("2023-01-04T12:00:00Z").unwrap(),
        Some(metrics),
    )
    .unwrap();

    let json = serde_json::to_string(&post).unwrap();
    let back: Post = serde_json::from_str(&json).unwrap();

    assert_eq!(back.metrics, Some(metrics));
    // Absent optional counters stay out of the serialized form.
    assert!(!json.contains("impression_count"));
}

#[test]
fn test_post_deserialize_without_metrics_field() {
    // Older archives were written before metrics existed.
    let json = r#"{"id":"5","text":"legacy","created_at":"2022-05-01T00:00:00Z"}"#;
    let post: Post = serde_json::from_str(json).unwrap();
    assert!(post.metrics.is_none());
}

// ============================================================================
// Account Serde Tests
// ============================================================================

#[test]
fn test_account_roundtrip() {
    let account = Account {
        id: "44196397".to_string(),
        handle: "somebody".to_string(),
        display_name: "Some Body".to_string(),
    };

    let json = serde_json::to_string(&account).unwrap();
    let back: Account = serde_json::from_str(&json).unwrap();
    assert_eq!(back, account);
}
