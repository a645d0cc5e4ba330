//! Rate-limit back-off computation.
//!
//! The API signals rate limiting with a 429 plus one of two header
//! conventions: `retry-after` (seconds to wait) or `x-rate-limit-reset`
//! (absolute epoch seconds). This module turns whichever was present into a
//! wait duration.

use chrono::{DateTime, Utc};
use std::time::Duration;

/// Wait when neither back-off header was present or parseable.
pub const DEFAULT_BACKOFF: Duration = Duration::from_secs(60);

/// Safety margin added on top of a reset timestamp, so the retry lands after
/// the window actually rolls over.
const RESET_BUFFER: Duration = Duration::from_secs(1);

/// Computes how long to wait before retrying a rate-limited request.
///
/// Precedence: a well-formed `retry-after` value wins; otherwise the reset
/// timestamp (clamped at zero, plus a one second buffer); otherwise
/// [`DEFAULT_BACKOFF`].
pub fn rate_limit_wait(
    retry_after: Option<u64>,
    reset_at: Option<i64>,
    now: DateTime<Utc>,
) -> Duration {
    if let Some(secs) = retry_after {
        return Duration::from_secs(secs);
    }
    if let Some(epoch) = reset_at {
        let remaining = u64::try_from(epoch.saturating_sub(now.timestamp())).unwrap_or(0);
        return Duration::from_secs(remaining) + RESET_BUFFER;
    }
    DEFAULT_BACKOFF
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_retry_after_takes_precedence() {
        let reset = now().timestamp() + 120;
        let wait = rate_limit_wait(Some(5), Some(reset), now());
        assert_eq!(wait, Duration::from_secs(5));
    }

    #[test]
    fn test_reset_timestamp_with_buffer() {
        let reset = now().timestamp() + 10;
        let wait = rate_limit_wait(None, Some(reset), now());
        assert_eq!(wait, Duration::from_secs(11));
    }

    #[test]
    fn test_reset_in_the_past_clamps_to_buffer() {
        let reset = now().timestamp() - 30;
        let wait = rate_limit_wait(None, Some(reset), now());
        assert_eq!(wait, Duration::from_secs(1));
    }

    #[test]
    fn test_no_headers_falls_back_to_default() {
        let wait = rate_limit_wait(None, None, now());
        assert_eq!(wait, DEFAULT_BACKOFF);
    }
}
