//! Pull-based pagination engine.
//!
//! [`PostStream`] produces the complete (or limit-bounded) sequence of a
//! user's posts one batch per page, so the consumer can persist
//! incrementally. It is lazy: no request is issued until [`next_batch`] is
//! called, and a consumer that stops pulling stops the engine.
//!
//! [`next_batch`]: PostStream::next_batch

use chrono::Utc;
use postvault_core::Post;
use tracing::{debug, warn};

use crate::backoff;
use crate::error::FetchError;
use crate::gateway::PostsGateway;

/// Largest page size the timeline endpoint accepts.
pub const MAX_PAGE_SIZE: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StreamState {
    Active,
    Done,
    Aborted,
}

/// Paginated post stream for one account.
///
/// Rate limiting (429) is absorbed internally: the engine sleeps for the
/// duration the response headers dictate and re-issues the identical request,
/// with no retry cap. Any other failure moves the stream to its aborted
/// state: production stops, nothing is raised, and the cause is retained for
/// [`abort_cause`].
///
/// [`abort_cause`]: PostStream::abort_cause
pub struct PostStream<'a, G: PostsGateway> {
    gateway: &'a G,
    user_id: String,
    limit: Option<usize>,
    max_page_size: usize,
    cursor: Option<String>,
    fetched: usize,
    state: StreamState,
    abort_cause: Option<FetchError>,
}

impl<'a, G: PostsGateway> PostStream<'a, G> {
    /// Creates a stream over `user_id`'s posts.
    ///
    /// `limit` bounds the total number of items yielded across all batches;
    /// `max_page_size` caps how many items a single request may ask for and
    /// is clamped to [`MAX_PAGE_SIZE`].
    pub fn new(
        gateway: &'a G,
        user_id: impl Into<String>,
        limit: Option<usize>,
        max_page_size: usize,
    ) -> Self {
        Self {
            gateway,
            user_id: user_id.into(),
            limit,
            max_page_size: max_page_size.clamp(1, MAX_PAGE_SIZE),
            cursor: None,
            fetched: 0,
            state: StreamState::Active,
            abort_cause: None,
        }
    }

    /// Total number of valid items yielded so far.
    pub fn total_fetched(&self) -> usize {
        self.fetched
    }

    /// The failure that stopped the stream early, if any.
    pub fn abort_cause(&self) -> Option<&FetchError> {
        self.abort_cause.as_ref()
    }

    /// Fetches and yields the next non-empty batch, or `None` once the
    /// stream is exhausted or aborted.
    ///
    /// Pages whose items all fail validation yield no batch; the engine
    /// advances to the next cursor instead of emitting an empty one.
    pub async fn next_batch(&mut self) -> Option<Vec<Post>> {
        while self.state == StreamState::Active {
            if self.limit_reached() {
                // Covers limit = 0 and any pull after an exact-limit page.
                self.state = StreamState::Done;
                break;
            }
            let page_size = self.next_page_size();

            let page = match self.request_page(page_size).await {
                Ok(page) => page,
                Err(err) => {
                    warn!(error = %err, "fetch aborted");
                    self.state = StreamState::Aborted;
                    self.abort_cause = Some(err);
                    return None;
                }
            };

            let mut batch = Vec::with_capacity(page.posts.len());
            for raw in page.posts {
                match raw.into_post() {
                    Ok(post) => {
                        batch.push(post);
                        self.fetched += 1;
                    }
                    Err(err) => warn!(error = %err, "skipping invalid item"),
                }
                if self.limit_reached() {
                    // Truncate mid-page; the rest of this page is dropped.
                    break;
                }
            }

            if self.limit_reached() {
                self.state = StreamState::Done;
            } else {
                match page.next_token {
                    Some(token) => self.cursor = Some(token),
                    None => self.state = StreamState::Done,
                }
            }

            if !batch.is_empty() {
                debug!(
                    batch = batch.len(),
                    total = self.fetched,
                    "yielding batch"
                );
                return Some(batch);
            }
        }
        None
    }

    /// Issues one page request, sleeping and retrying for as long as the API
    /// keeps answering 429. This sleep is the pipeline's only suspension
    /// point.
    async fn request_page(&self, page_size: usize) -> Result<crate::api::PostsPage, FetchError> {
        loop {
            let result = self
                .gateway
                .fetch_page(&self.user_id, page_size, self.cursor.as_deref())
                .await;

            match result {
                Ok(page) => return Ok(page),
                Err(FetchError::RateLimited {
                    retry_after,
                    reset_at,
                }) => {
                    let wait = backoff::rate_limit_wait(retry_after, reset_at, Utc::now());
                    warn!(wait_secs = wait.as_secs(), "rate limited, backing off");
                    tokio::time::sleep(wait).await;
                }
                Err(err) => return Err(err),
            }
        }
    }

    fn next_page_size(&self) -> usize {
        match self.limit {
            Some(limit) => self.max_page_size.min(limit.saturating_sub(self.fetched)),
            None => self.max_page_size,
        }
    }

    fn limit_reached(&self) -> bool {
        self.limit.is_some_and(|limit| self.fetched >= limit)
    }
}

// ============================================================================
// Tests
// ============================================================================
