//! Gateway trait between the pagination engine and the HTTP client.

use async_trait::async_trait;
use postvault_core::Account;

use crate::api::PostsPage;
use crate::error::FetchError;

/// The remote operations the engine needs, abstracted so tests can script
/// page sequences without a network.
#[async_trait]
pub trait PostsGateway: Send + Sync {
    /// Resolves a handle (no leading `@`) to an [`Account`].
    ///
    /// Any failure is reported as [`FetchError::ResolutionFailed`] and is
    /// never retried.
    async fn resolve_user(&self, handle: &str) -> Result<Account, FetchError>;

    /// Fetches one timeline page for an account.
    ///
    /// A 429 response surfaces as [`FetchError::RateLimited`] carrying the
    /// response's back-off hints; the caller decides how long to wait and
    /// re-issues the identical request.
    async fn fetch_page(
        &self,
        user_id: &str,
        page_size: usize,
        cursor: Option<&str>,
    ) -> Result<PostsPage, FetchError>;
}
