//! reqwest-backed [`PostsGateway`] implementation.

use async_trait::async_trait;
use postvault_core::Account;
use reqwest::{Client, Response, StatusCode, header};
use std::time::Duration;
use tracing::{debug, warn};

use crate::api::{PostsPage, TimelineResponse, UserLookupResponse};
use crate::error::FetchError;
use crate::gateway::PostsGateway;

/// Base URL for the X API v2.
pub const API_BASE_URL: &str = "https://api.twitter.com/2";

/// Field selection sent with every timeline request. The default response
/// omits timestamps and metrics entirely.
const POST_FIELDS: &str = "created_at,public_metrics";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// HTTP client for the two endpoints postvault consumes: handle lookup and
/// the paginated timeline listing.
#[derive(Debug, Clone)]
pub struct ApiClient {
    inner: Client,
    base_url: String,
    bearer_token: String,
}

impl ApiClient {
    /// Creates a client authenticating with the given bearer token.
    pub fn new(bearer_token: impl Into<String>) -> Result<Self, FetchError> {
        let inner = Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .user_agent(concat!("postvault/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            inner,
            base_url: API_BASE_URL.to_string(),
            bearer_token: bearer_token.into(),
        })
    }

    /// Overrides the API base URL (tests, proxies).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sends an authenticated GET and maps the status code.
    ///
    /// 429 becomes [`FetchError::RateLimited`] with whatever back-off hints
    /// the response carried; any other non-success status becomes
    /// [`FetchError::InvalidResponse`].
    async fn get(&self, url: &str, query: &[(&str, &str)]) -> Result<Response, FetchError> {
        debug!(url = %url, "GET");

        let response = self
            .inner
            .get(url)
            .query(query)
            .header(
                header::AUTHORIZATION,
                format!("Bearer {}", self.bearer_token),
            )
            .send()
            .await?;

        let status = response.status();

        if status == StatusCode::TOO_MANY_REQUESTS {
            let retry_after = header_value(&response, header::RETRY_AFTER.as_str());
            let reset_at = header_value(&response, "x-rate-limit-reset");
            warn!(?retry_after, ?reset_at, "rate limited");
            return Err(FetchError::RateLimited {
                retry_after,
                reset_at,
            });
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::InvalidResponse(format!(
                "status {status}: {body}"
            )));
        }

        Ok(response)
    }

    /// The lookup proper; [`PostsGateway::resolve_user`] wraps any failure
    /// here into `ResolutionFailed`.
    async fn lookup_user(&self, handle: &str) -> Result<Account, FetchError> {
        if handle.is_empty() {
            return Err(FetchError::InvalidHandle("handle is empty".to_string()));
        }
        if handle.starts_with('@') {
            return Err(FetchError::InvalidHandle(format!(
                "handle '{handle}' still carries the '@' marker"
            )));
        }

        let url = format!("{}/users/by/username/{handle}", self.base_url);
        let response = self.get(&url, &[]).await?;
        let body: UserLookupResponse = response.json().await?;

        let user = body.data.filter(|u| !u.id.is_empty()).ok_or_else(|| {
            FetchError::InvalidResponse("lookup response missing user id".to_string())
        })?;

        debug!(id = %user.id, "resolved handle");
        Ok(Account {
            id: user.id,
            handle: user.username,
            display_name: user.name,
        })
    }
}

/// Parses a header into a number, quietly ignoring absent or malformed values.
fn header_value<T: std::str::FromStr>(response: &Response, name: &str) -> Option<T> {
    response
        .headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse().ok())
}

#[async_trait]
impl PostsGateway for ApiClient {
    async fn resolve_user(&self, handle: &str) -> Result<Account, FetchError> {
        self.lookup_user(handle)
            .await
            .map_err(|source| FetchError::ResolutionFailed {
                handle: handle.to_string(),
                source: Box::new(source),
            })
    }

    async fn fetch_page(
        &self,
        user_id: &str,
        page_size: usize,
        cursor: Option<&str>,
    ) -> Result<PostsPage, FetchError> {
        let url = format!("{}/users/{user_id}/tweets", self.base_url);
        let max_results = page_size.to_string();

        let mut query = vec![
            ("max_results", max_results.as_str()),
            ("tweet.fields", POST_FIELDS),
        ];
        if let Some(token) = cursor {
            query.push(("pagination_token", token));
        }

        let response = self.get(&url, &query).await?;
        let body: TimelineResponse = response.json().await?;

        Ok(body.into_page())
    }
}
