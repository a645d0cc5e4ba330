// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # Postvault Fetch
//!
//! Identity resolution and paginated timeline fetching against the X API v2.
//!
//! The two entry points are:
//!
//! - [`ApiClient`] - reqwest-backed client implementing [`PostsGateway`]:
//!   handle lookup and single-page timeline requests with bearer auth.
//! - [`PostStream`] - the pull-based pagination engine. It drives repeated
//!   page requests through a [`PostsGateway`], advances the cursor, enforces
//!   an optional item limit, and absorbs HTTP 429 responses by sleeping and
//!   re-issuing the identical request.
//!
//! The gateway trait is the seam between the two, so the engine's state
//! machine is exercised in tests without a network.
//!
//! ```ignore
//! let client = ApiClient::new(token)?;
//! let account = client.resolve_user("somebody").await?;
//! let mut stream = PostStream::new(&client, &account.id, Some(500), 100);
//! while let Some(batch) = stream.next_batch().await {
//!     // persist the batch
//! }
//! ```

pub mod api;
pub mod backoff;
pub mod client;
pub mod engine;
pub mod error;
pub mod gateway;

// Re-export key types at crate root
pub use api::{PostsPage, RawPost};
pub use client::{API_BASE_URL, ApiClient};
pub use engine::{MAX_PAGE_SIZE, PostStream};
pub use error::FetchError;
pub use gateway::PostsGateway;
