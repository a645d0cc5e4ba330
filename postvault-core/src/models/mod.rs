//! Domain models for postvault.
//!
//! ## Submodules
//!
//! - [`post`] - Archived post types ([`Post`], [`PostMetrics`])
//! - [`account`] - Resolved account identity ([`Account`])

mod account;
mod post;

// Re-export everything at the models level
pub use account::Account;
pub use post::{Post, PostMetrics};

#[cfg(test)]
mod serde_tests;
