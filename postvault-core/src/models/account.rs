//! Resolved account identity.

use serde::{Deserialize, Serialize};

/// A resolved account: the originating handle plus the opaque id the remote
/// system knows it by.
///
/// Exists only for the duration of one run and is never persisted. The id is
/// kept as an unparsed string: snowflake ids overflow common fixed-width
/// integers and the API does not guarantee a range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Opaque account id, verbatim from the lookup response.
    pub id: String,
    /// The handle the lookup was performed with (no leading `@`).
    pub handle: String,
    /// Display name reported by the API.
    pub display_name: String,
}
