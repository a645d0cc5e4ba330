// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # Postvault Store
//!
//! Durable, idempotent persistence for fetched posts.
//!
//! An [`Archive`] is one JSON document per account handle. Each call to
//! [`Archive::merge`] folds one batch into the document: previously unseen
//! posts are appended in batch order, duplicates are dropped by id, and the
//! whole file is rewritten atomically (temp file + rename) so no crash can
//! leave a half-written document behind.
//!
//! ```ignore
//! let archive = Archive::for_handle("archives", "somebody");
//! let appended = archive.merge(&batch).await?;
//! ```

pub mod archive;
pub mod error;
pub mod persistence;

pub use archive::Archive;
pub use error::StoreError;
pub use persistence::{load_json, save_json};
