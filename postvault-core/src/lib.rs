// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # Postvault Core
//!
//! Core types and models for the postvault archiver.
//!
//! This crate provides the foundational types used across all other
//! postvault crates:
//!
//! - [`Post`] - One archived post with its timestamp and optional metrics
//! - [`PostMetrics`] - The public engagement counters attached to a post
//! - [`Account`] - A resolved account (handle plus opaque id)
//! - [`CoreError`] - Error type for validation and serialization failures
//!
//! Posts are the unit of persistence: the store serializes them as a JSON
//! array, one file per account handle, and their timestamps round-trip
//! through serde as RFC 3339 with the original UTC offset intact.

pub mod error;
pub mod models;

// Re-export error types
pub use error::CoreError;

// Re-export all model types
pub use models::{Account, Post, PostMetrics};
