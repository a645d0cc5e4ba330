//! Per-handle post archive with idempotent merge.

use postvault_core::Post;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::error::StoreError;
use crate::persistence::{load_json, save_json};

/// One on-disk archive: a JSON array of posts for a single account handle.
///
/// The file is the sole durable state and is rewritten in full on each merge
/// that appends anything. After any successful merge the document holds the
/// union of everything merged so far, each id exactly once, in first-seen
/// order.
#[derive(Debug, Clone)]
pub struct Archive {
    path: PathBuf,
}

impl Archive {
    /// Archive for `handle`, stored as `{handle}_posts.json` under `dir`.
    pub fn for_handle(dir: impl AsRef<Path>, handle: &str) -> Self {
        Self {
            path: dir.as_ref().join(format!("{handle}_posts.json")),
        }
    }

    /// Archive at an explicit path.
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the current document.
    ///
    /// A missing file is an empty archive, an unparseable file is discarded
    /// with a warning, and elements that no longer deserialize as posts (or
    /// carry an empty id) are dropped with a warning. Any other read failure
    /// propagates: an intact document must never be clobbered just because
    /// it was momentarily unreadable.
    pub async fn load(&self) -> Result<Vec<Post>, StoreError> {
        let values: Vec<serde_json::Value> = match load_json(&self.path).await {
            Ok(values) => values,
            Err(StoreError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No existing archive, starting empty");
                return Ok(Vec::new());
            }
            Err(StoreError::Serialization(e)) => {
                warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Archive is not a valid JSON array, discarding its contents"
                );
                return Ok(Vec::new());
            }
            Err(e) => return Err(e),
        };

        let mut posts = Vec::with_capacity(values.len());
        for value in values {
            match serde_json::from_value::<Post>(value) {
                Ok(post) if !post.id.is_empty() => posts.push(post),
                Ok(_) => warn!("Dropping archived element with empty id"),
                Err(e) => warn!(error = %e, "Dropping unreadable archived element"),
            }
        }
        Ok(posts)
    }

    /// Merges one batch into the document and returns how many posts were
    /// actually appended.
    ///
    /// Posts whose id is already present are dropped; survivors keep batch
    /// order and land after everything already in the document. A batch with
    /// no survivors leaves the file untouched, so re-merging an
    /// already-represented batch is a safe no-op.
    pub async fn merge(&self, batch: &[Post]) -> Result<usize, StoreError> {
        let mut posts = self.load().await?;

        let mut seen: HashSet<String> = posts.iter().map(|p| p.id.clone()).collect();
        let fresh: Vec<Post> = batch
            .iter()
            .filter(|post| seen.insert(post.id.clone()))
            .cloned()
            .collect();

        let appended = fresh.len();
        if appended == 0 {
            debug!(path = %self.path.display(), "Nothing new in batch, skipping write");
            return Ok(0);
        }

        posts.extend(fresh);
        save_json(&self.path, &posts).await?;

        debug!(
            path = %self.path.display(),
            appended,
            total = posts.len(),
            "Merged batch into archive"
        );
        Ok(appended)
    }
}
