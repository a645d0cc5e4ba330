//! File persistence helpers.
//!
//! JSON writes go through a temp file followed by a rename, so the document
//! on disk is always a complete, self-contained serialization.

use serde::{Serialize, de::DeserializeOwned};
use std::path::Path;
use tracing::debug;

use crate::error::StoreError;

/// Saves data to a JSON file atomically.
///
/// Creates parent directories if they don't exist, writes to a sibling temp
/// file, then renames it over the target.
pub async fn save_json<T: Serialize>(path: &Path, data: &T) -> Result<(), StoreError> {
    debug!(path = %path.display(), "Saving JSON file");

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            tokio::fs::create_dir_all(parent).await?;
        }
    }

    let json = serde_json::to_string_pretty(data)?;

    let temp_path = path.with_extension("json.tmp");
    tokio::fs::write(&temp_path, &json).await?;
    tokio::fs::rename(&temp_path, path).await?;

    debug!(path = %path.display(), "JSON file saved");
    Ok(())
}

/// Loads data from a JSON file.
pub async fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, StoreError> {
    let content = tokio::fs::read_to_string(path).await?;
    let data = serde_json::from_str(&content)?;
    Ok(data)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");

        let data = vec!["a".to_string(), "b".to_string()];
        save_json(&path, &data).await.unwrap();

        let loaded: Vec<String> = load_json(&path).await.unwrap();
        assert_eq!(loaded, data);
    }

    #[tokio::test]
    async fn test_save_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deep").join("data.json");

        save_json(&path, &42u32).await.unwrap();
        assert!(path.exists());
    }

    #[tokio::test]
    async fn test_no_temp_file_left_behind() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");

        save_json(&path, &1u32).await.unwrap();
        assert!(!dir.path().join("data.json.tmp").exists());
    }
}
