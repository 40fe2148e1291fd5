//! File-backed key-value store
//!
//! Each key maps to one file in a base directory. Writes go to a sibling
//! temp file first and are renamed over the target, so a stored value is
//! never observable half-written.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use crate::error::{TallyError, TallyResult};

use super::KeyValueStore;

/// Key-value store backed by one file per key
#[derive(Debug, Clone)]
pub struct FileStore {
    base_dir: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `base_dir`. The directory is created on
    /// first write.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.base_dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> TallyResult<Option<String>> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }

        fs::read_to_string(&path).map(Some).map_err(|e| {
            TallyError::Storage(format!("Failed to read {}: {}", path.display(), e))
        })
    }

    fn set(&self, key: &str, value: &str) -> TallyResult<()> {
        fs::create_dir_all(&self.base_dir).map_err(|e| {
            TallyError::Storage(format!(
                "Failed to create directory {}: {}",
                self.base_dir.display(),
                e
            ))
        })?;

        let path = self.key_path(key);
        let temp_path = path.with_extension("json.tmp");

        let file = File::create(&temp_path)
            .map_err(|e| TallyError::Storage(format!("Failed to create temp file: {}", e)))?;

        let mut writer = BufWriter::new(file);
        writer
            .write_all(value.as_bytes())
            .map_err(|e| TallyError::Storage(format!("Failed to write data: {}", e)))?;
        writer
            .flush()
            .map_err(|e| TallyError::Storage(format!("Failed to flush data: {}", e)))?;

        // Sync to disk before rename
        writer
            .get_ref()
            .sync_all()
            .map_err(|e| TallyError::Storage(format!("Failed to sync data: {}", e)))?;

        fs::rename(&temp_path, &path).map_err(|e| {
            // Try to clean up temp file if rename fails
            let _ = fs::remove_file(&temp_path);
            TallyError::Storage(format!("Failed to rename temp file: {}", e))
        })?;

        Ok(())
    }
}
