//! File-based State Storage Adapter
//!
//! Stores each partition as `{base_path}/{partition}.json`. Every write goes
//! to its own temporary file and is renamed into place, so concurrent writers
//! never share a half-written file.

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use uuid::Uuid;

use crate::ports::{validate_partition, StateStorage, StateStorageError};

/// File-based storage for store state
#[derive(Debug, Clone)]
pub struct FileStateStorage {
    base_path: PathBuf,
}

impl FileStateStorage {
    /// Create a new file storage with a base directory
    ///
    /// # Example
    /// ```ignore
    /// let storage = FileStateStorage::new("./data");
    /// ```
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Get the file path for a partition
    fn partition_path(&self, partition: &str) -> Result<PathBuf, StateStorageError> {
        validate_partition(partition)?;
        Ok(self.base_path.join(format!("{}.json", partition)))
    }

    /// Ensure the base directory exists
    async fn ensure_dir(&self) -> Result<(), StateStorageError> {
        fs::create_dir_all(&self.base_path)
            .await
            .map_err(|e| StateStorageError::IoError(format!("Failed to create directory: {}", e)))
    }
}

#[async_trait]
impl StateStorage for FileStateStorage {
    async fn load(&self, partition: &str) -> Result<Option<String>, StateStorageError> {
        let file_path = self.partition_path(partition)?;

        match fs::read_to_string(&file_path).await {
            Ok(document) => Ok(Some(document)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StateStorageError::IoError(format!(
                "Failed to read {}: {}",
                file_path.display(),
                e
            ))),
        }
    }

    async fn save(&self, partition: &str, document: &str) -> Result<(), StateStorageError> {
        let file_path = self.partition_path(partition)?;
        self.ensure_dir().await?;

        let temp_path = self
            .base_path
            .join(format!("{}.{}.tmp", partition, Uuid::new_v4().simple()));
        fs::write(&temp_path, document).await.map_err(|e| {
            StateStorageError::IoError(format!("Failed to write temporary file: {}", e))
        })?;

        // Rename to final location (atomic operation on Unix)
        if let Err(e) = fs::rename(&temp_path, &file_path).await {
            let _ = fs::remove_file(&temp_path).await;
            return Err(StateStorageError::IoError(format!(
                "Failed to rename file: {}",
                e
            )));
        }

        Ok(())
    }
}
