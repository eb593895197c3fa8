//! State Storage Port - Interface for persisting store state.
//!
//! Each store owns one named partition holding a single JSON document.
//! The port only moves raw documents; encoding belongs to the stores.

use async_trait::async_trait;

/// Partition holding the authentication store.
pub const AUTH_PARTITION: &str = "auth-storage";

/// Partition holding the survey store.
pub const SURVEY_PARTITION: &str = "survey-storage";

/// Errors that can occur during state storage operations
#[derive(Debug, thiserror::Error)]
pub enum StateStorageError {
    #[error("Invalid partition name: {0}")]
    InvalidPartition(String),

    #[error("Failed to serialize state: {0}")]
    SerializationFailed(String),

    #[error("Failed to deserialize state: {0}")]
    DeserializationFailed(String),

    #[error("IO error: {0}")]
    IoError(String),
}

/// Port for persisting and loading store state
#[async_trait]
pub trait StateStorage: Send + Sync {
    /// Load the document stored under `partition`
    ///
    /// # Returns
    /// `None` when nothing has been saved yet
    async fn load(&self, partition: &str) -> Result<Option<String>, StateStorageError>;

    /// Replace the document stored under `partition`
    async fn save(&self, partition: &str, document: &str) -> Result<(), StateStorageError>;
}

/// Partition names become file names, so only `[A-Za-z0-9_-]` is allowed.
pub fn validate_partition(partition: &str) -> Result<(), StateStorageError> {
    let valid = !partition.is_empty()
        && partition
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(())
    } else {
        Err(StateStorageError::InvalidPartition(partition.to_string()))
    }
}
