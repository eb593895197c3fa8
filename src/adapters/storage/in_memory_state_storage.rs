//! In-Memory State Storage Adapter
//!
//! Keeps partitions in a map. Useful for testing and development.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::ports::{validate_partition, StateStorage, StateStorageError};

/// In-memory storage for store state
///
/// Clones share the same map, so a test can hand one clone to a store and
/// inspect or pre-seed partitions through another.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStateStorage {
    documents: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemoryStateStorage {
    /// Create a new in-memory storage
    pub fn new() -> Self {
        Self::default()
    }

    /// Create storage pre-seeded with one partition
    pub fn with_document(partition: &str, document: impl Into<String>) -> Self {
        let mut documents = HashMap::new();
        documents.insert(partition.to_string(), document.into());
        Self {
            documents: Arc::new(RwLock::new(documents)),
        }
    }

    /// Get the number of stored partitions
    pub async fn partition_count(&self) -> usize {
        self.documents.read().await.len()
    }
}

#[async_trait]
impl StateStorage for InMemoryStateStorage {
    async fn load(&self, partition: &str) -> Result<Option<String>, StateStorageError> {
        validate_partition(partition)?;
        Ok(self.documents.read().await.get(partition).cloned())
    }

    async fn save(&self, partition: &str, document: &str) -> Result<(), StateStorageError> {
        validate_partition(partition)?;
        self.documents
            .write()
            .await
            .insert(partition.to_string(), document.to_string());
        Ok(())
    }
}
