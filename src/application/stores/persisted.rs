//! Persistence envelope shared by the stores.
//!
//! Each partition holds `{"state": {...}, "version": 0}`. Only the fields a
//! store chooses to persist appear under `state`.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::ports::{StateStorage, StateStorageError};

/// Version written into every envelope.
pub const STATE_VERSION: u32 = 0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub state: T,
    pub version: u32,
}

impl<T> Envelope<T> {
    pub fn new(state: T) -> Self {
        Self {
            state,
            version: STATE_VERSION,
        }
    }
}

/// Loads a partition, falling back to defaults when it is missing,
/// unreadable, corrupt or written by another version.
pub async fn load_or_default<T>(storage: &dyn StateStorage, partition: &str) -> T
where
    T: DeserializeOwned + Default,
{
    let document = match storage.load(partition).await {
        Ok(Some(document)) => document,
        Ok(None) => {
            tracing::debug!(partition, "no persisted state, starting fresh");
            return T::default();
        }
        Err(e) => {
            tracing::warn!(partition, error = %e, "failed to read persisted state, starting fresh");
            return T::default();
        }
    };

    match serde_json::from_str::<Envelope<T>>(&document) {
        Ok(envelope) if envelope.version == STATE_VERSION => envelope.state,
        Ok(envelope) => {
            tracing::warn!(
                partition,
                version = envelope.version,
                "persisted state has unsupported version, starting fresh"
            );
            T::default()
        }
        Err(e) => {
            tracing::warn!(partition, error = %e, "persisted state is corrupt, starting fresh");
            T::default()
        }
    }
}

/// Writes `state` into its envelope.
pub async fn save<T: Serialize>(
    storage: &dyn StateStorage,
    partition: &str,
    state: &T,
) -> Result<(), StateStorageError> {
    let document = serde_json::to_string(&Envelope::new(state))
        .map_err(|e| StateStorageError::SerializationFailed(e.to_string()))?;
    storage.save(partition, &document).await
}
