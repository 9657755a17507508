use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::StoreResult;

use super::StorageBackend;

/// In-process backend for tests and ephemeral sessions. The lock guards the
/// slot map only, not logical store operations.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    slots: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StorageBackend for MemoryBackend {
    async fn read(&self, slot: &str) -> StoreResult<Option<String>> {
        Ok(self.slots.read().await.get(slot).cloned())
    }

    async fn write(&self, slot: &str, payload: &str) -> StoreResult<()> {
        self.slots
            .write()
            .await
            .insert(slot.to_string(), payload.to_string());
        Ok(())
    }
}
