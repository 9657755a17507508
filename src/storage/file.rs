use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;

use crate::config::Config;
use crate::error::StoreResult;

use super::StorageBackend;

/// On-device backend: one `<slot>.json` file per slot under a data directory.
#[derive(Debug, Clone)]
pub struct FileBackend {
    data_dir: PathBuf,
}

impl FileBackend {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.data_dir.clone())
    }

    fn slot_path(&self, slot: &str) -> PathBuf {
        self.data_dir.join(format!("{slot}.json"))
    }
}

#[async_trait]
impl StorageBackend for FileBackend {
    async fn read(&self, slot: &str) -> StoreResult<Option<String>> {
        match fs::read_to_string(self.slot_path(slot)).await {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn write(&self, slot: &str, payload: &str) -> StoreResult<()> {
        fs::create_dir_all(&self.data_dir).await?;
        fs::write(self.slot_path(slot), payload).await?;
        tracing::debug!(slot, bytes = payload.len(), "Wrote storage slot");
        Ok(())
    }
}
