//! Flat key-value persistence: one serialized blob per named slot.
//!
//! The backend is injected into the stores so tests run against the in-memory
//! implementation and production uses the file-backed one.

mod file;
mod memory;

pub use file::FileBackend;
pub use memory::MemoryBackend;

use async_trait::async_trait;

use crate::error::StoreResult;

/// A named location holding an entire entity collection as one blob.
///
/// Implementations are cheap-clone handles; cloning a backend yields another
/// handle onto the same underlying slots.
#[async_trait]
pub trait StorageBackend: Send + Sync {
    /// Raw payload stored under `slot`, or `None` if the slot was never
    /// written.
    async fn read(&self, slot: &str) -> StoreResult<Option<String>>;

    /// Replace the entire payload under `slot`.
    async fn write(&self, slot: &str, payload: &str) -> StoreResult<()>;
}
