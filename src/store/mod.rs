//! Entity stores over a [`StorageBackend`] slot.
//!
//! Every mutation is a whole-collection read-modify-write with no lock or
//! queue around it; the intended caller is a single interactive session with
//! debounced saves, and overlapping mutations against the same slot can lose
//! updates. Backends only synchronize their own internals.

mod logs;
mod medications;

pub use logs::{LogStore, LOGS_SLOT};
pub use medications::{MedicationStore, MEDICATIONS_SLOT};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::StoreResult;
use crate::storage::StorageBackend;

/// Deserialize the collection stored under `slot`.
///
/// An absent slot reads as empty. So does a corrupt payload: a parse failure
/// is logged and swallowed rather than surfaced, so a damaged store never
/// takes the app down on read. I/O errors still propagate.
pub(crate) async fn read_collection<T, B>(backend: &B, slot: &str) -> StoreResult<Vec<T>>
where
    T: DeserializeOwned,
    B: StorageBackend,
{
    let Some(raw) = backend.read(slot).await? else {
        return Ok(Vec::new());
    };

    match serde_json::from_str(&raw) {
        Ok(records) => Ok(records),
        Err(e) => {
            tracing::warn!(slot, error = %e, "Corrupt slot payload, treating as empty");
            Ok(Vec::new())
        }
    }
}

/// Serialize `records` and replace the entire collection under `slot`.
pub(crate) async fn write_collection<T, B>(backend: &B, slot: &str, records: &[T]) -> StoreResult<()>
where
    T: Serialize,
    B: StorageBackend,
{
    let payload = serde_json::to_string(records)?;
    backend.write(slot, &payload).await
}

/// Next id: `1 + max(existing ids, 0)`. Ids are never reused while their
/// record lives, and stay strictly increasing as long as the largest id is
/// never deleted.
pub(crate) fn next_id(ids: impl Iterator<Item = i64>) -> i64 {
    ids.max().unwrap_or(0).max(0) + 1
}
