//! Persistence core for a personal symptom-tracking app: daily log and
//! medication records, each collection serialized as a single JSON array
//! under one named storage slot.
//!
//! Stores are generic over an injected [`storage::StorageBackend`]; use
//! [`storage::MemoryBackend`] in tests and [`storage::FileBackend`] on
//! device.
//!
//! ```no_run
//! use seizelog_store::{Config, FileBackend, LogStore, UpsertLogRequest};
//!
//! # async fn demo() -> seizelog_store::StoreResult<()> {
//! let backend = FileBackend::from_config(&Config::from_env());
//! let logs = LogStore::new(backend);
//!
//! let today = chrono::Utc::now().date_naive();
//! let patch = UpsertLogRequest {
//!     headache_level: Some(3),
//!     ..Default::default()
//! };
//! let saved = logs.upsert_by_date(today, patch).await?;
//! assert_eq!(saved.headache_level, 3);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod models;
pub mod storage;
pub mod store;

pub use config::Config;
pub use error::{StoreError, StoreResult};
pub use models::{
    DosageUnit, LogRecord, MedicationName, MedicationRecord, MedicationTiming, NewLogRecord,
    NewMedication, UpdateMedicationRequest, UpsertLogRequest,
};
pub use storage::{FileBackend, MemoryBackend, StorageBackend};
pub use store::{LogStore, MedicationStore};
