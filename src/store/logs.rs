use chrono::{NaiveDate, Utc};

use crate::error::{StoreError, StoreResult};
use crate::models::log::{LogRecord, NewLogRecord, UpsertLogRequest};
use crate::storage::StorageBackend;

use super::{next_id, read_collection, write_collection};

/// Canonical slot for the log collection. Renaming it would orphan existing
/// data, so don't, short of an explicit migration step.
pub const LOGS_SLOT: &str = "seizelog.logs.v1";

/// Store for daily symptom logs.
///
/// `upsert_by_date` keeps the one-record-per-date invariant; `append` is the
/// id-keyed variant without it. There is no deletion path for logs.
#[derive(Debug, Clone)]
pub struct LogStore<B> {
    backend: B,
}

impl<B: StorageBackend> LogStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// All logs, newest date first.
    pub async fn load_all(&self) -> StoreResult<Vec<LogRecord>> {
        let mut logs: Vec<LogRecord> = read_collection(&self.backend, LOGS_SLOT).await?;
        logs.sort_by(|a, b| b.recorded_date.cmp(&a.recorded_date));
        Ok(logs)
    }

    /// First record for the given date, if any.
    pub async fn get_by_date(&self, recorded_date: NaiveDate) -> StoreResult<Option<LogRecord>> {
        let logs: Vec<LogRecord> = read_collection(&self.backend, LOGS_SLOT).await?;
        Ok(logs.into_iter().find(|l| l.recorded_date == recorded_date))
    }

    /// Merge `patch` into the record for `recorded_date`, creating it with
    /// defaults backfilled if this is the first save for that date.
    ///
    /// On update only the provided fields are overwritten and `updated_at`
    /// is refreshed; `created_at` never changes after creation.
    pub async fn upsert_by_date(
        &self,
        recorded_date: NaiveDate,
        patch: UpsertLogRequest,
    ) -> StoreResult<LogRecord> {
        patch.validate().map_err(StoreError::Validation)?;

        let mut logs: Vec<LogRecord> = read_collection(&self.backend, LOGS_SLOT).await?;
        let now = Utc::now();

        let record = match logs.iter_mut().find(|l| l.recorded_date == recorded_date) {
            Some(current) => {
                patch.merge_into(current, now);
                current.clone()
            }
            None => {
                let id = next_id(logs.iter().map(|l| l.id));
                let created = patch.into_record(id, recorded_date, now);
                logs.push(created.clone());
                created
            }
        };

        write_collection(&self.backend, LOGS_SLOT, &logs).await?;
        tracing::debug!(date = %recorded_date, id = record.id, "Upserted log");
        Ok(record)
    }

    /// Add a new log without the date-uniqueness constraint: assigns the next
    /// id, stamps both timestamps, backfills defaults, prepends.
    pub async fn append(&self, new: NewLogRecord) -> StoreResult<LogRecord> {
        new.fields.validate().map_err(StoreError::Validation)?;

        let mut logs: Vec<LogRecord> = read_collection(&self.backend, LOGS_SLOT).await?;
        let now = Utc::now();

        let id = next_id(logs.iter().map(|l| l.id));
        let record = new.fields.into_record(id, new.recorded_date, now);
        logs.insert(0, record.clone());

        write_collection(&self.backend, LOGS_SLOT, &logs).await?;
        tracing::debug!(date = %record.recorded_date, id = record.id, "Appended log");
        Ok(record)
    }
}
