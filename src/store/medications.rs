use chrono::Utc;

use crate::error::{StoreError, StoreResult};
use crate::models::medication::{MedicationRecord, NewMedication, UpdateMedicationRequest};
use crate::storage::StorageBackend;

use super::{next_id, read_collection, write_collection};

/// Canonical slot for the medication collection.
pub const MEDICATIONS_SLOT: &str = "seizelog.medications.v1";

/// Store for the user's medication list, keyed by id.
#[derive(Debug, Clone)]
pub struct MedicationStore<B> {
    backend: B,
}

impl<B: StorageBackend> MedicationStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// All medications, most recently updated first.
    pub async fn load_all(&self) -> StoreResult<Vec<MedicationRecord>> {
        let mut items: Vec<MedicationRecord> =
            read_collection(&self.backend, MEDICATIONS_SLOT).await?;
        items.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(items)
    }

    pub async fn get_by_id(&self, id: i64) -> StoreResult<Option<MedicationRecord>> {
        let items: Vec<MedicationRecord> =
            read_collection(&self.backend, MEDICATIONS_SLOT).await?;
        Ok(items.into_iter().find(|m| m.id == id))
    }

    pub async fn add(&self, new: NewMedication) -> StoreResult<MedicationRecord> {
        let mut items: Vec<MedicationRecord> =
            read_collection(&self.backend, MEDICATIONS_SLOT).await?;
        let now = Utc::now();

        let record = MedicationRecord {
            id: next_id(items.iter().map(|m| m.id)),
            medication_name: new.medication_name,
            dosage_value: new.dosage_value,
            dosage_unit: new.dosage_unit,
            timing: new.timing,
            start_at: new.start_at,
            end_at: new.end_at,
            created_at: now,
            updated_at: now,
        };
        items.push(record.clone());

        write_collection(&self.backend, MEDICATIONS_SLOT, &items).await?;
        tracing::debug!(id = record.id, "Added medication");
        Ok(record)
    }

    /// Merge `patch` into the medication with the given id, refreshing
    /// `updated_at`. Errors with `NotFound` if the id is absent.
    pub async fn update(
        &self,
        id: i64,
        patch: UpdateMedicationRequest,
    ) -> StoreResult<MedicationRecord> {
        let mut items: Vec<MedicationRecord> =
            read_collection(&self.backend, MEDICATIONS_SLOT).await?;

        let Some(current) = items.iter_mut().find(|m| m.id == id) else {
            return Err(StoreError::NotFound(format!("medication {id}")));
        };

        patch.merge_into(current, Utc::now());
        let updated = current.clone();

        write_collection(&self.backend, MEDICATIONS_SLOT, &items).await?;
        tracing::debug!(id, "Updated medication");
        Ok(updated)
    }

    /// Remove the medication with the given id; no-op if it does not exist.
    pub async fn delete(&self, id: i64) -> StoreResult<()> {
        let mut items: Vec<MedicationRecord> =
            read_collection(&self.backend, MEDICATIONS_SLOT).await?;
        items.retain(|m| m.id != id);

        write_collection(&self.backend, MEDICATIONS_SLOT, &items).await?;
        tracing::debug!(id, "Deleted medication");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use crate::models::medication::{DosageUnit, MedicationName, MedicationTiming};
    use crate::storage::MemoryBackend;

    use super::*;

    fn store() -> MedicationStore<MemoryBackend> {
        MedicationStore::new(MemoryBackend::new())
    }

    fn levetiracetam() -> NewMedication {
        NewMedication {
            medication_name: MedicationName::Levetiracetam,
            dosage_value: 500.0,
            dosage_unit: DosageUnit::Mg,
            timing: MedicationTiming::AfterBreakfast,
            start_at: "2025-01-15".into(),
            end_at: None,
        }
    }

    #[tokio::test]
    async fn test_add_assigns_ids_and_timestamps() {
        let store = store();

        let a = store.add(levetiracetam()).await.unwrap();
        let b = store.add(levetiracetam()).await.unwrap();

        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
        assert_eq!(a.created_at, a.updated_at);
        assert_eq!(a.end_at, None);
    }

    #[tokio::test]
    async fn test_update_merges_and_refreshes_updated_at() {
        let store = store();
        let created = store.add(levetiracetam()).await.unwrap();

        tokio::time::sleep(Duration::from_millis(5)).await;

        let patch = UpdateMedicationRequest {
            dosage_value: Some(750.0),
            end_at: Some("2025-06-01".into()),
            ..Default::default()
        };
        let updated = store.update(created.id, patch).await.unwrap();

        assert_eq!(updated.dosage_value, 750.0);
        assert_eq!(updated.end_at.as_deref(), Some("2025-06-01"));
        assert_eq!(updated.medication_name, created.medication_name);
        assert_eq!(updated.timing, created.timing);
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at > created.updated_at);
    }

    #[tokio::test]
    async fn test_update_missing_id_is_not_found() {
        let err = store()
            .update(42, UpdateMedicationRequest::default())
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_delete_removes_only_the_given_id() {
        let store = store();
        let a = store.add(levetiracetam()).await.unwrap();
        let b = store.add(levetiracetam()).await.unwrap();

        store.delete(a.id).await.unwrap();

        assert!(store.get_by_id(a.id).await.unwrap().is_none());
        assert!(store.get_by_id(b.id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_delete_missing_id_is_noop() {
        let store = store();
        store.add(levetiracetam()).await.unwrap();

        store.delete(999).await.unwrap();
        assert_eq!(store.load_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_load_all_sorts_by_most_recently_updated() {
        let store = store();
        let a = store.add(levetiracetam()).await.unwrap();
        tokio::time::sleep(Duration::from_millis(5)).await;
        let b = store.add(levetiracetam()).await.unwrap();
        tokio::time::sleep(Duration::from_millis(5)).await;

        // Touching the older record moves it to the front.
        store
            .update(a.id, UpdateMedicationRequest::default())
            .await
            .unwrap();

        let ids: Vec<i64> = store
            .load_all()
            .await
            .unwrap()
            .into_iter()
            .map(|m| m.id)
            .collect();
        assert_eq!(ids, vec![a.id, b.id]);
    }

    #[tokio::test]
    async fn test_enum_wire_values() {
        let store = store();
        store
            .add(NewMedication {
                medication_name: MedicationName::Perampanel,
                dosage_value: 2.0,
                dosage_unit: DosageUnit::Ml,
                timing: MedicationTiming::Bedtime,
                start_at: "2025-01-01T08:00:00Z".into(),
                end_at: None,
            })
            .await
            .unwrap();

        let raw = store.backend.read(MEDICATIONS_SLOT).await.unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        let record = &value.as_array().unwrap()[0];

        assert_eq!(record["medicationName"], "perampanel");
        assert_eq!(record["dosageUnit"], "mL");
        assert_eq!(record["timing"], "bedtime");
        assert_eq!(record["startAt"], "2025-01-01T08:00:00Z");
        assert!(record["endAt"].is_null());
    }
}
