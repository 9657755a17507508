//! End-to-end persistence through the public API with the file backend.

use seizelog_store::store::LOGS_SLOT;
use seizelog_store::{
    DosageUnit, FileBackend, LogStore, MedicationName, MedicationStore, MedicationTiming,
    NewMedication, UpsertLogRequest,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "seizelog_store=debug".into()),
        )
        .with_test_writer()
        .try_init();
}

#[tokio::test]
async fn logs_survive_reopening_the_backend() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();

    {
        let store = LogStore::new(FileBackend::new(dir.path()));
        let patch = UpsertLogRequest {
            headache_level: Some(2),
            memo: Some("dizzy in the afternoon".into()),
            ..Default::default()
        };
        store
            .upsert_by_date("2025-04-01".parse().unwrap(), patch)
            .await
            .unwrap();
    }

    // Fresh handle on the same directory, as after an app restart.
    let store = LogStore::new(FileBackend::new(dir.path()));
    let logs = store.load_all().await.unwrap();
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].headache_level, 2);
    assert_eq!(logs[0].memo.as_deref(), Some("dizzy in the afternoon"));
}

#[tokio::test]
async fn corrupt_slot_file_reads_as_empty_and_is_recoverable() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();

    std::fs::write(dir.path().join(format!("{LOGS_SLOT}.json")), "][ not json").unwrap();

    let store = LogStore::new(FileBackend::new(dir.path()));
    assert!(store.load_all().await.unwrap().is_empty());

    // The next write starts the collection over.
    store
        .upsert_by_date("2025-04-02".parse().unwrap(), UpsertLogRequest::default())
        .await
        .unwrap();
    let logs = store.load_all().await.unwrap();
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].id, 1);
}

#[tokio::test]
async fn log_and_medication_slots_are_independent() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();
    let backend = FileBackend::new(dir.path());

    let logs = LogStore::new(backend.clone());
    let medications = MedicationStore::new(backend);

    logs.upsert_by_date("2025-04-01".parse().unwrap(), UpsertLogRequest::default())
        .await
        .unwrap();
    medications
        .add(NewMedication {
            medication_name: MedicationName::Temozolomide,
            dosage_value: 140.0,
            dosage_unit: DosageUnit::Mg,
            timing: MedicationTiming::Bedtime,
            start_at: "2025-03-20".into(),
            end_at: Some("2025-04-20".into()),
        })
        .await
        .unwrap();

    assert_eq!(logs.load_all().await.unwrap().len(), 1);
    assert_eq!(medications.load_all().await.unwrap().len(), 1);
}
