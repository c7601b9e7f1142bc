//! Usage ledger behaviour tests
//!
//! Exercises the ledger through its public API against both the in-memory
//! and the file-backed store.

use async_trait::async_trait;
use krishimitra::error::{LedgerError, StoreError};
use krishimitra::ledger::{
    FileStore, KeyValueStore, LedgerSnapshot, MemoryStore, PredictedCrop, UsageLedger,
};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use tempfile::TempDir;

/// Memory store whose `set` calls start failing at a given call number
struct FailingSetStore {
    inner: MemoryStore,
    sets: AtomicUsize,
    fail_on: usize,
    keep_failing: bool,
}

impl FailingSetStore {
    /// Fail only the `fail_on`-th `set` (1-based)
    fn failing_once(entries: HashMap<String, String>, fail_on: usize) -> Self {
        Self {
            inner: MemoryStore::with_entries(entries),
            sets: AtomicUsize::new(0),
            fail_on,
            keep_failing: false,
        }
    }

    /// Fail the `fail_on`-th `set` and every later `set` or `remove`
    fn failing_from(entries: HashMap<String, String>, fail_on: usize) -> Self {
        Self {
            keep_failing: true,
            ..Self::failing_once(entries, fail_on)
        }
    }

    fn is_failing(&self, call: usize) -> bool {
        call == self.fail_on || (self.keep_failing && call > self.fail_on)
    }
}

#[async_trait]
impl KeyValueStore for FailingSetStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.inner.get(key).await
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let call = self.sets.fetch_add(1, Ordering::SeqCst) + 1;
        if self.is_failing(call) {
            return Err(StoreError::Unavailable(format!("set #{call} rejected")));
        }
        self.inner.set(key, value).await
    }

    async fn remove(&self, key: &str) -> Result<(), StoreError> {
        if self.keep_failing && self.sets.load(Ordering::SeqCst) >= self.fail_on {
            return Err(StoreError::Unavailable("remove rejected".to_string()));
        }
        self.inner.remove(key).await
    }
}

fn entries(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}

fn batch(entries: &[(&str, f64)]) -> Vec<PredictedCrop> {
    entries
        .iter()
        .map(|(name, confidence)| PredictedCrop::new(*name, *confidence))
        .collect()
}

fn seeded(snapshot: &LedgerSnapshot) -> UsageLedger<MemoryStore> {
    UsageLedger::new(MemoryStore::with_entries([
        ("totalCrops", snapshot.total_crops.to_string()),
        ("totalDiseases", snapshot.total_diseases.to_string()),
        ("favoriteCropName", snapshot.favorite_crop_name.clone()),
        ("favoriteCropCount", snapshot.favorite_crop_count.to_string()),
    ]))
}

#[tokio::test]
async fn test_total_crops_is_sum_of_batch_lengths() {
    let ledger = UsageLedger::new(MemoryStore::new());
    let batches = [
        batch(&[("rice", 90.0), ("maize", 5.0), ("jute", 2.0)]),
        batch(&[]),
        batch(&[("coffee", 70.0)]),
        batch(&[("banana", 60.0), ("mango", 30.0)]),
    ];

    for predictions in &batches {
        ledger.record_crop_predictions(predictions).await.unwrap();
    }

    let snapshot = ledger.read_snapshot().await.unwrap();
    let expected: usize = batches.iter().map(Vec::len).sum();
    assert_eq!(snapshot.total_crops, expected as u64);
}

#[tokio::test]
async fn test_disease_detection_increments_both_totals() {
    let ledger = UsageLedger::new(MemoryStore::new());

    for _ in 0..3 {
        ledger.record_disease_detection("Apple_Black_rot").await.unwrap();
    }

    let snapshot = ledger.read_snapshot().await.unwrap();
    assert_eq!(snapshot.total_diseases, 3);
    assert_eq!(snapshot.total_crops, 3);
}

#[tokio::test]
async fn test_empty_batch_leaves_entries_unchanged() {
    let before = LedgerSnapshot {
        total_crops: 8,
        total_diseases: 2,
        favorite_crop_name: "Wheat".to_string(),
        favorite_crop_count: 3,
    };
    let ledger = seeded(&before);
    let entries_before = ledger.store().entries();

    ledger.record_crop_predictions(&[]).await.unwrap();

    assert_eq!(ledger.store().entries(), entries_before);
    assert_eq!(ledger.read_snapshot().await.unwrap(), before);
}

#[tokio::test]
async fn test_favorite_adopted_from_zero_count() {
    let ledger = seeded(&LedgerSnapshot::default());

    ledger
        .record_crop_predictions(&batch(&[("Wheat", 90.0)]))
        .await
        .unwrap();

    let snapshot = ledger.read_snapshot().await.unwrap();
    assert_eq!(snapshot.favorite_crop_name, "Wheat");
    assert_eq!(snapshot.favorite_crop_count, 1);
}

#[tokio::test]
async fn test_favorite_retained_and_incremented() {
    let ledger = seeded(&LedgerSnapshot {
        favorite_crop_name: "Wheat".to_string(),
        favorite_crop_count: 1,
        ..LedgerSnapshot::default()
    });

    ledger
        .record_crop_predictions(&batch(&[("Wheat", 80.0)]))
        .await
        .unwrap();

    let snapshot = ledger.read_snapshot().await.unwrap();
    assert_eq!(snapshot.favorite_crop_name, "Wheat");
    assert_eq!(snapshot.favorite_crop_count, 2);
}

#[tokio::test]
async fn test_favorite_not_displaced_by_dominant_crop() {
    let ledger = seeded(&LedgerSnapshot {
        favorite_crop_name: "Wheat".to_string(),
        favorite_crop_count: 1,
        ..LedgerSnapshot::default()
    });

    for _ in 0..4 {
        ledger
            .record_crop_predictions(&batch(&[("maize", 99.0), ("maize", 98.0)]))
            .await
            .unwrap();
    }

    let snapshot = ledger.read_snapshot().await.unwrap();
    assert_eq!(snapshot.favorite_crop_name, "Wheat");
    assert_eq!(snapshot.favorite_crop_count, 1);
    assert_eq!(snapshot.total_crops, 8);
}

#[tokio::test]
async fn test_empty_store_reads_defaults() {
    let ledger = UsageLedger::new(MemoryStore::new());
    let snapshot = ledger.read_snapshot().await.unwrap();

    assert_eq!(snapshot.total_crops, 0);
    assert_eq!(snapshot.total_diseases, 0);
    assert_eq!(snapshot.favorite_crop_name, "Rice");
    assert_eq!(snapshot.favorite_crop_count, 0);
}

#[tokio::test]
async fn test_malformed_total_reads_as_zero() {
    let ledger = UsageLedger::new(MemoryStore::with_entries([("totalCrops", "twelve")]));
    assert_eq!(ledger.read_snapshot().await.unwrap().total_crops, 0);

    // The next update starts counting from zero again
    ledger
        .record_crop_predictions(&batch(&[("rice", 50.0)]))
        .await
        .unwrap();
    assert_eq!(ledger.read_snapshot().await.unwrap().total_crops, 1);
}

#[tokio::test]
async fn test_end_to_end_rice_and_maize() {
    let ledger = UsageLedger::new(MemoryStore::new());

    ledger
        .record_crop_predictions(&batch(&[("Rice", 95.0), ("Maize", 80.0)]))
        .await
        .unwrap();

    let snapshot = ledger.read_snapshot().await.unwrap();
    assert_eq!(snapshot.total_crops, 2);
    assert_eq!(snapshot.favorite_crop_name, "Rice");
    assert_eq!(snapshot.favorite_crop_count, 1);
}

#[tokio::test]
async fn test_file_ledger_survives_restart() {
    let temp_dir = TempDir::new().unwrap();

    {
        let ledger = UsageLedger::new(FileStore::in_dir(temp_dir.path()));
        ledger
            .record_crop_predictions(&batch(&[("cotton", 70.0), ("jute", 20.0)]))
            .await
            .unwrap();
        ledger
            .record_disease_detection("Corn(maize)Common_rust")
            .await
            .unwrap();
    }

    let store = FileStore::in_dir(temp_dir.path());
    assert_eq!(store.get("totalCrops").await.unwrap().as_deref(), Some("3"));
    assert_eq!(store.get("totalDiseases").await.unwrap().as_deref(), Some("1"));

    let ledger = UsageLedger::new(store);
    let snapshot = ledger.read_snapshot().await.unwrap();
    assert_eq!(snapshot.favorite_crop_name, "cotton");
    assert_eq!(snapshot.favorite_crop_count, 1);
}

#[tokio::test]
async fn test_failed_crop_write_rolls_back_earlier_writes() {
    let seed = entries(&[
        ("totalCrops", "5"),
        ("favoriteCropName", "Wheat"),
        ("favoriteCropCount", "0"),
    ]);
    // totalCrops is written first, favoriteCropName second
    let ledger = UsageLedger::new(FailingSetStore::failing_once(seed.clone(), 2));

    let err = ledger
        .record_crop_predictions(&batch(&[("Maize", 88.0)]))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        LedgerError::StorageUnavailable {
            key: "favoriteCropName",
            ..
        }
    ));
    assert_eq!(ledger.store().inner.entries(), seed);
}

#[tokio::test]
async fn test_failed_crop_write_removes_previously_absent_entries() {
    let ledger = UsageLedger::new(FailingSetStore::failing_once(HashMap::new(), 3));

    assert!(ledger
        .record_crop_predictions(&batch(&[("rice", 90.0), ("jute", 4.0)]))
        .await
        .is_err());

    assert!(ledger.store().inner.entries().is_empty());
    assert_eq!(
        ledger.read_snapshot().await.unwrap(),
        LedgerSnapshot::default()
    );
}

#[tokio::test]
async fn test_failed_disease_write_rolls_back_total_diseases() {
    let seed = entries(&[("totalCrops", "5"), ("totalDiseases", "2")]);
    // totalDiseases is written first, totalCrops second
    let ledger = UsageLedger::new(FailingSetStore::failing_once(seed.clone(), 2));

    let err = ledger
        .record_disease_detection("Tomato_Bacterial_spot")
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        LedgerError::StorageUnavailable {
            key: "totalCrops",
            ..
        }
    ));
    assert_eq!(ledger.store().inner.entries(), seed);

    // The store recovered, so the next detection applies in full
    ledger
        .record_disease_detection("Tomato_Bacterial_spot")
        .await
        .unwrap();
    let snapshot = ledger.read_snapshot().await.unwrap();
    assert_eq!(snapshot.total_crops, 6);
    assert_eq!(snapshot.total_diseases, 3);
}

#[tokio::test]
async fn test_failed_rollback_still_reports_original_error() {
    let seed = entries(&[("totalCrops", "5"), ("totalDiseases", "2")]);
    let ledger = UsageLedger::new(FailingSetStore::failing_from(seed, 2));

    let err = ledger
        .record_disease_detection("Potato_Early_blight")
        .await
        .unwrap_err();

    // The restore of totalDiseases is rejected too; the first write stays
    assert!(matches!(
        err,
        LedgerError::StorageUnavailable {
            key: "totalCrops",
            ..
        }
    ));
    let snapshot = ledger.read_snapshot().await.unwrap();
    assert_eq!(snapshot.total_diseases, 3);
    assert_eq!(snapshot.total_crops, 5);
}
