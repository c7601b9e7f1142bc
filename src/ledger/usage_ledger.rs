//! # Usage Ledger
//!
//! Applies prediction events to the persisted counters and reads them back
//! for the profile summary.
//!
//! Every operation is a read-modify-write over independent store keys, so
//! all of them take the same async mutex for their full duration. Two
//! overlapping operations on clones of one [`UsageLedger`] therefore never
//! lose an update. Writers that bypass the ledger and touch the same keys
//! directly are not covered.
//!
//! The store has no transactions. An operation that fails part-way through
//! its writes restores the entries it already changed before reporting the
//! error, so callers see either the whole update or none of it.

use super::record::{
    decode_count, decode_name, FavoriteTally, LedgerSnapshot, PredictedCrop,
    FAVORITE_CROP_COUNT_KEY, FAVORITE_CROP_NAME_KEY, TOTAL_CROPS_KEY, TOTAL_DISEASES_KEY,
};
use super::store::KeyValueStore;
use crate::error::LedgerError;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Debug)]
struct Inner<S> {
    store: S,
    lock: Mutex<()>,
}

/// Persisted usage statistics: crop and disease counters plus the favorite
/// crop tally.
#[derive(Debug)]
pub struct UsageLedger<S> {
    inner: Arc<Inner<S>>,
}

impl<S> Clone for UsageLedger<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: KeyValueStore> UsageLedger<S> {
    /// Create a ledger over `store`
    pub fn new(store: S) -> Self {
        Self {
            inner: Arc::new(Inner {
                store,
                lock: Mutex::new(()),
            }),
        }
    }

    /// The backing store
    pub fn store(&self) -> &S {
        &self.inner.store
    }

    /// Record a set of crop recommendations.
    ///
    /// Adds the number of predictions to `totalCrops` and runs every
    /// prediction name through the favorite tally in order. An empty batch
    /// writes nothing. All reads complete before the first write, and a
    /// failed write rolls back the entries already written by this call.
    pub async fn record_crop_predictions(
        &self,
        predictions: &[PredictedCrop],
    ) -> Result<(), LedgerError> {
        if predictions.is_empty() {
            tracing::debug!("no crop predictions to record");
            return Ok(());
        }

        let _guard = self.inner.lock.lock().await;

        let raw_total = self.read_raw(TOTAL_CROPS_KEY).await?;
        let raw_name = self.read_raw(FAVORITE_CROP_NAME_KEY).await?;
        let raw_count = self.read_raw(FAVORITE_CROP_COUNT_KEY).await?;

        let added = u64::try_from(predictions.len()).unwrap_or(u64::MAX);
        let total_crops = decode_count(raw_total.as_deref()).saturating_add(added);
        let mut favorite = FavoriteTally::new(
            decode_name(raw_name.as_deref()),
            decode_count(raw_count.as_deref()),
        );
        favorite.observe_all(predictions.iter().map(|p| p.name.as_str()));

        self.apply(vec![
            Update::new(TOTAL_CROPS_KEY, total_crops.to_string(), raw_total),
            Update::new(FAVORITE_CROP_NAME_KEY, favorite.name.clone(), raw_name),
            Update::new(FAVORITE_CROP_COUNT_KEY, favorite.count.to_string(), raw_count),
        ])
        .await?;

        tracing::debug!(
            added,
            total_crops,
            favorite = %favorite.name,
            favorite_count = favorite.count,
            "recorded crop predictions"
        );
        Ok(())
    }

    /// Record one successful disease detection.
    ///
    /// Callers only invoke this for a recognized class. Bumps both
    /// `totalDiseases` and `totalCrops` by one, or neither.
    pub async fn record_disease_detection(&self, detected_class: &str) -> Result<(), LedgerError> {
        let _guard = self.inner.lock.lock().await;

        let raw_diseases = self.read_raw(TOTAL_DISEASES_KEY).await?;
        let raw_crops = self.read_raw(TOTAL_CROPS_KEY).await?;

        let total_diseases = decode_count(raw_diseases.as_deref()).saturating_add(1);
        let total_crops = decode_count(raw_crops.as_deref()).saturating_add(1);

        self.apply(vec![
            Update::new(TOTAL_DISEASES_KEY, total_diseases.to_string(), raw_diseases),
            Update::new(TOTAL_CROPS_KEY, total_crops.to_string(), raw_crops),
        ])
        .await?;

        tracing::debug!(
            class = detected_class,
            total_diseases,
            total_crops,
            "recorded disease detection"
        );
        Ok(())
    }

    /// Read every entry, applying defaults for missing or malformed values.
    pub async fn read_snapshot(&self) -> Result<LedgerSnapshot, LedgerError> {
        let _guard = self.inner.lock.lock().await;

        let total_crops = self.read_raw(TOTAL_CROPS_KEY).await?;
        let total_diseases = self.read_raw(TOTAL_DISEASES_KEY).await?;
        let favorite_name = self.read_raw(FAVORITE_CROP_NAME_KEY).await?;
        let favorite_count = self.read_raw(FAVORITE_CROP_COUNT_KEY).await?;

        Ok(LedgerSnapshot::decode(
            total_crops.as_deref(),
            total_diseases.as_deref(),
            favorite_name.as_deref(),
            favorite_count.as_deref(),
        ))
    }

    async fn read_raw(&self, key: &'static str) -> Result<Option<String>, LedgerError> {
        self.inner
            .store
            .get(key)
            .await
            .map_err(|e| LedgerError::unavailable(key, e))
    }

    /// Write `updates` in order. When one fails, the entries written before
    /// it are put back to their previous raw values and the original error
    /// is returned.
    async fn apply(&self, updates: Vec<Update>) -> Result<(), LedgerError> {
        for (written, update) in updates.iter().enumerate() {
            if let Err(e) = self.inner.store.set(update.key, &update.value).await {
                self.roll_back(&updates[..written]).await;
                return Err(LedgerError::unavailable(update.key, e));
            }
        }
        Ok(())
    }

    async fn roll_back(&self, written: &[Update]) {
        for update in written.iter().rev() {
            let restored = match &update.previous {
                Some(value) => self.inner.store.set(update.key, value).await,
                None => self.inner.store.remove(update.key).await,
            };
            if let Err(e) = restored {
                tracing::warn!(
                    key = update.key,
                    error = %e,
                    "could not roll back usage statistics entry"
                );
            }
        }
    }
}

/// One pending store write and the raw value it replaces
struct Update {
    key: &'static str,
    value: String,
    previous: Option<String>,
}

impl Update {
    fn new(key: &'static str, value: String, previous: Option<String>) -> Self {
        Self {
            key,
            value,
            previous,
        }
    }
}
