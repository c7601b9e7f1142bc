//! # Prediction Actions
//!
//! The two user-facing flows. Each one asks the prediction service first and
//! only then updates the usage ledger.
//!
//! Ledger updates are best-effort: a storage failure is logged and the
//! prediction is still returned. A service failure returns the error and
//! leaves the ledger untouched.

use super::config::Config;
use crate::api::{Coordinates, CropPrediction, Diagnosis, PredictionService};
use crate::error::{ApiError, LedgerError};
use crate::ledger::{FileStore, KeyValueStore, MemoryStore, PredictedCrop, UsageLedger};
use std::path::PathBuf;

/// Ledger over whichever store [`open_ledger`] managed to open
pub type SessionLedger = UsageLedger<Box<dyn KeyValueStore>>;

/// Open the file-backed ledger in the configured data directory.
///
/// When no data directory can be determined the statistics are kept in
/// memory for this run only, so a prediction is never blocked on it.
pub fn open_ledger(config: &Config) -> SessionLedger {
    ledger_in(config.resolve_data_dir())
}

fn ledger_in(data_dir: anyhow::Result<PathBuf>) -> SessionLedger {
    let store: Box<dyn KeyValueStore> = match data_dir {
        Ok(dir) => {
            tracing::debug!(data_dir = %dir.display(), "opening usage ledger");
            Box::new(FileStore::in_dir(&dir))
        }
        Err(e) => {
            tracing::warn!(error = %format!("{e:#}"), "usage statistics will not be saved this run");
            Box::new(MemoryStore::new())
        }
    };
    UsageLedger::new(store)
}

/// Fetch crop recommendations for a location and record them.
pub async fn recommend_crops<P, S>(
    service: &P,
    ledger: &UsageLedger<S>,
    coords: Coordinates,
) -> Result<Vec<CropPrediction>, ApiError>
where
    P: PredictionService + ?Sized,
    S: KeyValueStore,
{
    let predictions = service.predict_crops(coords).await?;

    let entries: Vec<PredictedCrop> = predictions.iter().map(PredictedCrop::from).collect();
    log_ledger_failure(ledger.record_crop_predictions(&entries).await);

    Ok(predictions)
}

/// Diagnose a leaf photo and record the detection when a disease class was
/// recognized.
pub async fn detect_disease<P, S>(
    service: &P,
    ledger: &UsageLedger<S>,
    image: Vec<u8>,
) -> Result<Diagnosis, ApiError>
where
    P: PredictionService + ?Sized,
    S: KeyValueStore,
{
    let diagnosis = service.predict_disease(image).await?;

    if diagnosis.is_unknown() {
        tracing::debug!("leaf not recognized, usage statistics unchanged");
    } else {
        log_ledger_failure(ledger.record_disease_detection(diagnosis.class()).await);
    }

    Ok(diagnosis)
}

fn log_ledger_failure(result: Result<(), LedgerError>) {
    if let Err(e) = result {
        tracing::warn!(error = %e, "failed to update usage statistics");
    }
}
