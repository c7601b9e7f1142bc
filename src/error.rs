//! # Error Types
//!
//! Typed errors for the library boundaries. The binary wraps these in
//! [`anyhow::Error`] at the edge.
//!
//! | Error | Raised by | Policy |
//! |-------|-----------|--------|
//! | [`StoreError`] | [`crate::ledger::KeyValueStore`] implementations | wrapped into [`LedgerError`] |
//! | [`LedgerError`] | [`crate::ledger::UsageLedger`] | logged, never shown to the user |
//! | [`ApiError`] | [`crate::api::PredictionService`] implementations | shown to the user, ledger untouched |

use std::path::PathBuf;
use thiserror::Error;

/// Failure of the durable key-value store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store I/O failed at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize store contents: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("store is unavailable: {0}")]
    Unavailable(String),
}

/// Failure of a ledger operation.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("storage unavailable while accessing `{key}`: {source}")]
    StorageUnavailable {
        key: &'static str,
        #[source]
        source: StoreError,
    },
}

impl LedgerError {
    pub(crate) fn unavailable(key: &'static str, source: StoreError) -> Self {
        Self::StorageUnavailable { key, source }
    }
}

/// Failure talking to one of the prediction services.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} responded with status {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("could not decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("invalid coordinates: {0}")]
    InvalidCoordinates(String),

    #[error("service reported an error: {0}")]
    Remote(String),

    #[error("failed to read image {}: {source}", .path.display())]
    Image {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
