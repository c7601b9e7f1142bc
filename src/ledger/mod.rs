//! # Usage Ledger Module
//!
//! Local usage statistics shown on the profile summary.
//!
//! ## Overview
//!
//! The ledger keeps four independent entries in a durable key-value store:
//! the total number of crops analyzed, the number of diseases detected, and
//! a "favorite crop" tally. Crop recommendations and successful disease
//! detections are applied to it; the profile command reads it back as a
//! [`LedgerSnapshot`].
//!
//! ## Favorite Crop
//!
//! Each recommended crop is compared with the current favorite. A match
//! bumps the count; a different crop only replaces the favorite while its
//! count is zero. See [`FavoriteTally::observe`].
//!
//! ## Storage
//!
//! [`FileStore`] keeps the entries in `ledger.json` under the platform data
//! directory:
//! - Linux: `~/.local/share/krishimitra/`
//! - macOS: `~/Library/Application Support/krishimitra/`
//! - Windows: `%APPDATA%\krishimitra\`

mod record;
mod store;
mod usage_ledger;

pub use record::{
    FavoriteTally, LedgerSnapshot, PredictedCrop, DEFAULT_FAVORITE_CROP,
    FAVORITE_CROP_COUNT_KEY, FAVORITE_CROP_NAME_KEY, TOTAL_CROPS_KEY, TOTAL_DISEASES_KEY,
};
pub use store::{FileStore, KeyValueStore, MemoryStore, LEDGER_FILE_NAME};
pub use usage_ledger::UsageLedger;
