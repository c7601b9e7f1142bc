//! # Application Layer
//!
//! Ties the prediction client and the usage ledger together for the
//! command-line front end.
//!
//! ## Components
//!
//! - [`actions`]: crop recommendation and disease detection flows
//! - [`catalog`]: supported crops and diseases
//! - [`config`]: persisted settings
//! - [`profile`]: profile summary built from the ledger
//! - [`report`]: text output

pub mod actions;
pub mod catalog;
pub mod config;
pub mod profile;
pub mod report;

pub use actions::{detect_disease, open_ledger, recommend_crops, SessionLedger};
pub use config::Config;
pub use profile::ProfileSummary;
