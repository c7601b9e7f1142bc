//! Krishimitra - crop recommendation and plant disease detection from the
//! terminal
//!
//! This library provides the prediction service client, the locally
//! persisted usage ledger, and the application flows that connect them.

pub mod api;
pub mod app;
pub mod error;
pub mod ledger;
