#![doc(test(attr(deny(warnings))))]

//! Ledgerlens computes dashboard analytics (balances, per-category account
//! breakdowns, bucketed transaction series) over snapshots of bank accounts
//! and their operations.

pub mod cli;
pub mod errors;
pub mod settings;
pub mod utils;

pub use ledgerlens_config as config;
pub use ledgerlens_core as analytics;
pub use ledgerlens_domain as domain;
pub use ledgerlens_storage_json as storage;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup debug log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::debug!("Ledgerlens tracing initialized.");
    });
}
