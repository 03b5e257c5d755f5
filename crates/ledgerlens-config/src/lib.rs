//! ledgerlens-config
//!
//! Persistent analytics preferences.
//! Owns the AnalyticsConfig data structure plus disk persistence helpers.

pub mod error;
pub mod manager;
pub mod model;

pub use error::ConfigError;
pub use manager::ConfigManager;
pub use model::AnalyticsConfig;
