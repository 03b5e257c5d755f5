//! ledgerlens-core
//!
//! Analytics over account and operation snapshots: dashboard summaries,
//! per-category account breakdowns and calendar-bucketed transaction series.
//! Depends on ledgerlens-domain. No CLI, no terminal I/O, no direct storage interactions.

pub mod bucket;
pub mod classifier;
pub mod dashboard_service;
pub mod engine;
pub mod error;
pub mod source;
pub mod stats;
pub mod time;

pub use bucket::{Granularity, GranularityPolicy, IntervalBucketer};
pub use classifier::AccountClassifier;
pub use dashboard_service::DashboardService;
pub use engine::{AnalyticsEngine, EngineSettings};
pub use error::{CoreError, CoreResult};
pub use source::{snapshot_warnings, AccountSource, OperationSource};
pub use stats::{AccountStats, DashboardStats, TransactionSeries};
pub use time::{Clock, FixedClock, SystemClock};
