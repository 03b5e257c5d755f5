//! ledgerlens-domain
//!
//! Pure domain models (Account, Operation, TimeRange, LedgerSnapshot).
//! No I/O, no CLI, no storage. Only data types and core enums.

pub mod account;
pub mod operation;
pub mod snapshot;
pub mod time_range;

pub use account::*;
pub use operation::*;
pub use snapshot::*;
pub use time_range::*;
