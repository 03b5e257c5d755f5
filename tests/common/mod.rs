#![allow(dead_code)]

use std::{path::PathBuf, sync::Mutex};

use chrono::{DateTime, Duration, TimeZone, Utc};
use ledgerlens::{
    domain::{Account, AccountProduct, AccountStatus, LedgerSnapshot, Operation},
    storage::JsonSnapshotStore,
};
use once_cell::sync::Lazy;
use rust_decimal_macros::dec;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

pub fn reference_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 15, 10, 30, 0).unwrap()
}

/// Mixed savings/current book with operations over three months.
pub fn sample_snapshot() -> LedgerSnapshot {
    let now = reference_now();
    let checking = Account::new(AccountProduct::current(dec!(500)), dec!(1000))
        .created_at(now - Duration::days(10));
    let payroll = Account::new(AccountProduct::current(dec!(500)), dec!(2000))
        .created_at(now - Duration::days(60));
    let rainy_day = Account::new(AccountProduct::savings(dec!(3.2)), dec!(5000.75))
        .with_status(AccountStatus::Suspended);
    let operations = vec![
        Operation::credit(dec!(500), Utc.with_ymd_and_hms(2024, 4, 20, 9, 0, 0).unwrap(), payroll.id),
        Operation::debit(dec!(125.25), Utc.with_ymd_and_hms(2024, 5, 2, 9, 0, 0).unwrap(), payroll.id),
        Operation::credit(dec!(1000), Utc.with_ymd_and_hms(2024, 6, 12, 9, 0, 0).unwrap(), checking.id),
        Operation::debit(dec!(200), Utc.with_ymd_and_hms(2024, 6, 14, 9, 0, 0).unwrap(), checking.id),
    ];
    LedgerSnapshot::new(vec![checking, payroll, rainy_day], operations)
}

/// Isolated directory with `snapshot.json` written from [`sample_snapshot`].
pub fn setup_test_env() -> (PathBuf, PathBuf) {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);

    let snapshot_path = base.join("snapshot.json");
    JsonSnapshotStore::new(&snapshot_path)
        .save_snapshot(&sample_snapshot())
        .expect("write snapshot");
    (base, snapshot_path)
}
