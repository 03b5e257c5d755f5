mod common;

use chrono::{TimeZone, Utc};
use ledgerlens::{
    analytics::{CoreError, DashboardService, FixedClock},
    config::AnalyticsConfig,
    domain::{AccountCategory, TimeRange},
    settings::engine_from_config,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use common::{reference_now, sample_snapshot};

#[test]
fn dashboard_over_sample_book() {
    let snapshot = sample_snapshot();
    let service = DashboardService::with_clock(&snapshot, &snapshot, FixedClock(reference_now()));

    let stats = service.dashboard_stats(&TimeRange::unbounded()).unwrap();
    assert_eq!(stats.total_balance, dec!(8000.75));
    assert_eq!(stats.balance_change, dec!(1174.75));
    assert_eq!(stats.active_accounts, 2);
    assert_eq!(stats.new_accounts, 1);
    assert_eq!(stats.recent_transactions, 2);
    assert_eq!(stats.pending_transactions, 0);

    let may_only = TimeRange::new(
        Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap(),
        Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap(),
    );
    let stats = service.dashboard_stats(&may_only).unwrap();
    assert_eq!(stats.balance_change, dec!(-125.25));
    assert_eq!(stats.recent_transactions, 0);
    // New accounts count everything created after the range start.
    assert_eq!(stats.new_accounts, 1);
}

#[test]
fn category_balances_add_up_to_total() {
    let snapshot = sample_snapshot();
    let service = DashboardService::with_clock(&snapshot, &snapshot, FixedClock(reference_now()));

    let dashboard = service.dashboard_stats(&TimeRange::unbounded()).unwrap();
    let categories = service.account_stats(&TimeRange::unbounded()).unwrap();
    let sum: Decimal = categories.iter().map(|c| c.total_balance).sum();
    assert_eq!(sum, dashboard.total_balance);

    let counts: Vec<(AccountCategory, usize)> =
        categories.iter().map(|c| (c.category, c.count)).collect();
    assert_eq!(
        counts,
        vec![(AccountCategory::Savings, 1), (AccountCategory::Current, 2)]
    );
}

#[test]
fn configured_offset_moves_bucket_boundaries() {
    let snapshot = sample_snapshot();
    let range = TimeRange::new(
        Utc.with_ymd_and_hms(2024, 4, 1, 0, 0, 0).unwrap(),
        Utc.with_ymd_and_hms(2024, 7, 1, 0, 0, 0).unwrap(),
    );

    let utc_service = DashboardService::with_clock(&snapshot, &snapshot, FixedClock(reference_now()));
    let daily = utc_service.transaction_stats(&range, "daily").unwrap();
    assert_eq!(daily.dates, vec!["2024-04-20", "2024-05-02", "2024-06-12", "2024-06-14"]);

    let config = AnalyticsConfig {
        utc_offset_minutes: 15 * 60,
        ..AnalyticsConfig::default()
    };
    let shifted = DashboardService::with_clock(&snapshot, &snapshot, FixedClock(reference_now()))
        .with_engine(engine_from_config(&config).unwrap());
    let daily = shifted.transaction_stats(&range, "daily").unwrap();
    assert_eq!(daily.dates, vec!["2024-04-21", "2024-05-03", "2024-06-13", "2024-06-15"]);
}

#[test]
fn strict_config_rejects_unknown_interval() {
    let snapshot = sample_snapshot();
    let config = AnalyticsConfig {
        strict_granularity: true,
        ..AnalyticsConfig::default()
    };
    let service = DashboardService::with_clock(&snapshot, &snapshot, FixedClock(reference_now()))
        .with_engine(engine_from_config(&config).unwrap());
    let range = TimeRange::new(
        Utc.with_ymd_and_hms(2024, 4, 1, 0, 0, 0).unwrap(),
        Utc.with_ymd_and_hms(2024, 7, 1, 0, 0, 0).unwrap(),
    );
    assert!(matches!(
        service.transaction_stats(&range, "quarterly"),
        Err(CoreError::UnknownGranularity(_))
    ));
    let monthly = service.transaction_stats(&range, "MONTHLY").unwrap();
    assert_eq!(monthly.dates, vec!["2024-04", "2024-05", "2024-06"]);
    assert_eq!(monthly.net_change, vec![dec!(500), dec!(-125.25), dec!(800)]);
}
