//! Stateless aggregation over account and operation snapshots.
//!
//! Every query recomputes from the full collections it is handed. The
//! reference instant used for the rolling windows is passed in by the caller.

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, FixedOffset, Offset, Utc};
use ledgerlens_domain::{Account, AccountCategory, Operation, OperationKind, TimeRange};
use rust_decimal::Decimal;

use crate::{
    bucket::{Granularity, GranularityPolicy, IntervalBucketer},
    classifier::AccountClassifier,
    error::{CoreError, CoreResult},
    stats::{AccountStats, DashboardStats, TransactionSeries},
};

pub const DEFAULT_NEW_ACCOUNT_WINDOW_DAYS: i64 = 30;
pub const DEFAULT_RECENT_ACTIVITY_DAYS: i64 = 7;

/// Tunables for [`AnalyticsEngine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineSettings {
    /// Look-back for `new_accounts` when the range has no start.
    pub new_account_window: Duration,
    pub recent_activity_window: Duration,
    pub granularity_policy: GranularityPolicy,
    /// Reference time zone for calendar buckets.
    pub utc_offset: FixedOffset,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            new_account_window: Duration::days(DEFAULT_NEW_ACCOUNT_WINDOW_DAYS),
            recent_activity_window: Duration::days(DEFAULT_RECENT_ACTIVITY_DAYS),
            granularity_policy: GranularityPolicy::Lenient,
            utc_offset: Utc.fix(),
        }
    }
}

/// Start of a look-back window ending at `now`, clamped to the earliest
/// representable instant.
fn window_start(now: DateTime<Utc>, window: Duration) -> DateTime<Utc> {
    now.checked_sub_signed(window).unwrap_or(DateTime::<Utc>::MIN_UTC)
}

#[derive(Debug, Clone, Copy, Default)]
struct FlowTotals {
    credits: Decimal,
    debits: Decimal,
}

impl FlowTotals {
    fn record(&mut self, operation: &Operation) {
        match operation.kind {
            OperationKind::Credit => self.credits += operation.amount,
            OperationKind::Debit => self.debits += operation.amount,
        }
    }

    fn net(&self) -> Decimal {
        self.credits - self.debits
    }
}

impl<'a> FromIterator<&'a Operation> for FlowTotals {
    fn from_iter<I: IntoIterator<Item = &'a Operation>>(iter: I) -> Self {
        let mut totals = FlowTotals::default();
        for operation in iter {
            totals.record(operation);
        }
        totals
    }
}

#[derive(Debug, Clone, Default)]
pub struct AnalyticsEngine {
    settings: EngineSettings,
    bucketer: IntervalBucketer,
}

impl AnalyticsEngine {
    pub fn new(settings: EngineSettings) -> Self {
        Self {
            bucketer: IntervalBucketer::new(settings.utc_offset),
            settings,
        }
    }

    /// Summary figures as of `now`.
    ///
    /// Balances and the active count use every account regardless of
    /// `range`. Operations are narrowed by `range` before the flow and
    /// recency figures are computed.
    pub fn dashboard_stats(
        &self,
        accounts: &[Account],
        operations: &[Operation],
        range: &TimeRange,
        now: DateTime<Utc>,
    ) -> DashboardStats {
        let total_balance: Decimal = accounts.iter().map(|account| account.balance).sum();
        let active_accounts = accounts.iter().filter(|account| account.is_active()).count();

        // Only the start bound applies here; an open end is intentional.
        let created_after = range
            .start
            .unwrap_or_else(|| window_start(now, self.settings.new_account_window));
        let new_accounts = accounts
            .iter()
            .filter(|account| {
                account
                    .created_at
                    .is_some_and(|created| created > created_after)
            })
            .count();

        let in_range: Vec<&Operation> = operations
            .iter()
            .filter(|op| range.is_after_start(op.timestamp))
            .filter(|op| range.is_before_end(op.timestamp))
            .collect();

        let recent_cutoff = window_start(now, self.settings.recent_activity_window);
        let recent_transactions = in_range
            .iter()
            .filter(|op| op.timestamp > recent_cutoff)
            .count();

        let flows: FlowTotals = in_range.iter().copied().collect();

        tracing::debug!(
            accounts = accounts.len(),
            operations = operations.len(),
            in_range = in_range.len(),
            "computed dashboard stats"
        );

        DashboardStats {
            total_balance,
            balance_change: flows.net(),
            active_accounts,
            new_accounts,
            recent_transactions,
            // Pending state is not tracked.
            pending_transactions: 0,
        }
    }

    /// Count and total balance per observed category.
    ///
    /// Accounts without a creation timestamp are never excluded by `range`.
    /// Output follows [`AccountCategory`] declaration order and omits
    /// categories with no matching account.
    pub fn account_stats(&self, accounts: &[Account], range: &TimeRange) -> Vec<AccountStats> {
        let mut groups: BTreeMap<AccountCategory, (usize, Decimal)> = BTreeMap::new();
        for account in accounts
            .iter()
            .filter(|account| account.created_at.map_or(true, |created| range.contains(created)))
        {
            let entry = groups
                .entry(AccountClassifier::classify(account))
                .or_insert((0, Decimal::ZERO));
            entry.0 += 1;
            entry.1 += account.balance;
        }

        groups
            .into_iter()
            .map(|(category, (count, total_balance))| AccountStats {
                category,
                count,
                total_balance,
            })
            .collect()
    }

    /// Series query with an interval name, parsed per the configured policy.
    pub fn transaction_stats(
        &self,
        operations: &[Operation],
        range: &TimeRange,
        interval: &str,
    ) -> CoreResult<TransactionSeries> {
        let granularity = Granularity::parse_with(interval, self.settings.granularity_policy)?;
        self.transaction_series(operations, range, granularity)
    }

    /// Deposits, withdrawals and net change per calendar bucket.
    ///
    /// `range` must carry both bounds with `start < end`. Buckets without
    /// operations are omitted rather than zero-filled.
    pub fn transaction_series(
        &self,
        operations: &[Operation],
        range: &TimeRange,
        granularity: Granularity,
    ) -> CoreResult<TransactionSeries> {
        let (start, end) = range.require_bounds().ok_or_else(|| {
            CoreError::InvalidArgument("time range with start and end dates is required".into())
        })?;
        if start >= end {
            return Err(CoreError::InvalidArgument(format!(
                "time range start {start} must be before end {end}"
            )));
        }

        let mut buckets: BTreeMap<String, FlowTotals> = BTreeMap::new();
        for operation in operations
            .iter()
            .filter(|op| op.timestamp > start && op.timestamp < end)
        {
            buckets
                .entry(self.bucketer.key(operation.timestamp, granularity))
                .or_default()
                .record(operation);
        }

        tracing::debug!(
            %granularity,
            buckets = buckets.len(),
            "computed transaction series"
        );

        let mut series = TransactionSeries::default();
        for (date, totals) in buckets {
            series.push(date, totals.credits, totals.debits);
        }
        Ok(series)
    }
}
