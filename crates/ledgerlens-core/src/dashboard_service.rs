use ledgerlens_domain::TimeRange;

use crate::{
    engine::AnalyticsEngine,
    source::{AccountSource, OperationSource},
    stats::{AccountStats, DashboardStats, TransactionSeries},
    time::{Clock, SystemClock},
    CoreResult,
};

/// Binds the data collaborators and a clock to an [`AnalyticsEngine`].
///
/// Each call fetches fresh collections from the sources; nothing is cached.
pub struct DashboardService<A, O, C = SystemClock> {
    accounts: A,
    operations: O,
    clock: C,
    engine: AnalyticsEngine,
}

impl<A, O> DashboardService<A, O, SystemClock>
where
    A: AccountSource,
    O: OperationSource,
{
    pub fn new(accounts: A, operations: O) -> Self {
        Self::with_clock(accounts, operations, SystemClock)
    }
}

impl<A, O, C> DashboardService<A, O, C>
where
    A: AccountSource,
    O: OperationSource,
    C: Clock,
{
    pub fn with_clock(accounts: A, operations: O, clock: C) -> Self {
        Self {
            accounts,
            operations,
            clock,
            engine: AnalyticsEngine::default(),
        }
    }

    pub fn with_engine(mut self, engine: AnalyticsEngine) -> Self {
        self.engine = engine;
        self
    }

    pub fn engine(&self) -> &AnalyticsEngine {
        &self.engine
    }

    pub fn dashboard_stats(&self, range: &TimeRange) -> CoreResult<DashboardStats> {
        let accounts = self.accounts.list_all_accounts()?;
        let operations = self.operations.list_all_operations()?;
        tracing::info!(?range, "dashboard stats requested");
        Ok(self
            .engine
            .dashboard_stats(&accounts, &operations, range, self.clock.now()))
    }

    pub fn account_stats(&self, range: &TimeRange) -> CoreResult<Vec<AccountStats>> {
        let accounts = self.accounts.list_all_accounts()?;
        tracing::info!(?range, "account stats requested");
        Ok(self.engine.account_stats(&accounts, range))
    }

    pub fn transaction_stats(
        &self,
        range: &TimeRange,
        interval: &str,
    ) -> CoreResult<TransactionSeries> {
        let operations = self.operations.list_all_operations()?;
        tracing::info!(?range, interval, "transaction stats requested");
        self.engine.transaction_stats(&operations, range, interval)
    }
}
