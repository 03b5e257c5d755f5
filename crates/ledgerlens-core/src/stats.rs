//! Result types returned by the analytics engine.

use ledgerlens_domain::AccountCategory;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Headline figures for the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_balance: Decimal,
    pub balance_change: Decimal,
    pub active_accounts: usize,
    pub new_accounts: usize,
    pub recent_transactions: usize,
    pub pending_transactions: usize,
}

/// Count and balance of the accounts observed in one category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AccountStats {
    pub category: AccountCategory,
    pub count: usize,
    pub total_balance: Decimal,
}

/// Per-bucket deposits and withdrawals. All four vectors are index-aligned.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TransactionSeries {
    pub dates: Vec<String>,
    pub deposits: Vec<Decimal>,
    pub withdrawals: Vec<Decimal>,
    pub net_change: Vec<Decimal>,
}

impl TransactionSeries {
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    pub(crate) fn push(&mut self, date: String, deposits: Decimal, withdrawals: Decimal) {
        self.dates.push(date);
        self.deposits.push(deposits);
        self.withdrawals.push(withdrawals);
        self.net_change.push(deposits - withdrawals);
    }

    /// Iterates `(date, deposits, withdrawals, net_change)` rows.
    pub fn rows(&self) -> impl Iterator<Item = (&str, Decimal, Decimal, Decimal)> + '_ {
        self.dates
            .iter()
            .zip(&self.deposits)
            .zip(&self.withdrawals)
            .zip(&self.net_change)
            .map(|(((date, dep), wd), net)| (date.as_str(), *dep, *wd, *net))
    }
}
