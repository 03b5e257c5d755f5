use std::{collections::HashSet, sync::Arc};

use ledgerlens_domain::{Account, LedgerSnapshot, Operation};
use rust_decimal::Decimal;

use crate::CoreResult;

/// Supplies the complete, unfiltered list of accounts.
pub trait AccountSource: Send + Sync {
    fn list_all_accounts(&self) -> CoreResult<Vec<Account>>;
}

/// Supplies the complete, unfiltered list of operations.
pub trait OperationSource: Send + Sync {
    fn list_all_operations(&self) -> CoreResult<Vec<Operation>>;
}

impl AccountSource for LedgerSnapshot {
    fn list_all_accounts(&self) -> CoreResult<Vec<Account>> {
        Ok(self.accounts.clone())
    }
}

impl OperationSource for LedgerSnapshot {
    fn list_all_operations(&self) -> CoreResult<Vec<Operation>> {
        Ok(self.operations.clone())
    }
}

impl<T: AccountSource + ?Sized> AccountSource for &T {
    fn list_all_accounts(&self) -> CoreResult<Vec<Account>> {
        (**self).list_all_accounts()
    }
}

impl<T: OperationSource + ?Sized> OperationSource for &T {
    fn list_all_operations(&self) -> CoreResult<Vec<Operation>> {
        (**self).list_all_operations()
    }
}

impl<T: AccountSource + ?Sized> AccountSource for Arc<T> {
    fn list_all_accounts(&self) -> CoreResult<Vec<Account>> {
        (**self).list_all_accounts()
    }
}

impl<T: OperationSource + ?Sized> OperationSource for Arc<T> {
    fn list_all_operations(&self) -> CoreResult<Vec<Operation>> {
        (**self).list_all_operations()
    }
}

/// Detects dangling references and other anomalies within a snapshot.
pub fn snapshot_warnings(snapshot: &LedgerSnapshot) -> Vec<String> {
    let mut warnings = Vec::new();
    let mut account_ids = HashSet::new();
    for account in &snapshot.accounts {
        if !account_ids.insert(account.id) {
            warnings.push(format!("duplicate account id {}", account.id));
        }
    }

    let mut operation_ids = HashSet::new();
    for op in &snapshot.operations {
        if !operation_ids.insert(op.id) {
            warnings.push(format!("duplicate operation id {}", op.id));
        }
        if !account_ids.contains(&op.account_id) {
            warnings.push(format!(
                "operation {} references unknown account {}",
                op.id, op.account_id
            ));
        }
        if op.amount < Decimal::ZERO {
            warnings.push(format!("operation {} has negative amount {}", op.id, op.amount));
        }
    }
    warnings
}
