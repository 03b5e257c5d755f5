use serde::{Deserialize, Serialize};

use crate::{account::Account, operation::Operation};

/// Point-in-time copy of every account and operation known to the system.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LedgerSnapshot {
    #[serde(default)]
    pub accounts: Vec<Account>,
    #[serde(default)]
    pub operations: Vec<Operation>,
}

impl LedgerSnapshot {
    pub fn new(accounts: Vec<Account>, operations: Vec<Operation>) -> Self {
        Self {
            accounts,
            operations,
        }
    }
}
