use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Direction of a financial operation. The stored amount is a magnitude.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum OperationKind {
    Credit,
    Debit,
}

/// A single credit or debit booked against an account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Operation {
    pub id: Uuid,
    pub kind: OperationKind,
    pub amount: Decimal,
    pub timestamp: DateTime<Utc>,
    /// Owning account, kept for traceability only.
    pub account_id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Operation {
    pub fn new(
        kind: OperationKind,
        amount: Decimal,
        timestamp: DateTime<Utc>,
        account_id: Uuid,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            amount,
            timestamp,
            account_id,
            description: None,
        }
    }

    pub fn credit(amount: Decimal, timestamp: DateTime<Utc>, account_id: Uuid) -> Self {
        Self::new(OperationKind::Credit, amount, timestamp, account_id)
    }

    pub fn debit(amount: Decimal, timestamp: DateTime<Utc>, account_id: Uuid) -> Self {
        Self::new(OperationKind::Debit, amount, timestamp, account_id)
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}
