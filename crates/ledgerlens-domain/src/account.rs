use std::fmt;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents a bank account as handed over by the account collaborator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Account {
    pub id: Uuid,
    pub balance: Decimal,
    pub status: AccountStatus,
    /// Absent for legacy records that predate creation tracking.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<Uuid>,
    pub product: AccountProduct,
}

impl Account {
    /// Creates an active account of the given product with an opening balance.
    pub fn new(product: AccountProduct, balance: Decimal) -> Self {
        Self {
            id: Uuid::new_v4(),
            balance,
            status: AccountStatus::Active,
            created_at: None,
            currency: None,
            customer_id: None,
            product,
        }
    }

    pub fn with_status(mut self, status: AccountStatus) -> Self {
        self.status = status;
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = Some(currency.into());
        self
    }

    pub fn is_active(&self) -> bool {
        self.status == AccountStatus::Active
    }
}

/// Structural variant of an account. Fixed at creation; never migrates.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum AccountProduct {
    Savings { interest_rate: Decimal },
    Current { overdraft: Decimal },
}

impl AccountProduct {
    pub fn savings(interest_rate: Decimal) -> Self {
        AccountProduct::Savings { interest_rate }
    }

    pub fn current(overdraft: Decimal) -> Self {
        AccountProduct::Current { overdraft }
    }
}

/// Field-less label for an [`AccountProduct`] used when grouping.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AccountCategory {
    Savings,
    Current,
}

impl AccountCategory {
    pub const ALL: [AccountCategory; 2] = [AccountCategory::Savings, AccountCategory::Current];

    pub fn label(&self) -> &'static str {
        match self {
            AccountCategory::Savings => "Savings",
            AccountCategory::Current => "Current",
        }
    }

    /// Short code used by upstream account records.
    pub fn code(&self) -> &'static str {
        match self {
            AccountCategory::Savings => "SAV",
            AccountCategory::Current => "CUR",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.code() == code)
    }
}

impl fmt::Display for AccountCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Enumerates the lifecycle states an account can be in.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum AccountStatus {
    Created,
    Active,
    Suspended,
    Closed,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn category_codes_round_trip() {
        for category in AccountCategory::ALL {
            assert_eq!(AccountCategory::from_code(category.code()), Some(category));
        }
        assert_eq!(AccountCategory::from_code("XYZ"), None);
    }

    #[test]
    fn product_serializes_with_type_tag() {
        let account = Account::new(AccountProduct::current(dec!(500)), dec!(1000));
        let json = serde_json::to_value(&account).expect("serialize account");
        assert_eq!(json["product"]["type"], "Current");
        assert!(json.get("created_at").is_none());
    }

    #[test]
    fn product_accepts_numeric_fields() {
        let raw = r#"{"type":"Savings","interest_rate":3.5}"#;
        let product: AccountProduct = serde_json::from_str(raw).expect("parse product");
        assert_eq!(product, AccountProduct::savings(dec!(3.5)));
    }

    #[test]
    fn unknown_product_is_rejected() {
        let raw = r#"{"type":"Brokerage"}"#;
        assert!(serde_json::from_str::<AccountProduct>(raw).is_err());
    }
}
