use ledgerlens_domain::{Account, AccountCategory, AccountProduct};

/// Maps accounts onto their grouping category.
pub struct AccountClassifier;

impl AccountClassifier {
    /// Total over the closed set of account products.
    pub fn classify(account: &Account) -> AccountCategory {
        Self::category_of(&account.product)
    }

    pub fn category_of(product: &AccountProduct) -> AccountCategory {
        match product {
            AccountProduct::Savings { .. } => AccountCategory::Savings,
            AccountProduct::Current { .. } => AccountCategory::Current,
        }
    }
}
