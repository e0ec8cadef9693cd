//! Account record and derived summary types.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use teller_shared::types::AccountId;

/// Kind of bank account.
///
/// Stored as free text. Text outside the three known kinds is kept verbatim
/// in `Other` so rows written by other tools still load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AccountType {
    /// Personal savings account.
    #[default]
    Savings,
    /// Personal checking account.
    Checking,
    /// Business account.
    Business,
    /// Any other stored value.
    Other(String),
}

impl AccountType {
    /// Reads an account type from request or database text.
    ///
    /// Matching is case-insensitive and ignores surrounding whitespace.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let trimmed = text.trim();
        match trimmed.to_ascii_uppercase().as_str() {
            "SAVINGS" => Self::Savings,
            "CHECKING" => Self::Checking,
            "BUSINESS" => Self::Business,
            _ => Self::Other(trimmed.to_string()),
        }
    }

    /// Returns the stored text form.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Savings => "SAVINGS",
            Self::Checking => "CHECKING",
            Self::Business => "BUSINESS",
            Self::Other(text) => text,
        }
    }
}

impl From<String> for AccountType {
    fn from(text: String) -> Self {
        Self::parse(&text)
    }
}

impl From<AccountType> for String {
    fn from(kind: AccountType) -> Self {
        kind.as_str().to_string()
    }
}

impl std::fmt::Display for AccountType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A persisted bank account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Store-assigned identity.
    pub id: AccountId,
    /// Human-readable unique number.
    pub account_number: String,
    /// Name of the account holder.
    pub holder_name: String,
    /// Account kind.
    pub account_type: AccountType,
    /// Current balance. Never negative after a completed operation.
    pub balance: Decimal,
    /// Contact email.
    pub email: Option<String>,
    /// Contact phone.
    pub phone: Option<String>,
    /// Set by the store on insert.
    pub created_date: DateTime<Utc>,
    /// `false` once the account has been soft-deleted.
    pub active: bool,
}

/// Fields of an account that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAccount {
    /// Human-readable unique number.
    pub account_number: String,
    /// Name of the account holder.
    pub holder_name: String,
    /// Account kind.
    pub account_type: AccountType,
    /// Opening balance.
    pub balance: Decimal,
    /// Contact email.
    pub email: Option<String>,
    /// Contact phone.
    pub phone: Option<String>,
}

/// Aggregate figures shown alongside the account list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountSummary {
    /// Sum of all listed balances.
    pub total_balance: Decimal,
    /// Number of listed accounts.
    pub account_count: usize,
    /// Number of savings accounts.
    pub savings_count: usize,
    /// Number of checking accounts.
    pub checking_count: usize,
    /// Number of business accounts.
    pub business_count: usize,
}

impl AccountSummary {
    /// Computes totals over a slice of accounts.
    #[must_use]
    pub fn from_accounts(accounts: &[Account]) -> Self {
        accounts.iter().fold(
            Self {
                account_count: accounts.len(),
                ..Self::default()
            },
            |mut summary, account| {
                summary.total_balance += account.balance;
                match account.account_type {
                    AccountType::Savings => summary.savings_count += 1,
                    AccountType::Checking => summary.checking_count += 1,
                    AccountType::Business => summary.business_count += 1,
                    AccountType::Other(_) => {}
                }
                summary
            },
        )
    }
}
