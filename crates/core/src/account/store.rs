//! Persistence boundary for accounts.

use std::future::Future;

use rust_decimal::Decimal;
use teller_shared::types::AccountId;
use thiserror::Error;

use super::types::{Account, NewAccount};

/// Errors reported by an [`AccountStore`].
#[derive(Debug, Error)]
pub enum StoreError {
    /// The statement matched no account.
    #[error("account not found: {0}")]
    NotFound(AccountId),

    /// The account number unique constraint rejected an insert.
    #[error("account number already exists: {0}")]
    DuplicateAccountNumber(String),

    /// Connectivity, constraint, or driver failure.
    #[error("persistence error: {0}")]
    Persistence(String),
}

impl StoreError {
    /// Create a persistence error.
    #[must_use]
    pub fn persistence(msg: impl Into<String>) -> Self {
        Self::Persistence(msg.into())
    }
}

/// Repository trait for account persistence.
///
/// This trait is implemented by the db crate to provide actual database
/// operations. Each call acquires and releases its own connection.
pub trait AccountStore: Send + Sync {
    /// All active accounts ordered by id.
    fn find_all(&self) -> impl Future<Output = Result<Vec<Account>, StoreError>> + Send;

    /// Point lookup. Soft-deleted accounts are still returned.
    fn find_by_id(
        &self,
        id: AccountId,
    ) -> impl Future<Output = Result<Option<Account>, StoreError>> + Send;

    /// Lookup by account number.
    fn find_by_account_number(
        &self,
        account_number: &str,
    ) -> impl Future<Output = Result<Option<Account>, StoreError>> + Send;

    /// Inserts a new account and returns it with its assigned id.
    fn create(
        &self,
        account: NewAccount,
    ) -> impl Future<Output = Result<Account, StoreError>> + Send;

    /// Overwrites holder, type, balance, email and phone. Last writer wins.
    fn update(
        &self,
        account: &Account,
    ) -> impl Future<Output = Result<Account, StoreError>> + Send;

    /// Marks the account inactive. Repeating the call is not an error.
    fn delete(&self, id: AccountId) -> impl Future<Output = Result<(), StoreError>> + Send;

    /// Adds `amount` to the balance in a single statement.
    fn deposit(
        &self,
        id: AccountId,
        amount: Decimal,
    ) -> impl Future<Output = Result<(), StoreError>> + Send;

    /// Subtracts `amount` only if the balance covers it.
    ///
    /// The balance check and the write must happen atomically. Returns
    /// `false` when the withdrawal was declined; nothing is changed then.
    fn withdraw(
        &self,
        id: AccountId,
        amount: Decimal,
    ) -> impl Future<Output = Result<bool, StoreError>> + Send;
}
