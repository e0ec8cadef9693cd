//! Bank account ledger domain.
//!
//! This module implements the ledger core:
//! - The account record and its summary statistics
//! - Request-scoped input forms with parse-then-validate functions
//! - Deposit and withdraw rules guarding the non-negative balance
//! - The store trait the db crate implements
//! - Account number generation
//! - Error types for ledger operations

pub mod error;
pub mod form;
pub mod number;
pub mod store;
pub mod transaction;
pub mod types;

#[cfg(test)]
mod transaction_props;

pub use error::{HandlerResult, LedgerError};
pub use form::{AccountForm, FieldErrors, TransactionForm, ValidatedAccount, ValidatedTransaction};
pub use number::AccountNumberGenerator;
pub use store::{AccountStore, StoreError};
pub use transaction::{TransactionReceipt, TransactionType};

#[cfg(test)]
pub(crate) use transaction::apply_transaction;
pub use types::{Account, AccountSummary, AccountType, NewAccount};
