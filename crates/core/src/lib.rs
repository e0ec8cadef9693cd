//! Core ledger logic for Teller.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! Persistence is reached only through the [`account::AccountStore`] trait,
//! which the db crate implements.
//!
//! # Modules
//!
//! - `account` - Account record, input forms, transaction rules, store trait
//! - `handlers` - Per-request orchestration over an account store

pub mod account;
pub mod handlers;

pub use account::{
    Account, AccountForm, AccountNumberGenerator, AccountStore, AccountSummary, AccountType,
    FieldErrors, LedgerError, NewAccount, StoreError, TransactionForm, TransactionType,
};
pub use handlers::{
    AccountHandlers, AccountListing, EditAccount, Operation, Outcome, Params, Response,
    SavedAccount,
};
