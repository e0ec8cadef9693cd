//! Request handlers for the account ledger.
//!
//! Each handler is a stateless orchestration over an [`AccountStore`]:
//! parse and validate input, call the store, and return a typed result or a
//! [`LedgerError`]. Input problems are detected before the store is touched.

mod dispatch;


use std::sync::Arc;

use serde::Serialize;
use teller_shared::types::AccountId;
use tracing::{error, info, warn};

use crate::account::{
    Account, AccountForm, AccountNumberGenerator, AccountStore, AccountSummary, FieldErrors,
    HandlerResult, LedgerError, NewAccount, TransactionForm, TransactionReceipt, TransactionType,
};

pub use dispatch::{Operation, Outcome, Params, Response};

/// Active accounts plus their aggregate figures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountListing {
    /// Active accounts ordered by id.
    pub accounts: Vec<Account>,
    /// Totals over `accounts`.
    pub summary: AccountSummary,
}

/// A form ready for the create/edit screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditAccount {
    /// Pre-filled form.
    pub form: AccountForm,
    /// `true` when the form was loaded from an existing account.
    pub editing: bool,
}

/// Outcome of a successful save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedAccount {
    /// Stored account.
    pub account: Account,
    /// `true` when a new account was inserted.
    pub created: bool,
}

/// Account request handlers.
pub struct AccountHandlers<S: AccountStore> {
    store: Arc<S>,
    numbers: AccountNumberGenerator,
}

impl<S: AccountStore> Clone for AccountHandlers<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            numbers: self.numbers,
        }
    }
}

impl<S: AccountStore> AccountHandlers<S> {
    /// Create handlers over a store.
    #[must_use]
    pub fn new(store: Arc<S>, numbers: AccountNumberGenerator) -> Self {
        Self { store, numbers }
    }

    /// The underlying store.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Lists active accounts with totals.
    pub async fn list(&self) -> HandlerResult<AccountListing> {
        info!("Fetching all accounts");

        let accounts = self.store.find_all().await.map_err(|e| {
            error!(error = %e, "Failed to list accounts");
            LedgerError::from(e)
        })?;
        let summary = AccountSummary::from_accounts(&accounts);

        info!(
            count = summary.account_count,
            total_balance = %summary.total_balance,
            "Listed accounts"
        );
        Ok(AccountListing { accounts, summary })
    }

    /// Shows one account by id.
    pub async fn view(&self, id: Option<&str>) -> HandlerResult<Account> {
        let id = AccountId::parse_param(id)?;
        info!(account_id = %id, "Viewing account");
        self.load(id).await
    }

    /// Shows one account by its account number.
    pub async fn view_by_number(&self, account_number: Option<&str>) -> HandlerResult<Account> {
        let number = account_number
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .ok_or_else(|| {
                let mut errors = FieldErrors::new();
                errors.add("accountNumber", "Account number is required");
                LedgerError::Validation(errors)
            })?;

        self.store
            .find_by_account_number(number)
            .await?
            .ok_or_else(|| LedgerError::AccountNumberNotFound(number.to_string()))
    }

    /// Prepares the create/edit form.
    ///
    /// With an id the form is loaded from the stored account; without one a
    /// new account number is issued and defaults are filled in.
    pub async fn edit_prepare(&self, id: Option<&str>) -> HandlerResult<EditAccount> {
        if id.is_none_or(|raw| raw.trim().is_empty()) {
            let number = self.numbers.generate();
            info!(account_number = %number, "Preparing new account form");
            return Ok(EditAccount {
                form: AccountForm::for_new_account(number),
                editing: false,
            });
        }

        let id = AccountId::parse_param(id)?;
        let account = self.load(id).await?;
        info!(account_number = %account.account_number, "Loaded account for editing");

        Ok(EditAccount {
            form: AccountForm::from_account(&account),
            editing: true,
        })
    }

    /// Creates or updates an account from a submitted form.
    pub async fn save(&self, form: &AccountForm) -> HandlerResult<SavedAccount> {
        let input = form.validate().map_err(|errors| {
            warn!(errors = %errors, "Account form rejected");
            LedgerError::Validation(errors)
        })?;

        if let Some(id) = input.id {
            let mut account = self.load(id).await?;
            account.holder_name = input.holder_name;
            account.account_type = input.account_type;
            account.balance = input.balance;
            account.email = input.email;
            account.phone = input.phone;

            let account = self.store.update(&account).await.map_err(|e| {
                error!(error = %e, account_id = %id, "Failed to update account");
                LedgerError::from(e)
            })?;
            info!(account_number = %account.account_number, "Updated account");
            return Ok(SavedAccount {
                account,
                created: false,
            });
        }

        let account_number = input
            .account_number
            .unwrap_or_else(|| self.numbers.generate());
        let new_account = NewAccount {
            account_number,
            holder_name: input.holder_name,
            account_type: input.account_type,
            balance: input.balance,
            email: input.email,
            phone: input.phone,
        };

        let account = self.store.create(new_account).await.map_err(|e| {
            error!(error = %e, "Failed to create account");
            LedgerError::from(e)
        })?;
        info!(
            account_id = %account.id,
            account_number = %account.account_number,
            "Created account"
        );
        Ok(SavedAccount {
            account,
            created: true,
        })
    }

    /// Soft-deletes an account.
    pub async fn delete(&self, id: Option<&str>) -> HandlerResult<AccountId> {
        let id = AccountId::parse_param(id)?;

        self.store.delete(id).await.map_err(|e| {
            error!(error = %e, account_id = %id, "Failed to delete account");
            LedgerError::from(e)
        })?;

        info!(account_id = %id, "Deactivated account");
        Ok(id)
    }

    /// Applies a deposit or withdrawal.
    pub async fn transact(&self, form: &TransactionForm) -> HandlerResult<TransactionReceipt> {
        let input = form.validate().map_err(|errors| {
            warn!(errors = %errors, "Transaction form rejected");
            LedgerError::Validation(errors)
        })?;
        let kind: TransactionType = form.transaction_type.as_deref().unwrap_or_default().parse()?;

        info!(
            account_id = %input.account_id,
            amount = %input.amount,
            transaction_type = %kind,
            "Processing transaction"
        );

        match kind {
            TransactionType::Deposit => {
                self.store.deposit(input.account_id, input.amount).await?;
            }
            TransactionType::Withdraw => {
                let completed = self.store.withdraw(input.account_id, input.amount).await?;
                if !completed {
                    warn!(
                        account_id = %input.account_id,
                        amount = %input.amount,
                        "Withdrawal declined: insufficient funds"
                    );
                    return Err(LedgerError::InsufficientFunds {
                        account_id: input.account_id,
                        requested: input.amount,
                    });
                }
            }
        }

        // The balance change is committed at this point.
        let account = match self.store.find_by_id(input.account_id).await {
            Ok(Some(account)) => {
                info!(
                    account_id = %account.id,
                    balance = %account.balance,
                    transaction_type = %kind,
                    "Transaction completed"
                );
                Some(account)
            }
            Ok(None) => {
                error!(account_id = %input.account_id, "Account vanished after transaction");
                None
            }
            Err(e) => {
                error!(
                    error = %e,
                    account_id = %input.account_id,
                    transaction_type = %kind,
                    "Transaction completed but account reload failed"
                );
                None
            }
        };

        Ok(TransactionReceipt {
            transaction_type: kind,
            amount: input.amount,
            account,
        })
    }

    async fn load(&self, id: AccountId) -> HandlerResult<Account> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or(LedgerError::AccountNotFound(id))
    }
}
