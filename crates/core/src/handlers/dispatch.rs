//! Named-operation dispatch over a string parameter map.

use std::collections::HashMap;
use std::str::FromStr;

use serde::Serialize;
use serde_json::Value;
use teller_shared::AppError;
use teller_shared::types::AccountId;

use super::{AccountHandlers, AccountListing, EditAccount, SavedAccount};
use crate::account::{
    Account, AccountForm, AccountStore, FieldErrors, HandlerResult, LedgerError, TransactionForm,
    TransactionReceipt, TransactionType,
};

/// Raw request parameters keyed by form field name.
pub type Params = HashMap<String, String>;

/// Operations reachable through [`AccountHandlers::dispatch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// List active accounts.
    List,
    /// Show one account.
    View,
    /// Prepare the create/edit form.
    Edit,
    /// Create or update an account.
    Save,
    /// Soft-delete an account.
    Delete,
    /// Deposit or withdraw.
    Transaction,
}

impl FromStr for Operation {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "list" => Ok(Self::List),
            "view" => Ok(Self::View),
            "edit" => Ok(Self::Edit),
            "save" => Ok(Self::Save),
            "delete" => Ok(Self::Delete),
            "transaction" => Ok(Self::Transaction),
            other => {
                let mut errors = FieldErrors::new();
                errors.add("operation", format!("Unknown operation: '{other}'"));
                Err(LedgerError::Validation(errors))
            }
        }
    }
}

/// Success or error tag consumed by the rendering side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// The operation completed.
    Success,
    /// The operation failed; `message` says why.
    Error,
}

/// Uniform result of a dispatched operation.
#[derive(Debug, Clone, Serialize)]
pub struct Response {
    /// Success or error.
    pub outcome: Outcome,
    /// Human-readable message.
    pub message: String,
    /// Operation data; `null` on error.
    #[serde(skip_serializing_if = "Value::is_null")]
    pub payload: Value,
    /// Per-field validation messages.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<FieldErrors>,
    /// Machine-readable error code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<&'static str>,
    /// HTTP status matching the outcome.
    #[serde(skip)]
    pub status: u16,
}

impl Response {
    /// Successful response carrying `payload`.
    pub fn success(message: impl Into<String>, payload: impl Serialize) -> Self {
        Self {
            outcome: Outcome::Success,
            message: message.into(),
            payload: serde_json::to_value(payload).unwrap_or(Value::Null),
            errors: None,
            code: None,
            status: 200,
        }
    }

    /// Error response for a handler failure.
    #[must_use]
    pub fn failure(err: LedgerError) -> Self {
        let message = err.to_string();
        let errors = err.field_errors().cloned();
        let app_err = AppError::from(err);

        Self {
            outcome: Outcome::Error,
            message,
            payload: Value::Null,
            errors,
            code: Some(app_err.error_code()),
            status: app_err.status_code(),
        }
    }

    /// Error response for a request turned away before any handler ran.
    #[must_use]
    pub fn rejected(err: &AppError) -> Self {
        Self {
            outcome: Outcome::Error,
            message: err.to_string(),
            payload: Value::Null,
            errors: None,
            code: Some(err.error_code()),
            status: err.status_code(),
        }
    }

    /// Listing of active accounts.
    #[must_use]
    pub fn listed(listing: AccountListing) -> Self {
        let message = format!("Found {} accounts", listing.summary.account_count);
        Self::success(message, listing)
    }

    /// A single account.
    #[must_use]
    pub fn viewed(account: &Account) -> Self {
        Self::success(format!("Account {}", account.account_number), account)
    }

    /// A create/edit form.
    #[must_use]
    pub fn prepared(prepared: &EditAccount) -> Self {
        let message = if prepared.editing {
            "Editing account"
        } else {
            "New account"
        };
        Self::success(message, prepared)
    }

    /// A saved account. Newly created accounts report status 201.
    #[must_use]
    pub fn saved(saved: &SavedAccount) -> Self {
        let message = format!("Account {} saved successfully", saved.account.account_number);
        let mut response = Self::success(message, saved);
        if saved.created {
            response.status = 201;
        }
        response
    }

    /// A deactivated account.
    #[must_use]
    pub fn deleted(id: AccountId) -> Self {
        Self::success("Account deleted successfully", serde_json::json!({ "id": id }))
    }

    /// A completed deposit or withdrawal.
    #[must_use]
    pub fn transacted(receipt: &TransactionReceipt) -> Self {
        let label = match receipt.transaction_type {
            TransactionType::Deposit => "Deposit",
            TransactionType::Withdraw => "Withdrawal",
        };
        Self::success(
            format!("{label} of {} completed successfully", receipt.amount),
            receipt,
        )
    }

    /// `true` for a success outcome.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.outcome == Outcome::Success
    }
}

impl<S: AccountStore> AccountHandlers<S> {
    /// Runs a named operation and folds the result into a [`Response`].
    ///
    /// `view` uses `id` when present and falls back to `accountNumber`.
    /// `edit`, `view` and `delete` read the id from `id`.
    pub async fn dispatch(&self, operation: &str, params: &Params) -> Response {
        match self.run(operation, params).await {
            Ok(response) => response,
            Err(err) => Response::failure(err),
        }
    }

    async fn run(&self, operation: &str, params: &Params) -> HandlerResult<Response> {
        let id = params.get("id").map(String::as_str);

        let response = match operation.parse::<Operation>()? {
            Operation::List => Response::listed(self.list().await?),
            Operation::View => {
                let account = match (id, params.get("accountNumber")) {
                    (None, Some(number)) => self.view_by_number(Some(number.as_str())).await?,
                    _ => self.view(id).await?,
                };
                Response::viewed(&account)
            }
            Operation::Edit => Response::prepared(&self.edit_prepare(id).await?),
            Operation::Save => {
                Response::saved(&self.save(&AccountForm::from_params(params)).await?)
            }
            Operation::Delete => Response::deleted(self.delete(id).await?),
            Operation::Transaction => {
                Response::transacted(&self.transact(&TransactionForm::from_params(params)).await?)
            }
        };

        Ok(response)
    }
}
