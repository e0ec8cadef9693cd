//! Ledger error types.
//!
//! Every failure a handler can report is a `LedgerError`. Store failures are
//! converted on the way in, so no low-level error crosses the handler
//! boundary.

use rust_decimal::Decimal;
use teller_shared::AppError;
use teller_shared::types::{AccountId, InvalidAccountId};
use thiserror::Error;

use super::form::FieldErrors;
use super::store::StoreError;

/// Result type returned by request handlers.
pub type HandlerResult<T> = Result<T, LedgerError>;

/// Errors that can occur during ledger operations.
#[derive(Debug, Error)]
pub enum LedgerError {
    // ========== Input Errors ==========
    /// One or more form fields failed validation.
    #[error("Validation failed: {0}")]
    Validation(FieldErrors),

    /// Request id parameter was missing or not numeric.
    #[error("{0}")]
    InvalidId(#[from] InvalidAccountId),

    /// Transaction type was neither DEPOSIT nor WITHDRAW.
    #[error("Invalid transaction type: '{0}'")]
    UnknownTransactionType(String),

    // ========== Account Errors ==========
    /// No account with this id.
    #[error("Account not found with ID: {0}")]
    AccountNotFound(AccountId),

    /// No account with this account number.
    #[error("Account not found with number: {0}")]
    AccountNumberNotFound(String),

    /// Withdrawal declined because the balance is too low.
    #[error("Insufficient funds for withdrawal of {requested} from account {account_id}")]
    InsufficientFunds {
        /// Account the withdrawal targeted.
        account_id: AccountId,
        /// Amount requested.
        requested: Decimal,
    },

    /// Account number is already taken.
    #[error("Account number '{0}' already exists")]
    DuplicateAccountNumber(String),

    // ========== Storage Errors ==========
    /// Underlying store failure.
    #[error("Storage failure: {0}")]
    Persistence(String),
}

impl LedgerError {
    /// Field errors carried by a validation failure.
    #[must_use]
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            Self::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}

impl From<FieldErrors> for LedgerError {
    fn from(errors: FieldErrors) -> Self {
        Self::Validation(errors)
    }
}

impl From<StoreError> for LedgerError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => Self::AccountNotFound(id),
            StoreError::DuplicateAccountNumber(number) => Self::DuplicateAccountNumber(number),
            StoreError::Persistence(msg) => Self::Persistence(msg),
        }
    }
}

impl From<LedgerError> for AppError {
    fn from(err: LedgerError) -> Self {
        let message = err.to_string();
        match err {
            LedgerError::Validation(_)
            | LedgerError::InvalidId(_)
            | LedgerError::UnknownTransactionType(_) => Self::Validation(message),
            LedgerError::AccountNotFound(_) | LedgerError::AccountNumberNotFound(_) => {
                Self::NotFound(message)
            }
            LedgerError::InsufficientFunds { .. } => Self::InsufficientFunds(message),
            LedgerError::DuplicateAccountNumber(_) => Self::DuplicateAccountNumber(message),
            LedgerError::Persistence(_) => Self::Database(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_store_error_conversion() {
        assert!(matches!(
            LedgerError::from(StoreError::NotFound(AccountId::new(9))),
            LedgerError::AccountNotFound(id) if id == AccountId::new(9)
        ));
        assert!(matches!(
            LedgerError::from(StoreError::DuplicateAccountNumber("ACC-1".into())),
            LedgerError::DuplicateAccountNumber(_)
        ));
        assert!(matches!(
            LedgerError::from(StoreError::Persistence("boom".into())),
            LedgerError::Persistence(_)
        ));
    }

    #[test]
    fn test_app_error_mapping() {
        let mut fields = FieldErrors::new();
        fields.add("holderName", "Holder name is required");

        assert_eq!(AppError::from(LedgerError::Validation(fields)).status_code(), 400);
        assert_eq!(
            AppError::from(LedgerError::InvalidId(InvalidAccountId::Missing)).status_code(),
            400
        );
        assert_eq!(
            AppError::from(LedgerError::AccountNotFound(AccountId::new(1))).status_code(),
            404
        );
        assert_eq!(
            AppError::from(LedgerError::InsufficientFunds {
                account_id: AccountId::new(1),
                requested: dec!(75.00),
            })
            .status_code(),
            422
        );
        assert_eq!(
            AppError::from(LedgerError::DuplicateAccountNumber("A".into())).status_code(),
            409
        );
        assert_eq!(
            AppError::from(LedgerError::Persistence("down".into())).status_code(),
            500
        );
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            LedgerError::AccountNotFound(AccountId::new(42)).to_string(),
            "Account not found with ID: 42"
        );
        assert_eq!(
            LedgerError::InvalidId(InvalidAccountId::Malformed("abc".into())).to_string(),
            "Invalid account ID format: 'abc'"
        );
        assert_eq!(
            LedgerError::UnknownTransactionType("TRANSFER".into()).to_string(),
            "Invalid transaction type: 'TRANSFER'"
        );
    }
}
