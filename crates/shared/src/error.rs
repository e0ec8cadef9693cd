//! HTTP-facing error taxonomy for the ledger.
//!
//! Domain errors are folded into an `AppError` at the edge; each variant
//! fixes the status code and the machine-readable code a client sees.

use thiserror::Error;

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// Ledger errors as reported to API clients.
#[derive(Debug, Error)]
pub enum AppError {
    /// No account matched the request.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Form fields or parameters failed validation.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The request body could not be read as a form.
    #[error("Malformed request: {0}")]
    MalformedRequest(String),

    /// A withdrawal was declined; the balance is unchanged.
    #[error("Insufficient funds: {0}")]
    InsufficientFunds(String),

    /// The account number is already taken.
    #[error("Duplicate account number: {0}")]
    DuplicateAccountNumber(String),

    /// The store failed.
    #[error("Database error: {0}")]
    Database(String),
}

impl AppError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::NotFound(_) => 404,
            Self::Validation(_) | Self::MalformedRequest(_) => 400,
            Self::InsufficientFunds(_) => 422,
            Self::DuplicateAccountNumber(_) => 409,
            Self::Database(_) => 500,
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "NOT_FOUND",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::MalformedRequest(_) => "MALFORMED_REQUEST",
            Self::InsufficientFunds(_) => "INSUFFICIENT_FUNDS",
            Self::DuplicateAccountNumber(_) => "DUPLICATE_ACCOUNT_NUMBER",
            Self::Database(_) => "DATABASE_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(AppError::NotFound("ACC-1".into()), 404, "NOT_FOUND")]
    #[case(AppError::Validation("amount".into()), 400, "VALIDATION_ERROR")]
    #[case(AppError::MalformedRequest("id".into()), 400, "MALFORMED_REQUEST")]
    #[case(AppError::InsufficientFunds("75.00".into()), 422, "INSUFFICIENT_FUNDS")]
    #[case(AppError::DuplicateAccountNumber("ACC-1".into()), 409, "DUPLICATE_ACCOUNT_NUMBER")]
    #[case(AppError::Database("timeout".into()), 500, "DATABASE_ERROR")]
    fn test_status_and_code(#[case] err: AppError, #[case] status: u16, #[case] code: &str) {
        assert_eq!(err.status_code(), status);
        assert_eq!(err.error_code(), code);
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            AppError::InsufficientFunds("withdrawal of 75.00".into()).to_string(),
            "Insufficient funds: withdrawal of 75.00"
        );
        assert_eq!(
            AppError::MalformedRequest("expected a string".into()).to_string(),
            "Malformed request: expected a string"
        );
    }
}
