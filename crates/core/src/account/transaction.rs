//! Deposit and withdraw rules.
//!
//! The balance of an account never goes negative. Stores enforce this with an
//! atomic conditional update; the in-memory store used by the tests applies the
//! same rule through `apply_transaction`.

use rust_decimal::Decimal;
use serde::Serialize;
#[cfg(test)]
use teller_shared::types::AccountId;

use super::error::LedgerError;
use super::types::Account;

/// Kind of balance mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionType {
    /// Adds funds.
    Deposit,
    /// Removes funds if the balance covers them.
    Withdraw,
}

impl TransactionType {
    /// Returns the request text form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Deposit => "DEPOSIT",
            Self::Withdraw => "WITHDRAW",
        }
    }
}

impl std::fmt::Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TransactionType {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "DEPOSIT" => Ok(Self::Deposit),
            "WITHDRAW" => Ok(Self::Withdraw),
            _ => Err(LedgerError::UnknownTransactionType(s.trim().to_string())),
        }
    }
}

/// Result of a completed deposit or withdrawal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionReceipt {
    /// What was done.
    pub transaction_type: TransactionType,
    /// Amount moved.
    pub amount: Decimal,
    /// Account state after the operation. `None` when the money moved but
    /// the account could not be re-read.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account: Option<Account>,
}

/// Computes the balance after a transaction.
///
/// Returns `InsufficientFunds` for a withdrawal larger than `balance`, in
/// which case the caller must leave the balance untouched.
#[cfg(test)]
pub(crate) fn apply_transaction(
    account_id: AccountId,
    balance: Decimal,
    kind: TransactionType,
    amount: Decimal,
) -> Result<Decimal, LedgerError> {
    match kind {
        TransactionType::Deposit => Ok(balance + amount),
        TransactionType::Withdraw if balance >= amount => Ok(balance - amount),
        TransactionType::Withdraw => Err(LedgerError::InsufficientFunds {
            account_id,
            requested: amount,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    const ID: AccountId = AccountId::new(1);

    #[rstest]
    #[case("DEPOSIT", TransactionType::Deposit)]
    #[case("withdraw", TransactionType::Withdraw)]
    #[case(" Deposit ", TransactionType::Deposit)]
    fn test_parse_transaction_type(#[case] input: &str, #[case] expected: TransactionType) {
        assert_eq!(input.parse::<TransactionType>().unwrap(), expected);
    }

    #[test]
    fn test_parse_unknown_transaction_type() {
        assert!(matches!(
            "TRANSFER".parse::<TransactionType>(),
            Err(LedgerError::UnknownTransactionType(t)) if t == "TRANSFER"
        ));
    }

    #[test]
    fn test_deposit_from_zero() {
        let balance = apply_transaction(ID, dec!(0.00), TransactionType::Deposit, dec!(100.00));
        assert_eq!(balance.unwrap(), dec!(100.00));
    }

    #[test]
    fn test_withdraw_exact_balance() {
        let balance = apply_transaction(ID, dec!(50.00), TransactionType::Withdraw, dec!(50.00));
        assert_eq!(balance.unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_withdraw_more_than_balance_declined() {
        let result = apply_transaction(ID, dec!(50.00), TransactionType::Withdraw, dec!(75.00));
        assert!(matches!(
            result,
            Err(LedgerError::InsufficientFunds { requested, .. }) if requested == dec!(75.00)
        ));
    }
}
