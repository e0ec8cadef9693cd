//! Decimal amount parsing.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! Request text goes straight to `rust_decimal::Decimal`.

use std::str::FromStr;

use rust_decimal::Decimal;
use thiserror::Error;

/// Number of fractional digits stored for balances.
pub const MONEY_SCALE: u32 = 2;

/// Errors produced while reading an amount from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmountError {
    /// Input was blank.
    #[error("amount is required")]
    Missing,

    /// Input is not a decimal number.
    #[error("'{0}' is not a valid decimal amount")]
    Invalid(String),

    /// Input has digits below one cent.
    #[error("'{0}' has more than {MONEY_SCALE} decimal places")]
    TooPrecise(String),
}

/// Parses request text as a decimal amount.
///
/// Accepts plain and scientific notation (`"100.00"`, `"1e2"`). The value is
/// returned as written; callers decide whether zero or negatives are allowed.
pub fn parse_amount(text: &str) -> Result<Decimal, AmountError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(AmountError::Missing);
    }

    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| AmountError::Invalid(trimmed.to_string()))
}

/// Converts an amount to money scale without dropping any digit.
///
/// Trailing zeros do not count (`1.500` is accepted as `1.50`). Anything
/// finer than a cent is rejected, since the stored column would round it.
pub fn to_exact_money(amount: Decimal) -> Result<Decimal, AmountError> {
    if amount.normalize().scale() > MONEY_SCALE {
        return Err(AmountError::TooPrecise(amount.to_string()));
    }
    Ok(to_money_scale(amount))
}

/// Rescales an amount to the two fractional digits the ledger stores.
#[must_use]
pub fn to_money_scale(amount: Decimal) -> Decimal {
    let mut scaled = amount.round_dp(MONEY_SCALE);
    scaled.rescale(MONEY_SCALE);
    scaled
}
