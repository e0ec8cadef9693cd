//! Typed account identifier.
//!
//! Account ids are generated by the database (`BIGSERIAL`), so the wrapper
//! holds an `i64` rather than a UUID. Wrapping it keeps raw integers and
//! account numbers from being mixed up at call sites.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unique identifier for an account row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(pub i64);

/// Returned when request text cannot be read as an account id.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidAccountId {
    /// No id was supplied, or only whitespace.
    #[error("Account ID is required")]
    Missing,

    /// The text is not an integer.
    #[error("Invalid account ID format: '{0}'")]
    Malformed(String),
}

impl AccountId {
    /// Creates an ID from a raw database key.
    #[must_use]
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Returns the inner key.
    #[must_use]
    pub const fn into_inner(self) -> i64 {
        self.0
    }

    /// Parses an optional request parameter.
    ///
    /// Surrounding whitespace is ignored; blank input counts as missing.
    pub fn parse_param(raw: Option<&str>) -> Result<Self, InvalidAccountId> {
        match raw.map(str::trim) {
            None | Some("") => Err(InvalidAccountId::Missing),
            Some(text) => text.parse(),
        }
    }
}

impl From<i64> for AccountId {
    fn from(raw: i64) -> Self {
        Self(raw)
    }
}

impl std::fmt::Display for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for AccountId {
    type Err = InvalidAccountId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(InvalidAccountId::Missing);
        }
        trimmed
            .parse::<i64>()
            .map(Self)
            .map_err(|_| InvalidAccountId::Malformed(trimmed.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("42", 42)]
    #[case(" 7 ", 7)]
    #[case("1000000", 1_000_000)]
    fn test_parse_valid_ids(#[case] input: &str, #[case] expected: i64) {
        assert_eq!(input.parse::<AccountId>().unwrap(), AccountId(expected));
    }

    #[rstest]
    #[case("abc")]
    #[case("12a")]
    #[case("1.5")]
    fn test_parse_malformed_ids(#[case] input: &str) {
        assert!(matches!(
            input.parse::<AccountId>(),
            Err(InvalidAccountId::Malformed(_))
        ));
    }

    #[test]
    fn test_parse_param_missing() {
        assert_eq!(
            AccountId::parse_param(None),
            Err(InvalidAccountId::Missing)
        );
        assert_eq!(
            AccountId::parse_param(Some("   ")),
            Err(InvalidAccountId::Missing)
        );
    }

    #[test]
    fn test_display_and_serde() {
        let id = AccountId::new(15);
        assert_eq!(id.to_string(), "15");
        assert_eq!(id.into_inner(), 15);
        assert_eq!(AccountId::from(15), id);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(InvalidAccountId::Missing.to_string(), "Account ID is required");
        assert_eq!(
            InvalidAccountId::Malformed("abc".into()).to_string(),
            "Invalid account ID format: 'abc'"
        );
    }
}
