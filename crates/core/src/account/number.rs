//! Account number generation for the new-account path.

use rand::Rng;
use teller_shared::AccountNumberStrategy;
use uuid::Uuid;

/// Issues account numbers according to the configured strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AccountNumberGenerator {
    strategy: AccountNumberStrategy,
}

impl AccountNumberGenerator {
    /// Creates a generator for the given strategy.
    #[must_use]
    pub const fn new(strategy: AccountNumberStrategy) -> Self {
        Self { strategy }
    }

    /// The active strategy.
    #[must_use]
    pub const fn strategy(&self) -> AccountNumberStrategy {
        self.strategy
    }

    /// Produces a fresh account number.
    ///
    /// Numbers are not checked against the store; a collision surfaces as a
    /// duplicate error on insert.
    #[must_use]
    pub fn generate(&self) -> String {
        match self.strategy {
            AccountNumberStrategy::Unique => unique_number(),
            AccountNumberStrategy::Legacy => legacy_number(
                chrono::Utc::now().timestamp_millis(),
                rand::rng().random_range(0..1000),
            ),
        }
    }
}

/// `ACC-` followed by the 32 hex digits of a UUID v7.
fn unique_number() -> String {
    format!("ACC-{}", Uuid::now_v7().simple()).to_ascii_uppercase()
}

/// `ACC-<millis mod 100000, 5 digits>-<suffix>`.
///
/// Only 10^8 distinct values exist, so two accounts created close together
/// can receive the same number.
fn legacy_number(now_millis: i64, suffix: u32) -> String {
    format!("ACC-{:05}-{suffix}", now_millis.rem_euclid(100_000))
}
