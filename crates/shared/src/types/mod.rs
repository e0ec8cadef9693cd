//! Common types used across the application.

pub mod amount;
pub mod id;

pub use amount::{AmountError, MONEY_SCALE, parse_amount, to_exact_money};
pub use id::{AccountId, InvalidAccountId};
