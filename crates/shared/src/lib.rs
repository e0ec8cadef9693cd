//! Shared types, errors, and configuration for Teller.
//!
//! This crate provides common types used across all other crates:
//! - Typed account identifiers
//! - Decimal amount parsing (never floating point)
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::{AccountNumberStrategy, AppConfig, DatabaseConfig, LedgerConfig, ServerConfig};
pub use error::{AppError, AppResult};
