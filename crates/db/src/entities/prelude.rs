//! `SeaORM` entity prelude.

pub use super::accounts::Entity as Accounts;
