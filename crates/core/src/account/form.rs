//! Request-scoped input forms.
//!
//! Forms hold raw request text exactly as submitted. Handlers never read the
//! raw fields directly; they call `validate`, which parses every field and
//! either returns a typed value or the full set of field errors at once.

use std::collections::{BTreeMap, HashMap};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use teller_shared::types::{AccountId, AmountError, MONEY_SCALE, parse_amount, to_exact_money};

use super::types::{Account, AccountType};

/// Field name to message map collected during validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    /// Creates an empty error set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a message for a field. The first message per field wins.
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_insert_with(|| message.into());
    }

    /// Returns the message recorded for a field.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    /// Returns true if the field has an error.
    #[must_use]
    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// Returns true if no errors were recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of fields with errors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterates over `(field, message)` pairs in field order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl std::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

/// Returns the trimmed text, or `None` when absent or blank.
fn non_blank(value: Option<&String>) -> Option<&str> {
    value.map(|v| v.trim()).filter(|v| !v.is_empty())
}

fn param(params: &HashMap<String, String>, key: &str) -> Option<String> {
    params.get(key).cloned()
}

/// Raw account fields as submitted by a create or edit request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountForm {
    /// Present when editing an existing account.
    pub id: Option<String>,
    /// Number issued on the new-account path.
    pub account_number: Option<String>,
    /// Holder name, required.
    pub holder_name: Option<String>,
    /// Account type, required.
    pub account_type: Option<String>,
    /// Balance text, defaults to zero when blank.
    pub balance: Option<String>,
    /// Optional email.
    pub email: Option<String>,
    /// Optional phone.
    pub phone: Option<String>,
}

/// Account input that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedAccount {
    /// Target account for an update, `None` for a create.
    pub id: Option<AccountId>,
    /// Number issued on the new-account path.
    pub account_number: Option<String>,
    /// Trimmed holder name.
    pub holder_name: String,
    /// Parsed account type.
    pub account_type: AccountType,
    /// Balance at money scale.
    pub balance: Decimal,
    /// Email, `None` when blank.
    pub email: Option<String>,
    /// Phone, `None` when blank.
    pub phone: Option<String>,
}

impl AccountForm {
    /// Form defaults for a brand-new account.
    #[must_use]
    pub fn for_new_account(account_number: String) -> Self {
        Self {
            account_number: Some(account_number),
            account_type: Some(AccountType::Savings.to_string()),
            balance: Some("0.00".to_string()),
            ..Self::default()
        }
    }

    /// Pre-fills the form from a stored account.
    #[must_use]
    pub fn from_account(account: &Account) -> Self {
        Self {
            id: Some(account.id.to_string()),
            account_number: Some(account.account_number.clone()),
            holder_name: Some(account.holder_name.clone()),
            account_type: Some(account.account_type.to_string()),
            balance: Some(account.balance.to_string()),
            email: account.email.clone(),
            phone: account.phone.clone(),
        }
    }

    /// Captures the form from a request parameter map.
    #[must_use]
    pub fn from_params(params: &HashMap<String, String>) -> Self {
        Self {
            id: param(params, "id"),
            account_number: param(params, "accountNumber"),
            holder_name: param(params, "holderName"),
            account_type: param(params, "accountType"),
            balance: param(params, "balance"),
            email: param(params, "email"),
            phone: param(params, "phone"),
        }
    }

    /// Returns true when the form targets an existing account.
    #[must_use]
    pub fn is_update(&self) -> bool {
        non_blank(self.id.as_ref()).is_some()
    }

    /// Parses and validates every field.
    ///
    /// # Errors
    ///
    /// Returns every field that failed, keyed by its form name.
    pub fn validate(&self) -> Result<ValidatedAccount, FieldErrors> {
        let mut errors = FieldErrors::new();

        let id = match non_blank(self.id.as_ref()) {
            None => None,
            Some(text) => match text.parse::<AccountId>() {
                Ok(id) => Some(id),
                Err(e) => {
                    errors.add("id", e.to_string());
                    None
                }
            },
        };

        let holder_name = non_blank(self.holder_name.as_ref());
        if holder_name.is_none() {
            errors.add("holderName", "Holder name is required");
        }

        let account_type = non_blank(self.account_type.as_ref());
        if account_type.is_none() {
            errors.add("accountType", "Account type is required");
        }

        let balance = match non_blank(self.balance.as_ref()) {
            None => Decimal::new(0, MONEY_SCALE),
            Some(text) => match parse_amount(text).and_then(to_exact_money) {
                Ok(value) if value < Decimal::ZERO => {
                    errors.add("balance", "Balance cannot be negative");
                    Decimal::ZERO
                }
                Ok(value) => value,
                Err(AmountError::TooPrecise(_)) => {
                    errors.add("balance", "Balance cannot have more than 2 decimal places");
                    Decimal::ZERO
                }
                Err(_) => {
                    errors.add("balance", "Balance must be a valid decimal number");
                    Decimal::ZERO
                }
            },
        };

        let email = non_blank(self.email.as_ref());
        if let Some(email) = email
            && !email.contains('@')
        {
            errors.add("email", "Email address is invalid");
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(ValidatedAccount {
            id,
            account_number: non_blank(self.account_number.as_ref()).map(str::to_string),
            holder_name: holder_name.unwrap_or_default().to_string(),
            account_type: AccountType::parse(account_type.unwrap_or_default()),
            balance,
            email: email.map(str::to_string),
            phone: non_blank(self.phone.as_ref()).map(str::to_string),
        })
    }
}

/// Raw deposit or withdraw request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionForm {
    /// Target account id.
    pub account_id: Option<String>,
    /// Amount text.
    pub amount: Option<String>,
    /// `DEPOSIT` or `WITHDRAW`.
    pub transaction_type: Option<String>,
}

/// Transaction input that passed field validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatedTransaction {
    /// Target account.
    pub account_id: AccountId,
    /// Strictly positive amount at money scale.
    pub amount: Decimal,
}

impl TransactionForm {
    /// Captures the form from a request parameter map.
    #[must_use]
    pub fn from_params(params: &HashMap<String, String>) -> Self {
        Self {
            account_id: param(params, "accountId"),
            amount: param(params, "amount"),
            transaction_type: param(params, "transactionType"),
        }
    }

    /// Validates the account id and amount.
    ///
    /// The transaction type is checked by the caller, after field validation,
    /// so that an unknown type is reported on its own.
    ///
    /// # Errors
    ///
    /// Returns every field that failed, keyed by its form name.
    pub fn validate(&self) -> Result<ValidatedTransaction, FieldErrors> {
        let mut errors = FieldErrors::new();

        let account_id = match non_blank(self.account_id.as_ref()) {
            None => {
                errors.add("accountId", "Account ID is required");
                None
            }
            Some(text) => match text.parse::<AccountId>() {
                Ok(id) => Some(id),
                Err(e) => {
                    errors.add("accountId", e.to_string());
                    None
                }
            },
        };

        let amount = match parse_amount(self.amount.as_deref().unwrap_or_default())
            .and_then(to_exact_money)
        {
            Ok(value) if value > Decimal::ZERO => Some(value),
            Ok(_) => {
                errors.add("amount", "Amount must be greater than zero");
                None
            }
            Err(AmountError::Missing) => {
                errors.add("amount", "Amount is required");
                None
            }
            Err(AmountError::Invalid(_)) => {
                errors.add("amount", "Invalid amount format");
                None
            }
            Err(AmountError::TooPrecise(_)) => {
                errors.add("amount", "Amount cannot have more than 2 decimal places");
                None
            }
        };

        match (account_id, amount) {
            (Some(account_id), Some(amount)) if errors.is_empty() => {
                Ok(ValidatedTransaction { account_id, amount })
            }
            _ => Err(errors),
        }
    }
}
