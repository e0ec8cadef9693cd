//! Account repository backed by the `accounts` table.
//!
//! Balance changes are single conditional `UPDATE` statements so that two
//! concurrent withdrawals can never both pass the funds check.

use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ActiveValue::Unchanged, ColumnTrait, DatabaseConnection,
    DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, SqlErr,
};
use tracing::debug;

use crate::entities::accounts;
use teller_core::account::{Account, AccountStore, AccountType, NewAccount, StoreError};
use teller_shared::types::AccountId;

/// Account repository implementation.
#[derive(Debug, Clone)]
pub struct AccountRepository {
    db: DatabaseConnection,
}

impl AccountRepository {
    /// Creates a new account repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// The underlying connection pool.
    #[must_use]
    pub const fn connection(&self) -> &DatabaseConnection {
        &self.db
    }

    async fn exists(&self, id: AccountId) -> Result<bool, StoreError> {
        let count = accounts::Entity::find_by_id(id.into_inner())
            .count(&self.db)
            .await
            .map_err(persistence)?;
        Ok(count > 0)
    }
}

impl AccountStore for AccountRepository {
    async fn find_all(&self) -> Result<Vec<Account>, StoreError> {
        let models = accounts::Entity::find()
            .filter(accounts::Column::Active.eq(true))
            .order_by_asc(accounts::Column::Id)
            .all(&self.db)
            .await
            .map_err(persistence)?;

        Ok(models.into_iter().map(to_domain).collect())
    }

    async fn find_by_id(&self, id: AccountId) -> Result<Option<Account>, StoreError> {
        let model = accounts::Entity::find_by_id(id.into_inner())
            .one(&self.db)
            .await
            .map_err(persistence)?;

        Ok(model.map(to_domain))
    }

    async fn find_by_account_number(
        &self,
        account_number: &str,
    ) -> Result<Option<Account>, StoreError> {
        let model = accounts::Entity::find()
            .filter(accounts::Column::AccountNumber.eq(account_number))
            .one(&self.db)
            .await
            .map_err(persistence)?;

        Ok(model.map(to_domain))
    }

    async fn create(&self, account: NewAccount) -> Result<Account, StoreError> {
        let account_number = account.account_number.clone();
        let active_model = accounts::ActiveModel {
            account_number: Set(account.account_number),
            holder_name: Set(account.holder_name),
            account_type: Set(account.account_type.to_string()),
            balance: Set(account.balance),
            email: Set(account.email),
            phone: Set(account.phone),
            created_date: Set(Utc::now().into()),
            active: Set(true),
            ..Default::default()
        };

        let model = active_model
            .insert(&self.db)
            .await
            .map_err(|e| match e.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => {
                    StoreError::DuplicateAccountNumber(account_number)
                }
                _ => persistence(e),
            })?;

        Ok(to_domain(model))
    }

    async fn update(&self, account: &Account) -> Result<Account, StoreError> {
        let active_model = accounts::ActiveModel {
            id: Unchanged(account.id.into_inner()),
            holder_name: Set(account.holder_name.clone()),
            account_type: Set(account.account_type.to_string()),
            balance: Set(account.balance),
            email: Set(account.email.clone()),
            phone: Set(account.phone.clone()),
            ..Default::default()
        };

        let model = active_model.update(&self.db).await.map_err(|e| match e {
            DbErr::RecordNotUpdated => StoreError::NotFound(account.id),
            other => persistence(other),
        })?;

        Ok(to_domain(model))
    }

    async fn delete(&self, id: AccountId) -> Result<(), StoreError> {
        let result = accounts::Entity::update_many()
            .col_expr(accounts::Column::Active, Expr::value(false))
            .filter(accounts::Column::Id.eq(id.into_inner()))
            .exec(&self.db)
            .await
            .map_err(persistence)?;

        if result.rows_affected == 0 {
            return Err(StoreError::NotFound(id));
        }
        Ok(())
    }

    async fn deposit(&self, id: AccountId, amount: Decimal) -> Result<(), StoreError> {
        let result = accounts::Entity::update_many()
            .col_expr(
                accounts::Column::Balance,
                Expr::col(accounts::Column::Balance).add(amount),
            )
            .filter(accounts::Column::Id.eq(id.into_inner()))
            .exec(&self.db)
            .await
            .map_err(persistence)?;

        if result.rows_affected == 0 {
            return Err(StoreError::NotFound(id));
        }
        Ok(())
    }

    async fn withdraw(&self, id: AccountId, amount: Decimal) -> Result<bool, StoreError> {
        // The funds check and the debit are one statement.
        let result = accounts::Entity::update_many()
            .col_expr(
                accounts::Column::Balance,
                Expr::col(accounts::Column::Balance).sub(amount),
            )
            .filter(accounts::Column::Id.eq(id.into_inner()))
            .filter(accounts::Column::Balance.gte(amount))
            .exec(&self.db)
            .await
            .map_err(persistence)?;

        if result.rows_affected > 0 {
            return Ok(true);
        }

        if self.exists(id).await? {
            debug!(
                account_id = %id,
                amount = %amount,
                "Withdrawal matched no row with sufficient funds"
            );
            Ok(false)
        } else {
            Err(StoreError::NotFound(id))
        }
    }
}

fn persistence(err: DbErr) -> StoreError {
    StoreError::persistence(err.to_string())
}

/// Convert database model to domain type.
fn to_domain(model: accounts::Model) -> Account {
    Account {
        id: AccountId::new(model.id),
        account_number: model.account_number,
        holder_name: model.holder_name,
        account_type: AccountType::parse(&model.account_type),
        balance: model.balance,
        email: model.email,
        phone: model.phone,
        created_date: model.created_date.with_timezone(&Utc),
        active: model.active,
    }
}
