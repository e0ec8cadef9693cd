//! Account routes.
//!
//! Path ids arrive as text so that a malformed id is reported by the handler
//! like any other bad input, not as a routing rejection.

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    response::Response,
    routing::{get, post},
};
use serde::Deserialize;
use teller_core::{AccountForm, TransactionForm};

use super::{failure, rejected, respond};
use crate::AppState;

/// Creates the account routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/accounts", get(list_accounts).post(create_account))
        .route("/accounts/new", get(new_account_form))
        .route("/accounts/number/{account_number}", get(get_account_by_number))
        .route(
            "/accounts/{id}",
            get(get_account).put(update_account).delete(delete_account),
        )
        .route("/accounts/{id}/edit", get(edit_account_form))
        .route("/accounts/{id}/transactions", post(create_transaction))
}

/// Request body for a deposit or withdrawal.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRequest {
    /// Amount text.
    pub amount: Option<String>,
    /// `DEPOSIT` or `WITHDRAW`.
    pub transaction_type: Option<String>,
}

/// GET `/accounts` - Active accounts with totals.
async fn list_accounts(State(state): State<AppState>) -> Response {
    match state.accounts.list().await {
        Ok(listing) => respond(teller_core::Response::listed(listing)),
        Err(e) => failure(e),
    }
}

/// GET `/accounts/new` - Blank form with a fresh account number.
async fn new_account_form(State(state): State<AppState>) -> Response {
    match state.accounts.edit_prepare(None).await {
        Ok(prepared) => respond(teller_core::Response::prepared(&prepared)),
        Err(e) => failure(e),
    }
}

/// GET `/accounts/{id}`
async fn get_account(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match state.accounts.view(Some(id.as_str())).await {
        Ok(account) => respond(teller_core::Response::viewed(&account)),
        Err(e) => failure(e),
    }
}

/// GET `/accounts/number/{account_number}`
async fn get_account_by_number(
    State(state): State<AppState>,
    Path(account_number): Path<String>,
) -> Response {
    match state.accounts.view_by_number(Some(account_number.as_str())).await {
        Ok(account) => respond(teller_core::Response::viewed(&account)),
        Err(e) => failure(e),
    }
}

/// GET `/accounts/{id}/edit` - Form pre-filled from the stored account.
async fn edit_account_form(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match state.accounts.edit_prepare(Some(id.as_str())).await {
        Ok(prepared) => respond(teller_core::Response::prepared(&prepared)),
        Err(e) => failure(e),
    }
}

/// POST `/accounts` - Create, or update when the body carries `id`.
async fn create_account(
    State(state): State<AppState>,
    body: Result<Json<AccountForm>, JsonRejection>,
) -> Response {
    let Json(form) = match body {
        Ok(json) => json,
        Err(rejection) => return rejected(&rejection),
    };

    match state.accounts.save(&form).await {
        Ok(saved) => respond(teller_core::Response::saved(&saved)),
        Err(e) => failure(e),
    }
}

/// PUT `/accounts/{id}`
async fn update_account(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<AccountForm>, JsonRejection>,
) -> Response {
    let Json(form) = match body {
        Ok(json) => json,
        Err(rejection) => return rejected(&rejection),
    };
    let form = AccountForm {
        id: Some(id),
        ..form
    };

    match state.accounts.save(&form).await {
        Ok(saved) => respond(teller_core::Response::saved(&saved)),
        Err(e) => failure(e),
    }
}

/// DELETE `/accounts/{id}` - Soft delete.
async fn delete_account(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match state.accounts.delete(Some(id.as_str())).await {
        Ok(id) => respond(teller_core::Response::deleted(id)),
        Err(e) => failure(e),
    }
}

/// POST `/accounts/{id}/transactions`
async fn create_transaction(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<TransactionRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match body {
        Ok(json) => json,
        Err(rejection) => return rejected(&rejection),
    };
    let form = TransactionForm {
        account_id: Some(id),
        amount: request.amount,
        transaction_type: request.transaction_type,
    };

    match state.accounts.transact(&form).await {
        Ok(receipt) => respond(teller_core::Response::transacted(&receipt)),
        Err(e) => failure(e),
    }
}
