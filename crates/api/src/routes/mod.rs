//! API route definitions.

use axum::{
    Json, Router,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use teller_core::LedgerError;
use teller_shared::AppError;
use tracing::warn;

use crate::AppState;

pub mod accounts;
pub mod dispatch;
pub mod health;

/// Creates the API router with all routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(accounts::routes())
        .merge(dispatch::routes())
}

/// Renders a handler response as JSON with its status code.
pub(crate) fn respond(response: teller_core::Response) -> Response {
    let status =
        StatusCode::from_u16(response.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(response)).into_response()
}

/// Renders a handler failure.
pub(crate) fn failure(err: LedgerError) -> Response {
    respond(teller_core::Response::failure(err))
}

/// Renders a JSON body that could not be read as a form.
pub(crate) fn rejected(rejection: &JsonRejection) -> Response {
    let reason = rejection.body_text();
    warn!(status = %rejection.status(), reason = %reason, "Rejected request body");
    respond(teller_core::Response::rejected(&AppError::MalformedRequest(reason)))
}
