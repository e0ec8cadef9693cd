//! Named-operation dispatch endpoint.
//!
//! `POST /dispatch/{operation}` takes the parameters as a flat JSON object of
//! strings; `GET` takes them from the query string. A body that is not such an
//! object gets the usual error envelope.

use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::JsonRejection},
    response::Response,
    routing::get,
};
use teller_core::Params;
use tracing::debug;

use super::{rejected, respond};
use crate::AppState;

/// Creates the dispatch routes.
pub fn routes() -> Router<AppState> {
    Router::new().route(
        "/dispatch/{operation}",
        get(dispatch_query).post(dispatch_body),
    )
}

async fn dispatch_query(
    State(state): State<AppState>,
    Path(operation): Path<String>,
    Query(params): Query<Params>,
) -> Response {
    run(&state, &operation, &params).await
}

async fn dispatch_body(
    State(state): State<AppState>,
    Path(operation): Path<String>,
    body: Result<Json<Params>, JsonRejection>,
) -> Response {
    match body {
        Ok(Json(params)) => run(&state, &operation, &params).await,
        Err(rejection) => rejected(&rejection),
    }
}

async fn run(state: &AppState, operation: &str, params: &Params) -> Response {
    debug!(operation, params = params.len(), "Dispatching operation");
    respond(state.accounts.dispatch(operation, params).await)
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;

    use crate::routes::test_support::{offline_app, send};

    #[tokio::test]
    async fn test_unknown_operation() {
        let (status, body) = send(
            offline_app(),
            "POST",
            "/api/v1/dispatch/transfer",
            Some(json!({})),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["outcome"], "error");
        assert_eq!(body["errors"]["operation"], "Unknown operation: 'transfer'");
    }

    #[tokio::test]
    async fn test_edit_without_id_via_query() {
        let (status, body) = send(offline_app(), "GET", "/api/v1/dispatch/edit", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "New account");
    }

    #[tokio::test]
    async fn test_view_with_bad_id() {
        let (status, body) = send(
            offline_app(),
            "GET",
            "/api/v1/dispatch/view?id=x9",
            None,
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Invalid account ID format: 'x9'");
    }

    #[tokio::test]
    async fn test_numeric_param_gets_error_envelope() {
        let (status, body) = send(
            offline_app(),
            "POST",
            "/api/v1/dispatch/view",
            Some(json!({ "id": 5 })),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["outcome"], "error");
        assert_eq!(body["code"], "MALFORMED_REQUEST");
    }

    #[tokio::test]
    async fn test_save_validation_via_body() {
        let (status, body) = send(
            offline_app(),
            "POST",
            "/api/v1/dispatch/save",
            Some(json!({ "holderName": "Maria Garcia", "email": "maria.garcia" })),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["errors"]["accountType"], "Account type is required");
        assert_eq!(body["errors"]["email"], "Email address is invalid");
    }
}
