//! HTTP API layer with Axum routes.
//!
//! This crate provides:
//! - REST routes over the account handlers
//! - The generic `/dispatch/{operation}` endpoint
//! - Health check

pub mod routes;

use axum::Router;
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use teller_core::{AccountHandlers, AccountNumberGenerator};
use teller_db::AccountRepository;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: Arc<DatabaseConnection>,
    /// Account handlers over the database repository.
    pub accounts: AccountHandlers<AccountRepository>,
}

impl AppState {
    /// Builds the state around a connection pool.
    #[must_use]
    pub fn new(db: DatabaseConnection, numbers: AccountNumberGenerator) -> Self {
        let repository = AccountRepository::new(db.clone());
        Self {
            db: Arc::new(db),
            accounts: AccountHandlers::new(Arc::new(repository), numbers),
        }
    }
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
