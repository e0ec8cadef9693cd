//! Database migration runner for Teller.
//!
//! Reads `DATABASE_URL`. Usage:
//!   migrator up      - Create the accounts table
//!   migrator down    - Drop it again
//!   migrator status  - Show applied migrations
//!   migrator fresh   - Drop everything and re-run

use sea_orm_migration::prelude::*;
use teller_db::migration::Migrator;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // The CLI sets up its own tracing subscriber.
    cli::run_cli(Migrator).await;
}
