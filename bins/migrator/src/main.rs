//! Database migration runner for Chaff.
//!
//! Usage:
//!   migrator up      - Run all pending migrations
//!   migrator down    - Rollback last migration
//!   migrator status  - Show migration status
//!
//! The connection string is read from `DATABASE_URL`.

use sea_orm_migration::prelude::*;
use chaff_db::migration::Migrator;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // run_cli sets up its own tracing
    cli::run_cli(Migrator).await;
}
