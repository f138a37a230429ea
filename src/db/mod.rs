//! Database module
//!
//! This module handles database connections, migrations, predicate
//! construction, and repositories.

pub mod connection;
pub mod predicate;
pub mod repositories;

use sqlx::PgPool;

pub use connection::*;
pub use predicate::{Predicate, Sort};

/// Run database migrations
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
