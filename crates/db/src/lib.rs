//! Persistence layer: connection pool, migrations, models and repositories.
//!
//! Repositories take `&mut PgConnection` so that a handler can run every
//! statement of one request inside a single transaction it owns.

use std::collections::HashSet;

use serde::Serialize;
use sqlx::migrate::Migrator;
use sqlx::postgres::PgPoolOptions;
use sqlx::FromRow;

pub mod models;
pub mod repositories;

pub type DbPool = sqlx::PgPool;

static MIGRATOR: Migrator = sqlx::migrate!("../../db/migrations");

/// Row count of every table the service owns.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct TableCounts {
    pub campers: i64,
    pub activities: i64,
    pub signups: i64,
    pub episodes: i64,
    pub guests: i64,
    pub appearances: i64,
}

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// Round-trip a trivial query to confirm the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply any pending migrations from `db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    MIGRATOR.run(pool).await
}

/// Number of embedded migrations not yet successfully applied.
pub async fn pending_migrations(pool: &DbPool) -> Result<usize, sqlx::Error> {
    let applied: HashSet<i64> =
        sqlx::query_scalar("SELECT version FROM _sqlx_migrations WHERE success")
            .fetch_all(pool)
            .await?
            .into_iter()
            .collect();

    Ok(MIGRATOR
        .iter()
        .filter(|m| m.migration_type.is_up_migration() && !applied.contains(&m.version))
        .count())
}

/// Count the rows of all six registry tables in one round trip.
pub async fn table_counts(pool: &DbPool) -> Result<TableCounts, sqlx::Error> {
    sqlx::query_as::<_, TableCounts>(
        "SELECT (SELECT COUNT(*) FROM campers) AS campers,
                (SELECT COUNT(*) FROM activities) AS activities,
                (SELECT COUNT(*) FROM signups) AS signups,
                (SELECT COUNT(*) FROM episodes) AS episodes,
                (SELECT COUNT(*) FROM guests) AS guests,
                (SELECT COUNT(*) FROM appearances) AS appearances",
    )
    .fetch_one(pool)
    .await
}

/// Whether the error is a PostgreSQL foreign key violation (SQLSTATE 23503).
pub fn is_foreign_key_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation())
}
