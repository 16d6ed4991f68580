//! Database configuration and connection pool initialization.
//!
//! The connection string is read from the `DATABASE_URL` environment variable.
//! Schema migrations under `migrations/` are applied at startup.

use sqlx::PgPool;
use std::env;

/// Initializes the PostgreSQL connection pool and runs pending migrations.
///
/// The returned pool is cheaply cloneable and is the store handle passed
/// into every service. Panics if `DATABASE_URL` is unset or the database
/// is unreachable; this runs once during process startup.
pub async fn init_db_pool() -> PgPool {
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let pool = PgPool::connect(&database_url)
        .await
        .expect("Failed to connect to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run database migrations");

    pool
}
