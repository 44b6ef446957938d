//! Postgres pool setup for the direct database backend.
//!
//! Only used when `DATABASE_URL` is configured. The hosted REST backend
//! manages its own schema.

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

/// Connect to Postgres and apply the bundled migrations.
///
/// # Errors
///
/// Returns an error if the connection or migrations fail.
pub async fn init_pool(database_url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await?;

    sqlx::migrate!("src/db/migrations").run(&pool).await?;

    Ok(pool)
}
