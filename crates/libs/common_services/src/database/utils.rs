use app_state::DatabaseSettings;
use sqlx::postgres::PgPoolOptions;
use sqlx::{Pool, Postgres};
use tracing::info;

/// Get a database connection pool.
/// # Errors
///
/// * `PgPool::connect` can return an error if the database connection fails.
pub async fn get_db_pool(settings: &DatabaseSettings) -> Result<Pool<Postgres>, sqlx::Error> {
    info!("Connecting to database.");
    PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .min_connections(settings.min_connection)
        .max_lifetime(settings.max_lifetime)
        .idle_timeout(settings.idle_timeout)
        .acquire_timeout(settings.acquire_timeout)
        .test_before_acquire(true)
        .connect(&settings.url)
        .await
}
