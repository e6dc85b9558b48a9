use crate::config::Config;
use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;

/// Builds the shared connection pool. The acquire timeout bounds every
/// operation's wait for a connection, so a saturated pool surfaces as
/// Unavailable instead of hanging requests.
pub async fn create_pool(config: &Config) -> anyhow::Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .acquire_timeout(Duration::from_secs(5))
        .connect(&config.database_url)
        .await?;
    tracing::debug!(
        max_connections = config.database_max_connections,
        "database pool ready"
    );
    Ok(pool)
}
