//! Database connection management

use std::time::Duration;

use sqlx::{PgPool, migrate::MigrateError};
use tracing::{info, warn};

/// How often, and how patiently, to retry the initial database connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total number of connection attempts.
    pub max_attempts: u32,

    /// Pause between failed attempts.
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            delay: Duration::from_secs(5),
        }
    }
}

/// Connect to `PostgreSQL`.
///
/// # Errors
///
/// Returns an error if the connection cannot be established.
pub async fn connect(database_url: &str) -> Result<PgPool, sqlx::Error> {
    PgPool::connect(database_url).await
}

/// Connect to `PostgreSQL`, retrying while the server comes up.
///
/// # Errors
///
/// Returns the last connection error once every attempt has failed.
pub async fn connect_with_retry(
    database_url: &str,
    policy: RetryPolicy,
) -> Result<PgPool, sqlx::Error> {
    let max_attempts = policy.max_attempts.max(1);
    let mut attempt = 1;

    loop {
        match connect(database_url).await {
            Ok(pool) => {
                info!(attempt, "connected to database");

                return Ok(pool);
            }
            Err(error) if attempt < max_attempts => {
                warn!(
                    attempt,
                    max_attempts,
                    retry_in_secs = policy.delay.as_secs_f64(),
                    "database not ready: {error}"
                );

                tokio::time::sleep(policy.delay).await;

                attempt += 1;
            }
            Err(error) => return Err(error),
        }
    }
}

/// Apply pending schema migrations.
///
/// # Errors
///
/// Returns an error if a migration fails to apply.
pub async fn migrate(pool: &PgPool) -> Result<(), MigrateError> {
    sqlx::migrate!("../../migrations").run(pool).await
}
