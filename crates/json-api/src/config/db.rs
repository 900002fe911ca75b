//! Database Config

use std::time::Duration;

use clap::{ArgAction, Args};
use rebate_app::database::RetryPolicy;

/// Database settings.
#[derive(Debug, Args)]
pub struct DatabaseConfig {
    /// `PostgreSQL` connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: String,

    /// Connection attempts made while the database starts up
    #[arg(long, env = "DATABASE_CONNECT_ATTEMPTS", default_value_t = 5)]
    pub connect_attempts: u32,

    /// Seconds to wait between connection attempts
    #[arg(long, env = "DATABASE_CONNECT_DELAY_SECONDS", default_value_t = 5)]
    pub connect_delay_seconds: u64,

    /// Insert the sample promotions on startup when none exist
    #[arg(
        long,
        env = "SEED_SAMPLE_PROMOTIONS",
        default_value_t = true,
        action = ArgAction::Set
    )]
    pub seed_sample_promotions: bool,
}

impl DatabaseConfig {
    /// Retry policy for the initial connection.
    #[must_use]
    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy {
            max_attempts: self.connect_attempts,
            delay: Duration::from_secs(self.connect_delay_seconds),
        }
    }
}
