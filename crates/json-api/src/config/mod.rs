//! Server configuration module

use clap::Parser;

use crate::config::{db::DatabaseConfig, observability::LoggingConfig, server::ServerRuntimeConfig};

pub(crate) mod db;
pub(crate) mod observability;
pub(crate) mod server;

/// Rebate JSON API Server configuration
#[derive(Debug, Parser)]
#[command(name = "rebate-json", about = "Rebate JSON API Server", long_about = None)]
pub struct ServerConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Application database settings.
    #[command(flatten)]
    pub database: DatabaseConfig,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Get the socket address for binding
    #[must_use]
    pub fn socket_addr(&self) -> String {
        self.server.socket_addr()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use clap::CommandFactory;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let command = ServerConfig::command();

        let default_of = |id: &str| {
            command
                .get_arguments()
                .find(|arg| arg.get_id() == id)
                .map(|arg| {
                    arg.get_default_values()
                        .iter()
                        .map(|value| value.to_string_lossy().into_owned())
                        .collect::<Vec<_>>()
                })
                .unwrap_or_default()
        };

        assert_eq!(default_of("host"), ["0.0.0.0"]);
        assert_eq!(default_of("port"), ["8000"]);
        assert_eq!(default_of("connect_attempts"), ["5"]);
        assert_eq!(default_of("connect_delay_seconds"), ["5"]);
        assert_eq!(default_of("seed_sample_promotions"), ["true"]);
    }

    #[test]
    fn explicit_flags_build_the_runtime_config() -> TestResult {
        let config = ServerConfig::try_parse_from([
            "rebate-json",
            "--database-url",
            "postgres://db/rebate",
            "--host",
            "127.0.0.1",
            "--port",
            "9000",
            "--connect-attempts",
            "3",
            "--connect-delay-seconds",
            "2",
        ])?;

        assert_eq!(config.socket_addr(), "127.0.0.1:9000");
        assert_eq!(config.database.retry_policy().max_attempts, 3);
        assert_eq!(config.database.retry_policy().delay, Duration::from_secs(2));

        Ok(())
    }

    #[test]
    fn seeding_can_be_disabled() -> TestResult {
        let config = ServerConfig::try_parse_from([
            "rebate-json",
            "--database-url",
            "postgres://db/rebate",
            "--seed-sample-promotions",
            "false",
        ])?;

        assert!(!config.database.seed_sample_promotions);

        Ok(())
    }
}
