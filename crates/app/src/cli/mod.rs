use clap::{Args, Parser, Subcommand};
use rebate_app::database::RetryPolicy;

mod db;
mod price;
mod promotions;

#[derive(Debug, Parser)]
#[command(name = "rebate-app", about = "Rebate CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Db(db::DbCommand),
    Promotions(promotions::PromotionsCommand),
    Price(price::PriceArgs),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Db(command) => db::run(command).await,
            Commands::Promotions(command) => promotions::run(command).await,
            Commands::Price(args) => price::run(args).await,
        }
    }
}

/// Connection flags shared by every database-backed command.
#[derive(Debug, Args)]
pub(crate) struct DatabaseArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub(crate) database_url: String,

    /// Connection attempts before giving up
    #[arg(long, env = "DATABASE_CONNECT_ATTEMPTS", default_value_t = 1)]
    pub(crate) connect_attempts: u32,
}

impl DatabaseArgs {
    pub(crate) fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy {
            max_attempts: self.connect_attempts,
            ..RetryPolicy::default()
        }
    }
}
