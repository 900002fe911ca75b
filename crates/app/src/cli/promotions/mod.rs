use clap::{Args, Subcommand};
use rebate_app::context::AppContext;

use crate::cli::DatabaseArgs;

mod list;
mod seed;

#[derive(Debug, Args)]
pub(crate) struct PromotionsCommand {
    #[command(subcommand)]
    command: PromotionsSubcommand,
}

#[derive(Debug, Subcommand)]
enum PromotionsSubcommand {
    /// Insert the sample promotions into an empty database
    Seed(seed::SeedArgs),

    /// Print every stored promotion
    List(list::ListArgs),
}

pub(crate) async fn run(command: PromotionsCommand) -> Result<(), String> {
    match command.command {
        PromotionsSubcommand::Seed(args) => seed::run(args).await,
        PromotionsSubcommand::List(args) => list::run(args).await,
    }
}

async fn connect(args: &DatabaseArgs) -> Result<AppContext, String> {
    AppContext::from_database_url(&args.database_url, args.retry_policy())
        .await
        .map_err(|error| error.to_string())
}
