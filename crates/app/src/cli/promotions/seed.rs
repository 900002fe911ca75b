use clap::Args;

use crate::cli::DatabaseArgs;

#[derive(Debug, Args)]
pub(crate) struct SeedArgs {
    #[command(flatten)]
    database: DatabaseArgs,
}

pub(crate) async fn run(args: SeedArgs) -> Result<(), String> {
    let context = super::connect(&args.database).await?;

    let inserted = context
        .promotions
        .seed_sample_promotions()
        .await
        .map_err(|error| format!("failed to seed promotions: {error}"))?;

    if inserted == 0 {
        println!("promotions already present; nothing seeded");
    } else {
        println!("seeded {inserted} sample promotions");
    }

    Ok(())
}
