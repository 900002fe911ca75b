use clap::Args;
use rebate_app::domain::promotions::records::PromotionRecord;
use tabled::{
    builder::Builder,
    settings::{Alignment, Style, object::Columns},
};

use crate::cli::DatabaseArgs;

#[derive(Debug, Args)]
pub(crate) struct ListArgs {
    #[command(flatten)]
    database: DatabaseArgs,
}

pub(crate) async fn run(args: ListArgs) -> Result<(), String> {
    let context = super::connect(&args.database).await?;

    let records = context
        .promotions
        .list_promotions()
        .await
        .map_err(|error| format!("failed to list promotions: {error}"))?;

    if records.is_empty() {
        println!("no promotions found");
        return Ok(());
    }

    println!("{}", promotions_table(&records));

    Ok(())
}

fn promotions_table(records: &[PromotionRecord]) -> String {
    let mut builder = Builder::default();

    builder.push_record(["ID", "Code", "Discount", "Value", "Rule", "Params", "Expires"]);

    for PromotionRecord { id, promotion } in records {
        builder.push_record([
            id.to_string(),
            promotion.code.clone(),
            promotion.discount_type.to_string(),
            promotion.value.to_string(),
            promotion.rule_type.clone(),
            serde_json::Value::Object(promotion.rule_params.clone()).to_string(),
            promotion
                .expiry_date
                .map_or_else(|| "never".to_string(), |date| date.to_string()),
        ]);
    }

    let mut table = builder.build();

    table.with(Style::modern_rounded());
    table.modify(Columns::new(3..4), Alignment::right());

    table.to_string()
}
