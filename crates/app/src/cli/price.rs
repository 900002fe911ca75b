use clap::Args;
use jiff::Timestamp;
use rebate::{
    fixtures::sample_promotions,
    orders::{Order, ServiceLine},
    pricing::{PriceCalculation, PricingEngine},
    promotions::memory::InMemoryPromotions,
};
use rebate_app::{context::AppContext, database::RetryPolicy};
use rust_decimal::Decimal;
use tabled::{
    builder::Builder,
    settings::{Alignment, Style, object::Columns},
};

#[derive(Debug, Args)]
pub(crate) struct PriceArgs {
    /// Service line as NAME=PRICE; repeat for each service
    #[arg(long = "service", value_name = "NAME=PRICE", value_parser = parse_service)]
    services: Vec<(String, Decimal)>,

    /// Promo code to request
    #[arg(long)]
    promo_code: Option<String>,

    /// Customer location
    #[arg(long)]
    location: Option<String>,

    /// Customer id
    #[arg(long)]
    user_id: Option<i64>,

    /// Price against the bundled sample promotions instead of the database
    #[arg(long)]
    offline: bool,

    /// PostgreSQL connection string
    #[arg(
        long,
        env = "DATABASE_URL",
        hide_env_values = true,
        required_unless_present = "offline"
    )]
    database_url: Option<String>,

    /// Connection attempts before giving up
    #[arg(long, env = "DATABASE_CONNECT_ATTEMPTS", default_value_t = 1)]
    connect_attempts: u32,
}

pub(crate) async fn run(args: PriceArgs) -> Result<(), String> {
    let services: Vec<ServiceLine> = args
        .services
        .iter()
        .zip(1..)
        .map(|((name, price), id)| ServiceLine::new(id, name.clone(), *price))
        .collect();

    let order = Order {
        services,
        promo_code: args.promo_code,
        user_location: args.location,
        user_id: args.user_id,
    };

    let calculation = match args.database_url {
        Some(database_url) if !args.offline => {
            let policy = RetryPolicy {
                max_attempts: args.connect_attempts,
                ..RetryPolicy::default()
            };

            let context = AppContext::from_database_url(&database_url, policy)
                .await
                .map_err(|error| error.to_string())?;

            context
                .pricing
                .calculate_price(order.clone())
                .await
                .map_err(|error| format!("failed to price order: {error}"))?
        }
        _ => price_offline(&order).await?,
    };

    println!("{}", price_table(&order, &calculation));

    Ok(())
}

async fn price_offline(order: &Order) -> Result<PriceCalculation, String> {
    let created_at = Timestamp::now();

    let promotions: InMemoryPromotions = sample_promotions()
        .map_err(|error| format!("failed to load sample promotions: {error}"))?
        .into_iter()
        .map(|promotion| promotion.into_promotion(created_at))
        .collect();

    PricingEngine::new(promotions)
        .calculate_final_price(order)
        .await
        .map_err(|error| format!("failed to price order: {error}"))
}

fn parse_service(value: &str) -> Result<(String, Decimal), String> {
    let (name, price) = value
        .rsplit_once('=')
        .ok_or_else(|| format!("expected NAME=PRICE, got {value:?}"))?;

    let price = price
        .trim()
        .parse::<Decimal>()
        .map_err(|error| format!("invalid price {price:?}: {error}"))?;

    Ok((name.trim().to_string(), price))
}

fn price_table(order: &Order, calculation: &PriceCalculation) -> String {
    let mut builder = Builder::default();

    builder.push_record(["#", "Service", "Price"]);

    for service in &order.services {
        builder.push_record([
            format!("#{}", service.id),
            service.name.clone(),
            service.price.to_string(),
        ]);
    }

    builder.push_record([
        String::new(),
        "Subtotal".to_string(),
        calculation.original_price.to_string(),
    ]);

    builder.push_record([
        String::new(),
        calculation.promotion_used.as_ref().map_or_else(
            || "Discount".to_string(),
            |code| format!("Discount ({code})"),
        ),
        format!("-{}", calculation.discount_applied),
    ]);

    builder.push_record([
        String::new(),
        "Total".to_string(),
        calculation.final_price.to_string(),
    ]);

    let mut table = builder.build();

    table.with(Style::modern_rounded());
    table.modify(Columns::new(2..3), Alignment::right());

    table.to_string()
}
