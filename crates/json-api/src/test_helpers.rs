//! Test helpers.

use std::sync::Arc;

use jiff::{Timestamp, civil::date};
use rebate::{discounts::DiscountType, promotions::Promotion, rules::RuleParams};
use rebate_app::{
    context::AppContext,
    domain::{
        pricing::MockPricingService,
        promotions::{MockPromotionsService, records::PromotionRecord},
    },
};
use rust_decimal_macros::dec;
use salvo::{affix_state::inject, prelude::*};
use serde_json::json;

use crate::state::State;

fn strict_promotions_mock() -> MockPromotionsService {
    let mut promotions = MockPromotionsService::new();

    promotions.expect_create_promotion().never();
    promotions.expect_find_promotion().never();
    promotions.expect_list_promotions().never();
    promotions.expect_seed_sample_promotions().never();

    promotions
}

fn strict_pricing_mock() -> MockPricingService {
    let mut pricing = MockPricingService::new();

    pricing.expect_calculate_price().never();

    pricing
}

fn app_service(
    promotions: MockPromotionsService,
    pricing: MockPricingService,
    route: Router,
) -> Service {
    let state = State::from_app_context(AppContext {
        promotions: Arc::new(promotions),
        pricing: Arc::new(pricing),
    });

    Service::new(Router::new().hoop(inject(state)).push(route))
}

pub(crate) fn promotions_service(promotions: MockPromotionsService, route: Router) -> Service {
    app_service(promotions, strict_pricing_mock(), route)
}

pub(crate) fn pricing_service(pricing: MockPricingService, route: Router) -> Service {
    app_service(strict_promotions_mock(), pricing, route)
}

pub(crate) fn barcelona_record(id: i64) -> PromotionRecord {
    let rule_params: RuleParams = json!({ "required_location": "Barcelona" })
        .as_object()
        .cloned()
        .unwrap_or_default();

    PromotionRecord {
        id,
        promotion: Promotion {
            code: "BARCELONA30".to_string(),
            discount_type: DiscountType::Percentage,
            value: dec!(30),
            rule_type: "location".to_string(),
            rule_params,
            expiry_date: Some(date(2025, 6, 30)),
            created_at: Timestamp::UNIX_EPOCH,
        },
    }
}
