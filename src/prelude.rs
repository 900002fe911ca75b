//! Rebate prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    discounts::DiscountType,
    fixtures::{FixtureError, sample_promotions},
    orders::{Order, OrderContext, ServiceLine},
    pricing::{
        BestPromotion, CalculationError, PriceCalculation, PricingEngine, PromotionRepository,
    },
    promotions::{NewPromotion, Promotion, PromotionError, memory::InMemoryPromotions},
    rules::{PromotionRule, RuleError, RuleParams, RuleType, try_evaluate},
};
