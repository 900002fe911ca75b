//! Pricing Responses

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use rebate::pricing::PriceCalculation;

use crate::numbers::to_f64;

/// Price Calculation Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct PriceCalculationResponse {
    /// Sum of all service prices
    pub original_price: f64,

    /// Discount granted by the applied promotion
    pub discount_applied: f64,

    /// Price after the discount; may be negative
    pub final_price: f64,

    /// Code of the applied promotion
    pub promotion_used: Option<String>,
}

impl From<PriceCalculation> for PriceCalculationResponse {
    fn from(calculation: PriceCalculation) -> Self {
        Self {
            original_price: to_f64(calculation.original_price),
            discount_applied: to_f64(calculation.discount_applied),
            final_price: to_f64(calculation.final_price),
            promotion_used: calculation.promotion_used,
        }
    }
}
