//! Promotion Responses

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use rebate_app::domain::promotions::records::PromotionRecord;

use crate::numbers::to_f64;

/// Promotion Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct PromotionResponse {
    /// Database identifier
    pub id: i64,

    /// Unique, case-sensitive promotion code
    pub code: String,

    /// `fixed` or `percentage`
    pub discount_type: String,

    /// Discount amount or percentage
    pub value: f64,

    /// Rule type name
    pub rule_type: String,

    /// Rule parameters
    pub rule_params: Value,

    /// Last day the promotion can be used
    pub expiry_date: Option<String>,

    /// The date and time the promotion was created
    pub created_at: String,
}

impl From<PromotionRecord> for PromotionResponse {
    fn from(PromotionRecord { id, promotion }: PromotionRecord) -> Self {
        PromotionResponse {
            id,
            code: promotion.code,
            discount_type: promotion.discount_type.to_string(),
            value: to_f64(promotion.value),
            rule_type: promotion.rule_type,
            rule_params: Value::Object(promotion.rule_params),
            expiry_date: promotion.expiry_date.as_ref().map(ToString::to_string),
            created_at: promotion.created_at.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct PromotionsResponse {
    /// Promotions in insertion order
    pub promotions: Vec<PromotionResponse>,
}
