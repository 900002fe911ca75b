//! Promotion Requests

use jiff::civil::Date;
use salvo::{http::StatusError, oapi::ToSchema};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use rebate::{
    discounts::DiscountType,
    promotions::NewPromotion,
    rules::{RuleParams, RuleType},
};

use crate::numbers::to_decimal;

/// Rule parameters; which keys are required depends on the rule type.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub(crate) struct RuleParamsRequest {
    /// Location the customer must be in (`location` rules)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_location: Option<String>,

    /// Minimum order total (`order` rules)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_order: Option<f64>,

    /// Eligible customer ids (`user` rules)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_ids: Option<Vec<i64>>,
}

/// Create Promotion Request
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreatePromotionRequest {
    /// Unique, case-sensitive promotion code
    pub code: String,

    /// `fixed` or `percentage`
    pub discount_type: String,

    /// Discount amount, or percentage between 0 and 100
    pub value: f64,

    /// `location`, `order` or `user`
    pub rule_type: String,

    /// Rule parameters
    #[serde(default)]
    pub rule_params: RuleParamsRequest,

    /// Last day the promotion can be used, as `YYYY-MM-DD`
    #[serde(default)]
    pub expiry_date: Option<String>,
}

impl TryFrom<RuleParamsRequest> for RuleParams {
    type Error = StatusError;

    fn try_from(request: RuleParamsRequest) -> Result<Self, Self::Error> {
        let mut params = RuleParams::new();

        if let Some(required_location) = request.required_location {
            params.insert(
                "required_location".to_string(),
                Value::String(required_location),
            );
        }

        if let Some(min_order) = request.min_order {
            let min_order = serde_json::Number::from_f64(min_order).ok_or_else(|| {
                StatusError::bad_request().brief(format!("invalid min_order: {min_order}"))
            })?;

            params.insert("min_order".to_string(), Value::Number(min_order));
        }

        if let Some(user_ids) = request.user_ids {
            params.insert(
                "user_ids".to_string(),
                Value::Array(user_ids.into_iter().map(Value::from).collect()),
            );
        }

        Ok(params)
    }
}

impl TryFrom<CreatePromotionRequest> for NewPromotion {
    type Error = StatusError;

    fn try_from(request: CreatePromotionRequest) -> Result<Self, Self::Error> {
        if request.rule_type == RuleType::Order.as_str() && request.rule_params.min_order.is_none()
        {
            return Err(StatusError::bad_request()
                .brief("Order rule requires \"min_order\" parameter"));
        }

        let expiry_date = request
            .expiry_date
            .as_deref()
            .map(parse_expiry_date)
            .transpose()?;

        Ok(NewPromotion {
            value: to_decimal("value", request.value)?,
            code: request.code,
            discount_type: DiscountType::from(request.discount_type),
            rule_type: request.rule_type,
            rule_params: request.rule_params.try_into()?,
            expiry_date,
        })
    }
}

fn parse_expiry_date(value: &str) -> Result<Date, StatusError> {
    value.parse().map_err(|error| {
        StatusError::bad_request().brief(format!("invalid expiry_date {value:?}: {error}"))
    })
}
