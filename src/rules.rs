//! Promotion Rules
//!
//! Eligibility predicates attached to promotions. A rule is built at runtime
//! from the promotion's stored `rule_type` and `rule_params`, then asked a
//! single question: does this order context satisfy it?

use std::{fmt, str::FromStr};

use rust_decimal::{Decimal, prelude::FromPrimitive};
use rustc_hash::FxHashSet;
use serde::{Deserialize, de::DeserializeOwned};
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::debug;

use crate::orders::OrderContext;

/// Untyped rule parameters, as stored alongside a promotion.
pub type RuleParams = Map<String, Value>;

/// Errors raised while building a rule from its stored configuration.
#[derive(Debug, Error)]
pub enum RuleError {
    /// The rule type is not one of `location`, `order` or `user`.
    #[error("unknown rule type: {0}")]
    UnknownRuleType(String),

    /// Required parameters were missing or had the wrong shape.
    #[error("invalid parameters for {rule_type} rule: {source}")]
    InvalidParams {
        /// Rule type the parameters were read for.
        rule_type: RuleType,

        /// Deserialization failure.
        #[source]
        source: serde_json::Error,
    },

    /// A numeric parameter could not be represented as a decimal amount.
    #[error("invalid amount for {param}: {value}")]
    InvalidAmount {
        /// Parameter name.
        param: &'static str,

        /// Rejected value.
        value: f64,
    },
}

/// Kind of eligibility rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleType {
    /// Matches on the customer's location.
    Location,

    /// Matches on a minimum order total.
    Order,

    /// Matches on an allow-list of user ids.
    User,
}

impl RuleType {
    /// All supported rule types.
    pub const ALL: [Self; 3] = [Self::Location, Self::Order, Self::User];

    /// Stored representation of the rule type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Location => "location",
            Self::Order => "order",
            Self::User => "user",
        }
    }
}

impl fmt::Display for RuleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RuleType {
    type Err = RuleError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|rule_type| rule_type.as_str() == value)
            .ok_or_else(|| RuleError::UnknownRuleType(value.to_string()))
    }
}

#[derive(Debug, Deserialize)]
struct LocationParams {
    required_location: String,
}

#[derive(Debug, Deserialize)]
struct OrderParams {
    #[serde(default)]
    min_order: f64,
}

#[derive(Debug, Deserialize)]
struct UserParams {
    #[serde(default)]
    user_ids: Vec<i64>,
}

/// A validated eligibility rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromotionRule {
    /// Customer must be in `required_location` (case-insensitive).
    Location {
        /// Location the customer must match.
        required_location: String,
    },

    /// Order total must be at least `min_order`.
    Order {
        /// Inclusive minimum order total.
        min_order: Decimal,
    },

    /// Customer must be one of `user_ids`.
    User {
        /// Eligible user ids.
        user_ids: FxHashSet<i64>,
    },
}

impl PromotionRule {
    /// Build a rule from its stored type name and parameters.
    ///
    /// `min_order` defaults to zero and `user_ids` to an empty set when
    /// absent; `required_location` is mandatory.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError::UnknownRuleType`] for unsupported rule types and
    /// [`RuleError::InvalidParams`] / [`RuleError::InvalidAmount`] when the
    /// parameters do not fit the rule type.
    pub fn from_params(rule_type: &str, params: &RuleParams) -> Result<Self, RuleError> {
        let rule_type = rule_type.parse::<RuleType>()?;

        match rule_type {
            RuleType::Location => {
                let LocationParams { required_location } = parse_params(rule_type, params)?;

                Ok(Self::Location { required_location })
            }
            RuleType::Order => {
                let OrderParams { min_order } = parse_params(rule_type, params)?;

                let min_order = Decimal::from_f64(min_order).ok_or(RuleError::InvalidAmount {
                    param: "min_order",
                    value: min_order,
                })?;

                Ok(Self::Order { min_order })
            }
            RuleType::User => {
                let UserParams { user_ids } = parse_params(rule_type, params)?;

                Ok(Self::User {
                    user_ids: user_ids.into_iter().collect(),
                })
            }
        }
    }

    /// Rule type of this rule.
    #[must_use]
    pub const fn rule_type(&self) -> RuleType {
        match self {
            Self::Location { .. } => RuleType::Location,
            Self::Order { .. } => RuleType::Order,
            Self::User { .. } => RuleType::User,
        }
    }

    /// Whether the order context satisfies this rule.
    #[must_use]
    pub fn is_valid(&self, context: &OrderContext) -> bool {
        match self {
            Self::Location { required_location } => context
                .user_location
                .as_deref()
                .filter(|location| !location.is_empty())
                .is_some_and(|location| {
                    location.to_lowercase() == required_location.to_lowercase()
                }),
            Self::Order { min_order } => context.order_total >= *min_order,
            Self::User { user_ids } => context
                .user_id
                .is_some_and(|user_id| user_ids.contains(&user_id)),
        }
    }
}

fn parse_params<T: DeserializeOwned>(
    rule_type: RuleType,
    params: &RuleParams,
) -> Result<T, RuleError> {
    serde_json::from_value(Value::Object(params.clone()))
        .map_err(|source| RuleError::InvalidParams { rule_type, source })
}

/// Build and evaluate a rule, treating any construction failure as "not
/// valid". Construction errors are logged at `debug` and never propagate.
pub fn try_evaluate(rule_type: &str, params: &RuleParams, context: &OrderContext) -> bool {
    match PromotionRule::from_params(rule_type, params) {
        Ok(rule) => rule.is_valid(context),
        Err(error) => {
            debug!(rule_type, %error, "rule could not be built, treating as invalid");

            false
        }
    }
}
