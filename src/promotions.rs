//! Promotions
//!
//! A promotion pairs a discount (`discount_type` + `value`) with an
//! eligibility rule and an optional expiry date.

use jiff::{Timestamp, civil::Date};
use rust_decimal::Decimal;
use thiserror::Error;

use crate::{
    discounts::DiscountType,
    orders::OrderContext,
    rules::{PromotionRule, RuleError, RuleParams, try_evaluate},
};

pub mod memory;

/// Errors raised when validating a new promotion.
#[derive(Debug, Error)]
pub enum PromotionError {
    /// The promotion code was empty.
    #[error("promotion code must not be empty")]
    EmptyCode,

    /// The promotion code contained control characters.
    #[error("promotion code must not contain control characters")]
    InvalidCode,

    /// The discount type is not `fixed` or `percentage`.
    #[error("discount_type must be either \"fixed\" or \"percentage\", got \"{0}\"")]
    UnknownDiscountType(String),

    /// The discount value was negative.
    #[error("discount value must not be negative, got {0}")]
    NegativeValue(Decimal),

    /// A percentage discount exceeded 100.
    #[error("percentage discount must be between 0 and 100, got {0}")]
    PercentageOutOfRange(Decimal),

    /// The eligibility rule could not be built.
    #[error(transparent)]
    InvalidRule(#[from] RuleError),
}

/// A stored promotion.
#[derive(Debug, Clone, PartialEq)]
pub struct Promotion {
    /// Unique, case-sensitive promotion code.
    pub code: String,

    /// How `value` is applied.
    pub discount_type: DiscountType,

    /// Discount amount or percentage.
    pub value: Decimal,

    /// Stored rule type name.
    pub rule_type: String,

    /// Stored rule parameters.
    pub rule_params: RuleParams,

    /// Last calendar day the promotion can be used.
    pub expiry_date: Option<Date>,

    /// Creation time.
    pub created_at: Timestamp,
}

impl Promotion {
    /// Whether the promotion has expired on `date`.
    #[must_use]
    pub fn is_expired_on(&self, date: Date) -> bool {
        self.expiry_date.is_some_and(|expiry| date > expiry)
    }

    /// Whether the promotion applies to the given order context.
    ///
    /// Promotions whose rule cannot be built are never valid.
    #[must_use]
    pub fn is_valid(&self, context: &OrderContext) -> bool {
        if self.is_expired_on(context.date) {
            return false;
        }

        try_evaluate(&self.rule_type, &self.rule_params, context)
    }

    /// Discount this promotion grants on `order_total`, or `None` when the
    /// stored value makes the discount unrepresentable.
    #[must_use]
    pub fn calculate_discount(&self, order_total: Decimal) -> Option<Decimal> {
        self.discount_type.discount(self.value, order_total)
    }
}

/// A promotion that has not been stored yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPromotion {
    /// Unique, case-sensitive promotion code.
    pub code: String,

    /// How `value` is applied.
    pub discount_type: DiscountType,

    /// Discount amount or percentage.
    pub value: Decimal,

    /// Rule type name.
    pub rule_type: String,

    /// Rule parameters.
    pub rule_params: RuleParams,

    /// Last calendar day the promotion can be used.
    pub expiry_date: Option<Date>,
}

impl NewPromotion {
    /// Check the promotion can be stored, returning its eligibility rule.
    ///
    /// # Errors
    ///
    /// Returns an error when the code is empty, the discount type or value is
    /// unsupported, or the rule type and parameters do not form a valid rule.
    pub fn validate(&self) -> Result<PromotionRule, PromotionError> {
        if self.code.trim().is_empty() {
            return Err(PromotionError::EmptyCode);
        }

        if self.code.chars().any(char::is_control) {
            return Err(PromotionError::InvalidCode);
        }

        match &self.discount_type {
            DiscountType::Other(other) => {
                return Err(PromotionError::UnknownDiscountType(other.clone()));
            }
            DiscountType::Percentage if self.value > Decimal::ONE_HUNDRED => {
                return Err(PromotionError::PercentageOutOfRange(self.value));
            }
            DiscountType::Fixed | DiscountType::Percentage => {}
        }

        if self.value < Decimal::ZERO {
            return Err(PromotionError::NegativeValue(self.value));
        }

        PromotionRule::from_params(&self.rule_type, &self.rule_params).map_err(Into::into)
    }

    /// Turn into a stored promotion created at `created_at`.
    #[must_use]
    pub fn into_promotion(self, created_at: Timestamp) -> Promotion {
        Promotion {
            code: self.code,
            discount_type: self.discount_type,
            value: self.value,
            rule_type: self.rule_type,
            rule_params: self.rule_params,
            expiry_date: self.expiry_date,
            created_at,
        }
    }
}
