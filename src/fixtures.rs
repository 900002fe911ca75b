//! Fixtures
//!
//! Sample promotions bundled with the crate, used to seed empty databases and
//! to price orders offline.

use jiff::civil::Date;
use rust_decimal::{Decimal, prelude::FromPrimitive};
use serde::Deserialize;
use thiserror::Error;

use crate::{
    discounts::DiscountType,
    promotions::{NewPromotion, PromotionError},
    rules::RuleParams,
};

const SAMPLE_PROMOTIONS_YAML: &str = include_str!("../fixtures/promotions.yml");

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Value could not be represented as a decimal
    #[error("Invalid value for promotion {code}: {value}")]
    InvalidValue {
        /// Promotion code
        code: String,

        /// Rejected value
        value: f64,
    },

    /// Promotion failed validation
    #[error("Invalid promotion {code}: {source}")]
    InvalidPromotion {
        /// Promotion code
        code: String,

        /// Validation failure
        #[source]
        source: PromotionError,
    },
}

/// Wrapper for promotions in YAML
#[derive(Debug, Deserialize)]
pub struct PromotionsFixture {
    /// Promotions in listing order
    pub promotions: Vec<PromotionFixture>,
}

/// Promotion fixture from YAML
#[derive(Debug, Deserialize)]
pub struct PromotionFixture {
    /// Promotion code
    pub code: String,

    /// `fixed` or `percentage`
    pub discount_type: String,

    /// Discount amount or percentage
    pub value: f64,

    /// Rule type name
    pub rule_type: String,

    /// Rule parameters
    #[serde(default)]
    pub rule_params: RuleParams,

    /// Optional expiry date
    #[serde(default)]
    pub expiry_date: Option<Date>,
}

impl PromotionFixture {
    /// Convert to a validated `NewPromotion`
    ///
    /// # Errors
    ///
    /// Returns an error if the value is not a finite number or the promotion
    /// fails validation.
    pub fn try_into_promotion(self) -> Result<NewPromotion, FixtureError> {
        let value = Decimal::from_f64(self.value).ok_or_else(|| FixtureError::InvalidValue {
            code: self.code.clone(),
            value: self.value,
        })?;

        let promotion = NewPromotion {
            code: self.code,
            discount_type: DiscountType::from(self.discount_type),
            value,
            rule_type: self.rule_type,
            rule_params: self.rule_params,
            expiry_date: self.expiry_date,
        };

        promotion
            .validate()
            .map_err(|source| FixtureError::InvalidPromotion {
                code: promotion.code.clone(),
                source,
            })?;

        Ok(promotion)
    }
}

/// Parse a promotions fixture document.
///
/// # Errors
///
/// Returns an error if the YAML is malformed or any promotion is invalid.
pub fn parse_promotions(yaml: &str) -> Result<Vec<NewPromotion>, FixtureError> {
    let fixture: PromotionsFixture = serde_norway::from_str(yaml)?;

    fixture
        .promotions
        .into_iter()
        .map(PromotionFixture::try_into_promotion)
        .collect()
}

/// The bundled sample promotions: `WELCOME10`, `BARCELONA30` and `MIN50`.
///
/// # Errors
///
/// Returns an error if the bundled fixture is invalid.
pub fn sample_promotions() -> Result<Vec<NewPromotion>, FixtureError> {
    parse_promotions(SAMPLE_PROMOTIONS_YAML)
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;
    use rust_decimal_macros::dec;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn sample_promotions_parse() -> TestResult {
        let promotions = sample_promotions()?;

        let codes: Vec<&str> = promotions.iter().map(|p| p.code.as_str()).collect();

        assert_eq!(codes, vec!["WELCOME10", "BARCELONA30", "MIN50"]);

        Ok(())
    }

    #[test]
    fn sample_promotions_carry_rule_and_expiry() -> TestResult {
        let promotions = sample_promotions()?;

        let barcelona = promotions
            .iter()
            .find(|p| p.code == "BARCELONA30")
            .ok_or("BARCELONA30 missing")?;

        assert_eq!(barcelona.discount_type, DiscountType::Percentage);
        assert_eq!(barcelona.value, dec!(30));
        assert_eq!(barcelona.rule_type, "location");
        assert_eq!(barcelona.expiry_date, Some(date(2025, 6, 30)));

        let min50 = promotions
            .iter()
            .find(|p| p.code == "MIN50")
            .ok_or("MIN50 missing")?;

        assert_eq!(min50.expiry_date, None);

        Ok(())
    }

    #[test]
    fn invalid_fixture_promotions_are_rejected() {
        let yaml = r"
promotions:
  - code: BROKEN
    discount_type: fixed
    value: 5
    rule_type: weekday
";

        let result = parse_promotions(yaml);

        assert!(
            matches!(result, Err(FixtureError::InvalidPromotion { ref code, .. }) if code == "BROKEN"),
            "expected InvalidPromotion, got {result:?}"
        );
    }

    #[test]
    fn malformed_yaml_is_rejected() {
        let result = parse_promotions("promotions: {");

        assert!(
            matches!(result, Err(FixtureError::Yaml(_))),
            "expected Yaml error, got {result:?}"
        );
    }
}
