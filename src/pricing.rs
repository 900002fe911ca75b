//! Pricing
//!
//! Sums an order's service lines and applies the single best promotion.
//!
//! Promotion selection works in two steps. A promo code requested by the
//! customer wins outright whenever it exists and is valid for the order, even
//! if another promotion would discount more. Otherwise every stored promotion
//! is checked and the valid one with the largest discount is applied, the
//! earliest listed promotion winning ties.

use std::error::Error as StdError;

use jiff::{Zoned, civil::Date};
use rust_decimal::Decimal;
use thiserror::Error;
use tracing::{debug, warn};

use crate::{
    orders::{Order, OrderContext, ServiceLine},
    promotions::Promotion,
};

/// Errors raised while pricing an order.
#[derive(Debug, Error)]
pub enum CalculationError {
    /// A service line carried a negative price.
    #[error("service {id} has a negative price: {price}")]
    NegativePrice {
        /// Offending service id.
        id: i64,

        /// Offending price.
        price: Decimal,
    },

    /// The order total or final price could not be represented.
    #[error("order total is too large to calculate")]
    Overflow,
}

/// Read access to stored promotions.
pub trait PromotionRepository {
    /// Error raised by the underlying store.
    type Error: StdError + Send + Sync + 'static;

    /// Find the promotion with exactly this code.
    async fn find_by_code(&self, code: &str) -> Result<Option<Promotion>, Self::Error>;

    /// List every promotion, in a stable order.
    async fn list_all(&self) -> Result<Vec<Promotion>, Self::Error>;
}

/// Outcome of pricing an order.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceCalculation {
    /// Sum of all service line prices.
    pub original_price: Decimal,

    /// Discount granted by the selected promotion.
    pub discount_applied: Decimal,

    /// `original_price - discount_applied`; may be negative.
    pub final_price: Decimal,

    /// Code of the selected promotion.
    pub promotion_used: Option<String>,
}

/// A selected promotion and the discount it grants.
#[derive(Debug, Clone, PartialEq)]
pub struct BestPromotion {
    /// Selected promotion.
    pub promotion: Promotion,

    /// Discount the promotion grants on the order.
    pub discount: Decimal,
}

impl BestPromotion {
    /// Price `promotion` against `order_total`.
    ///
    /// Returns `None` when the discount, or the final price it leads to,
    /// does not fit in a `Decimal`.
    fn new(promotion: Promotion, order_total: Decimal) -> Option<Self> {
        let discount = promotion
            .calculate_discount(order_total)
            .filter(|discount| order_total.checked_sub(*discount).is_some());

        let Some(discount) = discount else {
            warn!(
                code = %promotion.code,
                value = %promotion.value,
                "promotion discount overflows, skipping"
            );

            return None;
        };

        Some(Self {
            promotion,
            discount,
        })
    }
}

/// Sum the prices of the given service lines.
///
/// # Errors
///
/// Returns an error when a line price is negative or the sum overflows.
pub fn order_total(services: &[ServiceLine]) -> Result<Decimal, CalculationError> {
    services.iter().try_fold(Decimal::ZERO, |total, service| {
        if service.price < Decimal::ZERO {
            return Err(CalculationError::NegativePrice {
                id: service.id,
                price: service.price,
            });
        }

        total
            .checked_add(service.price)
            .ok_or(CalculationError::Overflow)
    })
}

/// Pick the valid promotion with the largest discount.
///
/// Ties keep the promotion that came first.
pub fn best_promotion<I>(promotions: I, context: &OrderContext) -> Option<BestPromotion>
where
    I: IntoIterator<Item = Promotion>,
{
    promotions
        .into_iter()
        .filter(|promotion| promotion.is_valid(context))
        .filter_map(|promotion| BestPromotion::new(promotion, context.order_total))
        .fold(None, |best, candidate| match best {
            Some(best) if best.discount >= candidate.discount => Some(best),
            _ => Some(candidate),
        })
}

/// Prices orders against a promotion repository.
#[derive(Debug, Clone)]
pub struct PricingEngine<R> {
    promotions: R,
}

impl<R: PromotionRepository> PricingEngine<R> {
    /// Create an engine reading promotions from `promotions`.
    pub fn new(promotions: R) -> Self {
        Self { promotions }
    }

    /// Promotion repository backing this engine.
    pub fn promotions(&self) -> &R {
        &self.promotions
    }

    /// Price an order as of today's local date.
    ///
    /// # Errors
    ///
    /// Returns an error when the order's service lines cannot be summed.
    pub async fn calculate_final_price(
        &self,
        order: &Order,
    ) -> Result<PriceCalculation, CalculationError> {
        self.calculate_final_price_on(order, Zoned::now().date())
            .await
    }

    /// Price an order as of `date`.
    ///
    /// Repository failures never fail the calculation; they only mean no
    /// promotion is applied.
    ///
    /// # Errors
    ///
    /// Returns an error when the order's service lines cannot be summed or
    /// the final price overflows.
    #[tracing::instrument(
        name = "pricing.calculate_final_price",
        skip(self, order),
        fields(
            services = order.services.len(),
            promo_code = order.promo_code.as_deref(),
            promotion_used = tracing::field::Empty
        ),
        err
    )]
    pub async fn calculate_final_price_on(
        &self,
        order: &Order,
        date: Date,
    ) -> Result<PriceCalculation, CalculationError> {
        let original_price = order_total(&order.services)?;

        let context = OrderContext {
            order_total: original_price,
            user_location: order.user_location.clone(),
            user_id: order.user_id,
            date,
        };

        let best = self
            .find_best_promotion(&context, order.requested_code())
            .await;

        let (discount_applied, promotion_used) = match best {
            Some(BestPromotion {
                promotion,
                discount,
            }) => (discount, Some(promotion.code)),
            None => (Decimal::ZERO, None),
        };

        if let Some(code) = &promotion_used {
            tracing::Span::current().record("promotion_used", code.as_str());
        }

        let final_price = original_price
            .checked_sub(discount_applied)
            .ok_or(CalculationError::Overflow)?;

        Ok(PriceCalculation {
            original_price,
            discount_applied,
            final_price,
            promotion_used,
        })
    }

    /// Select the promotion to apply to an order.
    pub async fn find_best_promotion(
        &self,
        context: &OrderContext,
        promo_code: Option<&str>,
    ) -> Option<BestPromotion> {
        if let Some(code) = promo_code {
            match self.promotions.find_by_code(code).await {
                Ok(Some(promotion)) if promotion.is_valid(context) => {
                    if let Some(best) = BestPromotion::new(promotion, context.order_total) {
                        return Some(best);
                    }
                }
                Ok(Some(_)) => debug!(code, "requested promotion does not apply to order"),
                Ok(None) => debug!(code, "requested promotion not found"),
                Err(error) => warn!(code, %error, "failed to look up requested promotion"),
            }
        }

        match self.promotions.list_all().await {
            Ok(promotions) => best_promotion(promotions, context),
            Err(error) => {
                warn!(%error, "failed to list promotions");

                None
            }
        }
    }
}
