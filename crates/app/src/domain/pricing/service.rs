//! Pricing Service

use async_trait::async_trait;
use mockall::automock;
use rebate::{
    orders::Order,
    pricing::{PriceCalculation, PricingEngine},
};
use sqlx::PgPool;

use crate::domain::{pricing::PricingServiceError, promotions::PgPromotionsRepository};

#[derive(Debug, Clone)]
pub struct PgPricingService {
    engine: PricingEngine<PgPromotionsRepository>,
}

impl PgPricingService {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self {
            engine: PricingEngine::new(PgPromotionsRepository::new(pool)),
        }
    }
}

#[async_trait]
impl PricingService for PgPricingService {
    #[tracing::instrument(name = "pricing.service.calculate_price", skip(self, order), err)]
    async fn calculate_price(
        &self,
        order: Order,
    ) -> Result<PriceCalculation, PricingServiceError> {
        Ok(self.engine.calculate_final_price(&order).await?)
    }
}

#[automock]
#[async_trait]
pub trait PricingService: Send + Sync {
    /// Price an order against the stored promotions as of today.
    async fn calculate_price(
        &self,
        order: Order,
    ) -> Result<PriceCalculation, PricingServiceError>;
}
