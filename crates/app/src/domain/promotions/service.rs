//! Promotions Service

use async_trait::async_trait;
use mockall::automock;
use rebate::{fixtures::sample_promotions, promotions::NewPromotion};
use sqlx::PgPool;
use tracing::{Span, info};

use crate::domain::promotions::{
    PromotionsServiceError, records::PromotionRecord, repository::PgPromotionsRepository,
};

#[derive(Debug, Clone)]
pub struct PgPromotionsService {
    pool: PgPool,
    promotions: PgPromotionsRepository,
}

impl PgPromotionsService {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self {
            promotions: PgPromotionsRepository::new(pool.clone()),
            pool,
        }
    }
}

#[async_trait]
impl PromotionsService for PgPromotionsService {
    #[tracing::instrument(
        name = "promotions.service.create_promotion",
        skip(self, promotion),
        fields(
            code = %promotion.code,
            discount_type = %promotion.discount_type,
            rule_type = %promotion.rule_type,
            promotion_id = tracing::field::Empty
        ),
        err
    )]
    async fn create_promotion(
        &self,
        promotion: NewPromotion,
    ) -> Result<PromotionRecord, PromotionsServiceError> {
        promotion.validate()?;

        let mut tx = self.pool.begin().await?;

        let record = self.promotions.create_promotion(&mut tx, &promotion).await?;

        tx.commit().await?;

        Span::current().record("promotion_id", record.id);

        info!(promotion_id = record.id, "created promotion");

        Ok(record)
    }

    #[tracing::instrument(name = "promotions.service.find_promotion", skip(self), err)]
    async fn find_promotion(&self, code: &str) -> Result<PromotionRecord, PromotionsServiceError> {
        self.promotions
            .find_promotion_by_code(code)
            .await?
            .ok_or(PromotionsServiceError::NotFound)
    }

    #[tracing::instrument(name = "promotions.service.list_promotions", skip(self), err)]
    async fn list_promotions(&self) -> Result<Vec<PromotionRecord>, PromotionsServiceError> {
        Ok(self.promotions.list_promotions().await?)
    }

    #[tracing::instrument(
        name = "promotions.service.seed_sample_promotions",
        skip(self),
        fields(inserted = tracing::field::Empty),
        err
    )]
    async fn seed_sample_promotions(&self) -> Result<usize, PromotionsServiceError> {
        let samples = sample_promotions()?;

        let mut tx = self.pool.begin().await?;

        let existing = self.promotions.count_promotions(&mut tx).await?;

        if existing > 0 {
            info!(existing, "promotions already present, skipping sample data");

            return Ok(0);
        }

        for promotion in &samples {
            self.promotions.create_promotion(&mut tx, promotion).await?;
        }

        tx.commit().await?;

        let inserted = samples.len();

        Span::current().record("inserted", inserted);

        info!(inserted, "seeded sample promotions");

        Ok(inserted)
    }
}

#[automock]
#[async_trait]
pub trait PromotionsService: Send + Sync {
    /// Validate and store a new promotion.
    async fn create_promotion(
        &self,
        promotion: NewPromotion,
    ) -> Result<PromotionRecord, PromotionsServiceError>;

    /// The promotion stored under exactly `code`.
    async fn find_promotion(&self, code: &str) -> Result<PromotionRecord, PromotionsServiceError>;

    /// Every stored promotion, in insertion order.
    async fn list_promotions(&self) -> Result<Vec<PromotionRecord>, PromotionsServiceError>;

    /// Insert the bundled sample promotions when no promotions exist yet.
    ///
    /// Returns how many promotions were inserted.
    async fn seed_sample_promotions(&self) -> Result<usize, PromotionsServiceError>;
}
