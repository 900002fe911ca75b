//! App Context

use std::sync::Arc;

use sqlx::migrate::MigrateError;
use thiserror::Error;

use crate::{
    database::{self, RetryPolicy},
    domain::{
        pricing::{PgPricingService, PricingService},
        promotions::{PgPromotionsService, PromotionsService},
    },
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database: {0}")]
    Database(#[source] sqlx::Error),

    #[error("failed to run database migrations: {0}")]
    Migration(#[source] MigrateError),
}

#[derive(Clone)]
pub struct AppContext {
    pub promotions: Arc<dyn PromotionsService>,
    pub pricing: Arc<dyn PricingService>,
}

impl AppContext {
    /// Build application context from a database URL, applying any pending
    /// migrations before returning.
    ///
    /// # Errors
    ///
    /// Returns an error when no connection can be established within `retry`
    /// or when a migration fails.
    pub async fn from_database_url(url: &str, retry: RetryPolicy) -> Result<Self, AppInitError> {
        let pool = database::connect_with_retry(url, retry)
            .await
            .map_err(AppInitError::Database)?;

        database::migrate(&pool)
            .await
            .map_err(AppInitError::Migration)?;

        Ok(Self {
            promotions: Arc::new(PgPromotionsService::new(pool.clone())),
            pricing: Arc::new(PgPricingService::new(pool)),
        })
    }
}
