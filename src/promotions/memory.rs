//! In-memory promotion store.

use std::convert::Infallible;

use crate::{pricing::PromotionRepository, promotions::Promotion};

/// Promotions held in memory, listed in insertion order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPromotions {
    promotions: Vec<Promotion>,
}

impl InMemoryPromotions {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a promotion after all existing ones.
    pub fn push(&mut self, promotion: Promotion) {
        self.promotions.push(promotion);
    }

    /// Number of stored promotions.
    pub fn len(&self) -> usize {
        self.promotions.len()
    }

    /// Whether the store holds no promotions.
    pub fn is_empty(&self) -> bool {
        self.promotions.is_empty()
    }
}

impl FromIterator<Promotion> for InMemoryPromotions {
    fn from_iter<I: IntoIterator<Item = Promotion>>(iter: I) -> Self {
        Self {
            promotions: iter.into_iter().collect(),
        }
    }
}

impl PromotionRepository for InMemoryPromotions {
    type Error = Infallible;

    async fn find_by_code(&self, code: &str) -> Result<Option<Promotion>, Self::Error> {
        Ok(self
            .promotions
            .iter()
            .find(|promotion| promotion.code == code)
            .cloned())
    }

    async fn list_all(&self) -> Result<Vec<Promotion>, Self::Error> {
        Ok(self.promotions.clone())
    }
}
