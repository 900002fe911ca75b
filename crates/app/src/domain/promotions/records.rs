//! Promotions Records

use rebate::promotions::Promotion;

/// Promotion Record
#[derive(Debug, Clone, PartialEq)]
pub struct PromotionRecord {
    /// Database identifier; promotions are listed in `id` order.
    pub id: i64,

    /// Stored promotion.
    pub promotion: Promotion,
}

impl From<PromotionRecord> for Promotion {
    fn from(record: PromotionRecord) -> Self {
        record.promotion
    }
}
