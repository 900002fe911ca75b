//! Promotions Repository

use jiff_sqlx::{Date as SqlxDate, Timestamp as SqlxTimestamp};
use rebate::{
    discounts::DiscountType,
    pricing::PromotionRepository,
    promotions::{NewPromotion, Promotion},
    rules::RuleParams,
};
use rust_decimal::Decimal;
use serde_json::Value;
use sqlx::{
    FromRow, PgPool, Postgres, Row, Transaction, postgres::PgRow, query_as, query_scalar,
    types::Json,
};

use crate::domain::promotions::records::PromotionRecord;

const CREATE_PROMOTION_SQL: &str = include_str!("sql/create_promotion.sql");
const FIND_PROMOTION_BY_CODE_SQL: &str = include_str!("sql/find_promotion_by_code.sql");
const LIST_PROMOTIONS_SQL: &str = include_str!("sql/list_promotions.sql");
const COUNT_PROMOTIONS_SQL: &str = include_str!("sql/count_promotions.sql");

#[derive(Debug, Clone)]
pub struct PgPromotionsRepository {
    pool: PgPool,
}

impl PgPromotionsRepository {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub(crate) async fn create_promotion(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        promotion: &NewPromotion,
    ) -> Result<PromotionRecord, sqlx::Error> {
        query_as(CREATE_PROMOTION_SQL)
            .bind(&promotion.code)
            .bind(promotion.discount_type.as_str())
            .bind(promotion.value)
            .bind(&promotion.rule_type)
            .bind(Json(&promotion.rule_params))
            .bind(promotion.expiry_date.map(SqlxDate::from))
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn count_promotions(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<i64, sqlx::Error> {
        query_scalar(COUNT_PROMOTIONS_SQL).fetch_one(&mut **tx).await
    }

    pub(crate) async fn find_promotion_by_code(
        &self,
        code: &str,
    ) -> Result<Option<PromotionRecord>, sqlx::Error> {
        query_as(FIND_PROMOTION_BY_CODE_SQL)
            .bind(code)
            .fetch_optional(&self.pool)
            .await
    }

    pub(crate) async fn list_promotions(&self) -> Result<Vec<PromotionRecord>, sqlx::Error> {
        query_as(LIST_PROMOTIONS_SQL).fetch_all(&self.pool).await
    }
}

impl PromotionRepository for PgPromotionsRepository {
    type Error = sqlx::Error;

    async fn find_by_code(&self, code: &str) -> Result<Option<Promotion>, Self::Error> {
        Ok(self.find_promotion_by_code(code).await?.map(Promotion::from))
    }

    async fn list_all(&self) -> Result<Vec<Promotion>, Self::Error> {
        Ok(self
            .list_promotions()
            .await?
            .into_iter()
            .map(Promotion::from)
            .collect())
    }
}

impl<'r> FromRow<'r, PgRow> for PromotionRecord {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        let discount_type: String = row.try_get("discount_type")?;
        let value: Decimal = row.try_get("value")?;
        let Json(rule_params): Json<Value> = row.try_get("rule_params")?;
        let expiry_date: Option<SqlxDate> = row.try_get("expiry_date")?;
        let created_at: SqlxTimestamp = row.try_get("created_at")?;

        Ok(Self {
            id: row.try_get("id")?,
            promotion: Promotion {
                code: row.try_get("code")?,
                discount_type: DiscountType::from(discount_type),
                value,
                rule_type: row.try_get("rule_type")?,
                rule_params: into_rule_params(rule_params),
                expiry_date: expiry_date.map(SqlxDate::to_jiff),
                created_at: created_at.to_jiff(),
            },
        })
    }
}

/// Non-object parameters are read as empty, leaving the rule to reject them.
fn into_rule_params(value: Value) -> RuleParams {
    match value {
        Value::Object(params) => params,
        _ => RuleParams::new(),
    }
}
