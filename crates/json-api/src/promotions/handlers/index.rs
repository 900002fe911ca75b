//! Promotion Index Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    extensions::*,
    promotions::{errors::into_status_error, responses::PromotionsResponse},
    state::State,
};

/// Promotion Index Handler
///
/// Returns every promotion in the order it was created.
#[endpoint(tags("promotions"), summary = "List Promotions")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<PromotionsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let promotions = state
        .app
        .promotions
        .list_promotions()
        .await
        .map_err(into_status_error)?;

    Ok(Json(PromotionsResponse {
        promotions: promotions.into_iter().map(Into::into).collect(),
    }))
}

#[cfg(test)]
mod tests {
    use rebate_app::domain::promotions::MockPromotionsService;
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use crate::test_helpers::{barcelona_record, promotions_service};

    use super::*;

    fn make_service(promotions: MockPromotionsService) -> Service {
        promotions_service(promotions, Router::with_path("promotions").get(handler))
    }

    #[tokio::test]
    async fn test_index_preserves_listing_order() -> TestResult {
        let mut promotions = MockPromotionsService::new();

        promotions.expect_list_promotions().once().return_once(|| {
            let mut second = barcelona_record(2);
            second.promotion.code = "SECOND".to_string();

            Ok(vec![barcelona_record(1), second])
        });

        let mut res = TestClient::get("http://example.com/promotions")
            .send(&make_service(promotions))
            .await;

        let body: PromotionsResponse = res.take_json().await?;

        let codes: Vec<&str> = body
            .promotions
            .iter()
            .map(|promotion| promotion.code.as_str())
            .collect();

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(codes, ["BARCELONA30", "SECOND"]);

        Ok(())
    }

    #[tokio::test]
    async fn test_index_empty_returns_empty_list() -> TestResult {
        let mut promotions = MockPromotionsService::new();

        promotions
            .expect_list_promotions()
            .once()
            .return_once(|| Ok(Vec::new()));

        let mut res = TestClient::get("http://example.com/promotions")
            .send(&make_service(promotions))
            .await;

        let body: PromotionsResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert!(body.promotions.is_empty());

        Ok(())
    }
}
