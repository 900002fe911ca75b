//! Calculate Price Handler

use std::sync::Arc;

use salvo::{oapi::extract::JsonBody, prelude::*};

use rebate::orders::Order;

use crate::{
    extensions::*,
    pricing::{
        errors::into_status_error, requests::CalculatePriceRequest,
        responses::PriceCalculationResponse,
    },
    state::State,
};

/// Calculate Price Handler
///
/// Prices an order, applying the requested promo code when it is valid and
/// otherwise the best valid promotion.
#[endpoint(
    tags("pricing"),
    summary = "Calculate Price",
    responses(
        (status_code = StatusCode::OK, description = "Order priced"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CalculatePriceRequest>,
    depot: &mut Depot,
) -> Result<Json<PriceCalculationResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let order = Order::try_from(json.into_inner())?;

    let calculation = state
        .app
        .pricing
        .calculate_price(order)
        .await
        .map_err(into_status_error)?;

    Ok(Json(calculation.into()))
}
