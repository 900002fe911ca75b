//! Get Promotion Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{
    extensions::*,
    promotions::{errors::into_status_error, responses::PromotionResponse},
    state::State,
};

/// Get Promotion Handler
///
/// Returns the promotion stored under exactly this code.
#[endpoint(
    tags("promotions"),
    summary = "Get Promotion",
    responses(
        (status_code = StatusCode::OK, description = "Promotion found"),
        (status_code = StatusCode::NOT_FOUND, description = "Promotion not found"),
    ),
)]
pub(crate) async fn handler(
    code: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<PromotionResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let record = state
        .app
        .promotions
        .find_promotion(&code.into_inner())
        .await
        .map_err(into_status_error)?;

    Ok(Json(record.into()))
}
