//! App Router

use salvo::Router;

use crate::{healthcheck, pricing, promotions};

pub(crate) fn app_router() -> Router {
    Router::new()
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(Router::with_path("calculate-price").post(pricing::calculate::handler))
        .push(
            Router::with_path("promotions")
                .get(promotions::index::handler)
                .post(promotions::create::handler)
                .push(Router::with_path("{code}").get(promotions::get::handler)),
        )
}
