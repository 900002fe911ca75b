//! Depot helpers

use std::any::Any;

use salvo::prelude::{Depot, StatusError};
use tracing::error;

pub(crate) trait DepotExt {
    /// Fetch injected state, failing the request with a 500 when it is missing.
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError>;
}

impl DepotExt for Depot {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError> {
        self.obtain::<T>().map_err(|_missing| {
            error!(
                state = std::any::type_name::<T>(),
                "state was not injected into the depot"
            );

            StatusError::internal_server_error().brief("Service state unavailable")
        })
    }
}

#[cfg(test)]
mod tests {
    use salvo::{prelude::*, test::TestClient};

    use super::*;

    #[handler]
    async fn needs_state(depot: &mut Depot) -> Result<&'static str, StatusError> {
        let value = depot.obtain_or_500::<u32>()?;

        Ok(if *value == 7 { "seven" } else { "other" })
    }

    #[tokio::test]
    async fn missing_state_is_a_500() {
        let router = Router::new().get(needs_state);

        let res = TestClient::get("http://example.com/")
            .send(&Service::new(router))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));
    }

    #[tokio::test]
    async fn injected_state_is_returned() {
        let router = Router::new()
            .hoop(salvo::affix_state::inject(7_u32))
            .get(needs_state);

        let res = TestClient::get("http://example.com/")
            .send(&Service::new(router))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));
    }
}
