//! Pricing Errors

use salvo::http::StatusError;

use rebate_app::domain::pricing::PricingServiceError;

pub(crate) fn into_status_error(error: PricingServiceError) -> StatusError {
    match error {
        PricingServiceError::Calculation(source) => {
            StatusError::bad_request().brief(source.to_string())
        }
    }
}
