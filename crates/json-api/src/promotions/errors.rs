//! Promotion Errors

use salvo::http::StatusError;
use tracing::error;

use rebate_app::domain::promotions::PromotionsServiceError;

pub(crate) fn into_status_error(error: PromotionsServiceError) -> StatusError {
    match error {
        PromotionsServiceError::DuplicateCode => {
            StatusError::conflict().brief("Promotion code already exists")
        }
        PromotionsServiceError::InvalidPromotion(source) => {
            StatusError::bad_request().brief(source.to_string())
        }
        PromotionsServiceError::MissingRequiredData | PromotionsServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid promotion payload")
        }
        PromotionsServiceError::NotFound => StatusError::not_found().brief("Promotion not found"),
        PromotionsServiceError::Fixture(source) => {
            error!("failed to load sample promotions: {source}");

            StatusError::internal_server_error()
        }
        PromotionsServiceError::Sql(source) => {
            error!("failed to process promotion: {source}");

            StatusError::internal_server_error()
        }
    }
}
