//! Pricing service errors.

use rebate::pricing::CalculationError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PricingServiceError {
    #[error(transparent)]
    Calculation(#[from] CalculationError),
}
