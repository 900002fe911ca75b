//! Pricing

mod errors;
pub mod service;

pub use errors::PricingServiceError;
pub use service::*;
