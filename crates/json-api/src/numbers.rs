//! Conversions between JSON numbers and decimals.

use rust_decimal::{
    Decimal,
    prelude::{FromPrimitive, ToPrimitive},
};
use salvo::http::StatusError;

/// Convert a JSON number into a decimal, rejecting values that have no
/// decimal representation.
pub(crate) fn to_decimal(field: &str, value: f64) -> Result<Decimal, StatusError> {
    Decimal::from_f64(value)
        .ok_or_else(|| StatusError::bad_request().brief(format!("invalid {field}: {value}")))
}

pub(crate) fn to_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}
