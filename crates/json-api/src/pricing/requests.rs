//! Pricing Requests

use salvo::{http::StatusError, oapi::ToSchema};
use serde::{Deserialize, Serialize};

use rebate::orders::{Order, ServiceLine};

use crate::numbers::to_decimal;

/// A priced service on an order.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub(crate) struct ServiceRequest {
    /// Service identifier
    pub id: i64,

    /// Service display name
    pub name: String,

    /// Service price
    pub price: f64,
}

/// Calculate Price Request
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub(crate) struct CalculatePriceRequest {
    /// Customer id
    pub user_id: i64,

    /// Services making up the order
    pub services: Vec<ServiceRequest>,

    /// Promo code to apply, if any
    #[serde(default)]
    pub promo_code: Option<String>,

    /// Customer location, if known
    #[serde(default)]
    pub location: Option<String>,
}

impl TryFrom<CalculatePriceRequest> for Order {
    type Error = StatusError;

    fn try_from(request: CalculatePriceRequest) -> Result<Self, Self::Error> {
        let services = request
            .services
            .into_iter()
            .map(|service| {
                Ok(ServiceLine::new(
                    service.id,
                    service.name,
                    to_decimal("price", service.price)?,
                ))
            })
            .collect::<Result<Vec<_>, StatusError>>()?;

        Ok(Order {
            services,
            promo_code: request.promo_code,
            user_location: request.location,
            user_id: Some(request.user_id),
        })
    }
}
