//! Orders
//!
//! The per-request facts a price calculation works from.

use jiff::civil::Date;
use rust_decimal::Decimal;

/// A priced service line on an order.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceLine {
    /// Service identifier.
    pub id: i64,

    /// Service display name.
    pub name: String,

    /// Line price.
    pub price: Decimal,
}

impl ServiceLine {
    /// Create a new service line.
    pub fn new(id: i64, name: impl Into<String>, price: Decimal) -> Self {
        Self {
            id,
            name: name.into(),
            price,
        }
    }
}

/// An order to be priced.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Order {
    /// Service lines making up the order.
    pub services: Vec<ServiceLine>,

    /// Promo code explicitly requested by the customer.
    pub promo_code: Option<String>,

    /// Customer location, if known.
    pub user_location: Option<String>,

    /// Customer id, if known.
    pub user_id: Option<i64>,
}

impl Order {
    /// Create an order from its service lines.
    #[must_use]
    pub fn new(services: Vec<ServiceLine>) -> Self {
        Self {
            services,
            ..Self::default()
        }
    }

    /// Request a specific promo code.
    #[must_use]
    pub fn with_promo_code(mut self, promo_code: impl Into<String>) -> Self {
        self.promo_code = Some(promo_code.into());
        self
    }

    /// Set the customer location.
    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.user_location = Some(location.into());
        self
    }

    /// Set the customer id.
    #[must_use]
    pub fn with_user_id(mut self, user_id: i64) -> Self {
        self.user_id = Some(user_id);
        self
    }

    /// Requested promo code, ignoring empty strings.
    pub fn requested_code(&self) -> Option<&str> {
        self.promo_code.as_deref().filter(|code| !code.is_empty())
    }
}

/// Facts promotion rules are evaluated against.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderContext {
    /// Sum of all service line prices.
    pub order_total: Decimal,

    /// Customer location, if known.
    pub user_location: Option<String>,

    /// Customer id, if known.
    pub user_id: Option<i64>,

    /// Calendar date the order is evaluated on.
    pub date: Date,
}
