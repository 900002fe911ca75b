//! Discounts

use std::fmt;

use rust_decimal::Decimal;

/// How a promotion's `value` turns into a discount.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DiscountType {
    /// `value` is an absolute amount.
    Fixed,

    /// `value` is a percentage of the order total.
    Percentage,

    /// Any other stored type; never discounts anything.
    Other(String),
}

impl DiscountType {
    /// Stored representation of the discount type.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Fixed => "fixed",
            Self::Percentage => "percentage",
            Self::Other(other) => other,
        }
    }

    /// Discount granted by `value` on an order totalling `order_total`, or
    /// `None` when it cannot be represented.
    ///
    /// Fixed discounts are not capped at the order total.
    #[must_use]
    pub fn discount(&self, value: Decimal, order_total: Decimal) -> Option<Decimal> {
        match self {
            Self::Fixed => Some(value),
            Self::Percentage => value
                .checked_div(Decimal::ONE_HUNDRED)?
                .checked_mul(order_total),
            Self::Other(_) => Some(Decimal::ZERO),
        }
    }
}

impl From<&str> for DiscountType {
    fn from(value: &str) -> Self {
        match value {
            "fixed" => Self::Fixed,
            "percentage" => Self::Percentage,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for DiscountType {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl fmt::Display for DiscountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
