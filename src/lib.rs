//! Rebate
//!
//! Rebate prices customer orders: it sums an order's service lines and
//! applies the single best promotion, either the promo code the customer
//! asked for or, failing that, the valid promotion with the largest discount.

pub mod discounts;
pub mod fixtures;
pub mod orders;
pub mod prelude;
pub mod pricing;
pub mod promotions;
pub mod rules;
