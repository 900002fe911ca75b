//! Rebate Domain Concerns

pub mod pricing;
pub mod promotions;
