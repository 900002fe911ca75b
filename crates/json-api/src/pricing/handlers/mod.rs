//! Pricing Handlers

pub(crate) mod calculate;
