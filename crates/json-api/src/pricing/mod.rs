//! Pricing

pub(crate) mod errors;
mod handlers;
pub(crate) mod requests;
pub(crate) mod responses;

pub(crate) use handlers::*;
