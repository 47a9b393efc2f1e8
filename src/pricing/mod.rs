//! Pricing engine module for the diamond calculator.
//!
//! Maps structured diamond descriptions to price estimates using a fixed
//! multiplier model, and exposes it over HTTP.

pub mod calculators;
pub mod models;
pub mod requests;
pub mod responses;
pub mod routes;
pub mod services;
pub mod tables;
pub mod validation;

// Re-export commonly used items
pub use calculators::{price_batch, price_item, round_money, BASE_PRICE_PER_CARAT};
pub use models::{DiamondDescriptor, PricingMode, PricingResult};
pub use routes::router;
pub use services::{PricingError, PricingSettings};
pub use validation::ValidationError;
