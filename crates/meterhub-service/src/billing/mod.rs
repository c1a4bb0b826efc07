//! Billing derivation and queries.

pub mod generator;
pub mod service;

pub use generator::BillingGenerator;
pub use service::BillingService;
