//! Billing domain entities.

pub mod model;

pub use model::{BillingRecord, round_to_cents};
