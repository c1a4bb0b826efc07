//! # meterhub-entity
//!
//! Domain entity models for MeterHub. Every struct in this crate represents
//! a stored record or a domain value object. All entities derive `Debug`,
//! `Clone`, `Serialize`, and `Deserialize`; money and duration fields use
//! [`rust_decimal::Decimal`] so billing arithmetic never touches binary
//! floating point.

pub mod billing;
pub mod resource;
pub mod session;

pub use billing::BillingRecord;
pub use resource::Resource;
pub use session::UsageSession;
