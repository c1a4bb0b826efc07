//! # meterhub-core
//!
//! Core crate for MeterHub. Contains configuration schemas, the clock
//! abstraction, and the unified error system.
//!
//! This crate has **no** internal dependencies on other MeterHub crates.

pub mod clock;
pub mod config;
pub mod error;
pub mod result;

pub use clock::{Clock, SystemClock};
pub use error::AppError;
pub use result::AppResult;
