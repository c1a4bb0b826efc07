//! Route handlers organized by domain.

pub mod billing;
pub mod health;
pub mod resource;
pub mod session;
