//! Usage session domain entities.

pub mod model;

pub use model::UsageSession;
