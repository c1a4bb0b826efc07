//! Session lifecycle orchestration and queries.

pub mod engine;
pub mod service;

pub use engine::SessionEngine;
pub use service::SessionService;
