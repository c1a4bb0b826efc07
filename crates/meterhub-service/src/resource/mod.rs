//! Resource CRUD.

pub mod service;

pub use service::ResourceService;
