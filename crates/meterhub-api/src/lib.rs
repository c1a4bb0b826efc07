//! # meterhub-api
//!
//! HTTP API layer for MeterHub built on Axum.
//!
//! Provides all REST endpoints, request DTOs with validation, CORS
//! middleware, and the `AppError` → HTTP response mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, build_state, run_server};
pub use state::AppState;
