//! Application state shared across all handlers.

use std::sync::Arc;

use meterhub_core::config::AppConfig;
use meterhub_service::{BillingService, ResourceService, SessionEngine, SessionService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Resource CRUD service.
    pub resource_service: Arc<ResourceService>,
    /// Session start/stop engine.
    pub session_engine: Arc<SessionEngine>,
    /// Session queries.
    pub session_service: Arc<SessionService>,
    /// Billing queries.
    pub billing_service: Arc<BillingService>,
}
