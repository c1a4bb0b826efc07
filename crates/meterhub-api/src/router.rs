//! Route definitions for the MeterHub HTTP API.
//!
//! All routes are organized by domain. The router receives `AppState` and
//! passes it to all handlers via Axum's `State` extractor.

use axum::{
    Router,
    routing::{delete, get, post, put},
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware::cors::build_cors_layer;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = build_cors_layer(&state.config.server.cors);

    Router::new()
        .merge(resource_routes())
        .merge(session_routes())
        .merge(billing_routes())
        .merge(health_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Resource CRUD endpoints
fn resource_routes() -> Router<AppState> {
    Router::new()
        .route("/resources", get(handlers::resource::list_resources))
        .route("/resources", post(handlers::resource::create_resource))
        .route("/resources/{id}", get(handlers::resource::get_resource))
        .route("/resources/{id}", put(handlers::resource::update_resource))
        .route(
            "/resources/{id}",
            delete(handlers::resource::delete_resource),
        )
}

/// Session lifecycle and query endpoints
fn session_routes() -> Router<AppState> {
    Router::new()
        .route("/usage-sessions", get(handlers::session::list_sessions))
        .route(
            "/usage-sessions/resource/{resource_id}",
            get(handlers::session::list_sessions_for_resource),
        )
        .route(
            "/usage-sessions/user/{user_id}",
            get(handlers::session::list_sessions_for_user),
        )
        .route(
            "/usage-sessions/start",
            post(handlers::session::start_session),
        )
        .route(
            "/usage-sessions/stop",
            post(handlers::session::stop_session),
        )
}

/// Billing record endpoints
fn billing_routes() -> Router<AppState> {
    Router::new()
        .route("/billing", get(handlers::billing::list_billing))
        .route(
            "/billing/user/{user_id}",
            get(handlers::billing::list_billing_for_user),
        )
        .route(
            "/billing/user/{user_id}/total",
            get(handlers::billing::user_billing_total),
        )
        .route(
            "/billing/resource/{resource_id}",
            get(handlers::billing::list_billing_for_resource),
        )
}

/// Health endpoint
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
