//! Application builder that wires stores, services, and router together.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use tokio::sync::watch;
use tracing::{info, warn};

use meterhub_core::config::AppConfig;
use meterhub_core::{AppError, AppResult, Clock, SystemClock};
use meterhub_service::{BillingService, ResourceService, SessionEngine, SessionService};
use meterhub_store::{BillingStore, ResourceRegistry, SessionLedger};

use crate::router::build_router;
use crate::state::AppState;

/// Construct the full application state over fresh in-memory stores.
///
/// Accepts the clock so tests can drive session durations; production
/// callers pass [`SystemClock`].
pub fn build_state(config: AppConfig, clock: Arc<dyn Clock>) -> AppState {
    let registry = Arc::new(ResourceRegistry::new());
    let ledger = Arc::new(SessionLedger::new());
    let billing_store = Arc::new(BillingStore::new());

    let resource_service = Arc::new(ResourceService::new(
        Arc::clone(&registry),
        Arc::clone(&clock),
    ));
    let session_engine = Arc::new(SessionEngine::new(
        Arc::clone(&registry),
        Arc::clone(&ledger),
        Arc::clone(&billing_store),
        Arc::clone(&clock),
        config.billing.clone(),
    ));
    let session_service = Arc::new(SessionService::new(Arc::clone(&ledger)));
    let billing_service = Arc::new(BillingService::new(Arc::clone(&billing_store)));

    AppState {
        config: Arc::new(config),
        resource_service,
        session_engine,
        session_service,
        billing_service,
    }
}

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    build_router(state)
}

/// Runs the MeterHub server with the given configuration.
///
/// On shutdown, in-flight requests get `server.shutdown_grace_seconds`
/// to finish; connections still open after that are abandoned.
pub async fn run_server(config: AppConfig) -> AppResult<()> {
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let grace = Duration::from_secs(config.server.shutdown_grace_seconds);
    let state = build_state(config, Arc::new(SystemClock));
    let app = build_app(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    info!(%addr, "MeterHub listening");

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let server = async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                shutdown_signal().await;
                let _ = shutdown_tx.send(true);
            })
            .await
    };

    tokio::select! {
        result = server => {
            result.map_err(|e| AppError::internal(format!("Server error: {e}")))?;
        }
        _ = grace_elapsed(shutdown_rx, grace) => {
            warn!(
                grace_seconds = grace.as_secs(),
                "Shutdown grace period elapsed, abandoning open connections"
            );
        }
    }

    Ok(())
}

/// Resolves once shutdown has been signalled and the grace period has
/// passed.
async fn grace_elapsed(mut shutdown_rx: watch::Receiver<bool>, grace: Duration) {
    // A closed channel counts as a signal; the server is going down
    // either way.
    let _ = shutdown_rx.wait_for(|fired| *fired).await;
    tokio::time::sleep(grace).await;
}

/// Resolves when the process receives Ctrl-C.
async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(%err, "Failed to install Ctrl-C handler");
    }
    info!("Shutdown signal received");
}
