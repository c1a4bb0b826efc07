//! Session engine: the single owner of start/stop orchestration.

use std::sync::Arc;

use tracing::{error, info, warn};

use meterhub_core::config::billing::BillingConfig;
use meterhub_core::error::ErrorKind;
use meterhub_core::{AppError, AppResult, Clock};
use meterhub_entity::{BillingRecord, UsageSession};
use meterhub_store::{BillingStore, ResourceRegistry, SessionLedger};

use crate::billing::generator::BillingGenerator;

/// Orchestrates session start and stop against the registry, ledger, and
/// billing store. No other component performs these transitions.
#[derive(Debug, Clone)]
pub struct SessionEngine {
    registry: Arc<ResourceRegistry>,
    ledger: Arc<SessionLedger>,
    billing_store: Arc<BillingStore>,
    clock: Arc<dyn Clock>,
    config: BillingConfig,
}

impl SessionEngine {
    /// Create a session engine over the given stores.
    pub fn new(
        registry: Arc<ResourceRegistry>,
        ledger: Arc<SessionLedger>,
        billing_store: Arc<BillingStore>,
        clock: Arc<dyn Clock>,
        config: BillingConfig,
    ) -> Self {
        Self {
            registry,
            ledger,
            billing_store,
            clock,
            config,
        }
    }

    /// Start a usage session for `user_id` against a resource.
    ///
    /// The capacity check and the session insert are one atomic step in
    /// the ledger, so concurrent starts against the same resource can
    /// never jointly exceed its capacity.
    pub async fn start(&self, resource_id: i64, user_id: String) -> AppResult<UsageSession> {
        if user_id.trim().is_empty() {
            return Err(AppError::validation("User id must not be empty"));
        }

        let resource = self
            .registry
            .get(resource_id)
            .ok_or_else(|| AppError::not_found("Resource not found"))?;

        self.ledger
            .admit(resource_id, resource.capacity, user_id, self.clock.now())
            .await
    }

    /// Stop a usage session, settling its billing record.
    ///
    /// Completion and record creation form one logical transaction: the
    /// price is looked up before the transition (a vanished resource
    /// leaves the session active rather than completed-but-unbilled),
    /// exactly one caller wins the transition, and record persistence is
    /// retried with the session id as its idempotency key.
    pub async fn stop(&self, session_id: i64) -> AppResult<UsageSession> {
        let session = self
            .ledger
            .get(session_id)
            .ok_or_else(|| AppError::not_found("Session not found"))?;
        if !session.is_active {
            return Err(AppError::already_completed("Session already completed"));
        }

        let resource = self
            .registry
            .get(session.resource_id)
            .ok_or_else(|| AppError::not_found("Resource for session not found"))?;
        let price = resource.price_per_minute;

        let completed = self.ledger.complete(session_id, self.clock.now(), price)?;

        let record = BillingGenerator::generate(
            &completed,
            price,
            self.billing_store.allocate_id(),
            self.clock.now(),
        )?;
        let stored = self.append_with_retry(record)?;

        info!(
            session_id,
            billing_record_id = stored.id,
            total_cost = %stored.total_cost,
            "Session stopped and billed"
        );
        Ok(completed)
    }

    /// Append the billing record, retrying transient persistence faults.
    ///
    /// The store deduplicates on the session id, so repeating the append
    /// can never double-bill.
    fn append_with_retry(
        &self,
        record: BillingRecord,
    ) -> AppResult<BillingRecord> {
        let attempts = self.config.persist_retry_attempts.max(1);
        let mut last_err = None;

        for attempt in 1..=attempts {
            match self.billing_store.append(record.clone()) {
                Ok(stored) => return Ok(stored),
                Err(err) if err.kind == ErrorKind::Persistence => {
                    warn!(
                        usage_session_id = record.usage_session_id,
                        attempt, "Billing record persistence failed, retrying"
                    );
                    last_err = Some(err);
                }
                Err(err) => return Err(err),
            }
        }

        error!(
            usage_session_id = record.usage_session_id,
            "Billing record persistence failed after all retries"
        );
        Err(last_err
            .unwrap_or_else(|| AppError::persistence("Billing record could not be persisted")))
    }
}
