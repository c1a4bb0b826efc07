//! Session ledger, the authoritative usage session store.
//!
//! The ledger owns every [`UsageSession`] and enforces the two lifecycle
//! invariants: admission never exceeds a resource's capacity, and each
//! session transitions active→completed exactly once.

use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use dashmap::DashMap;
use tokio::sync::Mutex;
use tracing::{debug, info};

use meterhub_core::{AppError, AppResult};
use meterhub_entity::UsageSession;

/// In-memory session ledger with per-resource admission gates.
///
/// Admission (capacity check + insert) runs under a `tokio::sync::Mutex`
/// scoped to the resource, so concurrent starts against the same resource
/// are linearized while starts against different resources proceed in
/// parallel. Completion is linearized per session by the session map's
/// entry lock. There is no global lock; read queries only take shard
/// read locks.
#[derive(Debug, Default)]
pub struct SessionLedger {
    sessions: DashMap<i64, UsageSession>,
    gates: DashMap<i64, Arc<Mutex<()>>>,
    next_id: AtomicI64,
}

impl SessionLedger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self {
            sessions: DashMap::new(),
            gates: DashMap::new(),
            next_id: AtomicI64::new(1),
        }
    }

    /// The admission gate for one resource, created on first use.
    fn gate(&self, resource_id: i64) -> Arc<Mutex<()>> {
        self.gates
            .entry(resource_id)
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }

    /// Number of sessions currently active for a resource.
    ///
    /// Callers that need the count for an admission decision must go
    /// through [`admit`](Self::admit); a bare count is stale the moment
    /// it is returned.
    pub fn count_active(&self, resource_id: i64) -> u32 {
        self.sessions
            .iter()
            .filter(|s| s.resource_id == resource_id && s.is_active)
            .count() as u32
    }

    /// Atomically check capacity and insert a new active session.
    ///
    /// This is the single check-and-reserve step: the count and the insert
    /// happen under the resource's admission gate, so concurrent admits
    /// can never jointly exceed `capacity`.
    pub async fn admit(
        &self,
        resource_id: i64,
        capacity: u32,
        user_id: String,
        now: DateTime<Utc>,
    ) -> AppResult<UsageSession> {
        let gate = self.gate(resource_id);
        let _guard = gate.lock().await;

        let active = self.count_active(resource_id);
        if active >= capacity {
            debug!(
                resource_id,
                active, capacity, "Admission denied, resource at capacity"
            );
            return Err(AppError::capacity_exceeded(format!(
                "Resource at capacity. Active sessions: {active}/{capacity}"
            )));
        }

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let session = UsageSession::started(id, resource_id, user_id, now);
        self.sessions.insert(id, session.clone());

        info!(
            session_id = id,
            resource_id,
            active = active + 1,
            capacity,
            "Session admitted"
        );
        Ok(session)
    }

    /// Atomically transition a session from active to completed.
    ///
    /// Exactly one caller succeeds; every other caller observes the
    /// already-completed state. Duration and cost are computed inside the
    /// entry lock, so the transition and its derived fields are one step
    /// and `end_time`/`duration_minutes`/`cost` are set if and only if
    /// the session is inactive.
    pub fn complete(
        &self,
        session_id: i64,
        end_time: DateTime<Utc>,
        price_per_minute: Decimal,
    ) -> AppResult<UsageSession> {
        let mut entry = self
            .sessions
            .get_mut(&session_id)
            .ok_or_else(|| AppError::not_found("Session not found"))?;

        if !entry.is_active {
            debug!(session_id, "Duplicate stop rejected");
            return Err(AppError::already_completed("Session already completed"));
        }

        entry.complete(end_time, price_per_minute);
        info!(session_id, resource_id = entry.resource_id, "Session completed");
        Ok(entry.clone())
    }

    /// Look up a session by id.
    pub fn get(&self, session_id: i64) -> Option<UsageSession> {
        self.sessions.get(&session_id).map(|s| s.clone())
    }

    /// Active sessions for a resource, ordered by start time.
    pub fn active_for_resource(&self, resource_id: i64) -> Vec<UsageSession> {
        self.collect(|s| s.resource_id == resource_id && s.is_active)
    }

    /// All sessions for a resource, ordered by start time.
    pub fn for_resource(&self, resource_id: i64) -> Vec<UsageSession> {
        self.collect(|s| s.resource_id == resource_id)
    }

    /// All sessions for a user, ordered by start time.
    pub fn for_user(&self, user_id: &str) -> Vec<UsageSession> {
        self.collect(|s| s.user_id == user_id)
    }

    /// Every session in the ledger, ordered by start time.
    pub fn all(&self) -> Vec<UsageSession> {
        self.collect(|_| true)
    }

    fn collect(&self, pred: impl Fn(&UsageSession) -> bool) -> Vec<UsageSession> {
        let mut sessions: Vec<UsageSession> = self
            .sessions
            .iter()
            .filter(|s| pred(s))
            .map(|s| s.clone())
            .collect();
        sessions.sort_by_key(|s| (s.start_time, s.id));
        sessions
    }
}
