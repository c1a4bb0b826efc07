//! Session listing queries.

use std::sync::Arc;

use meterhub_entity::UsageSession;
use meterhub_store::SessionLedger;

/// Read-only access to the session ledger.
///
/// These are the explicit query operations the UI polls; the core makes
/// no assumption about polling cadence, and reads never take the
/// ledger's admission gates.
#[derive(Debug, Clone)]
pub struct SessionService {
    ledger: Arc<SessionLedger>,
}

impl SessionService {
    /// Create a session query service over the given ledger.
    pub fn new(ledger: Arc<SessionLedger>) -> Self {
        Self { ledger }
    }

    /// Every session, active and completed, ordered by start time.
    pub fn list_all(&self) -> Vec<UsageSession> {
        self.ledger.all()
    }

    /// All sessions for one resource, ordered by start time.
    pub fn list_for_resource(&self, resource_id: i64) -> Vec<UsageSession> {
        self.ledger.for_resource(resource_id)
    }

    /// All sessions for one user, ordered by start time.
    pub fn list_for_user(&self, user_id: &str) -> Vec<UsageSession> {
        self.ledger.for_user(user_id)
    }
}
