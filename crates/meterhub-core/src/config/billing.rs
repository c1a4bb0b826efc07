//! Billing engine configuration.

use serde::{Deserialize, Serialize};

/// Settings for the stop-transaction billing step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BillingConfig {
    /// How many times the engine retries persisting a billing record
    /// after a session has been completed, before surfacing a fatal
    /// persistence error. The session id is the idempotency key across
    /// retries.
    #[serde(default = "default_persist_retry_attempts")]
    pub persist_retry_attempts: u32,
}

impl Default for BillingConfig {
    fn default() -> Self {
        Self {
            persist_retry_attempts: default_persist_retry_attempts(),
        }
    }
}

fn default_persist_retry_attempts() -> u32 {
    3
}
