//! Billing record queries.

use std::sync::Arc;

use rust_decimal::Decimal;

use meterhub_entity::BillingRecord;
use meterhub_store::BillingStore;

/// Read-only access to settled billing records.
#[derive(Debug, Clone)]
pub struct BillingService {
    store: Arc<BillingStore>,
}

impl BillingService {
    /// Create a billing query service over the given store.
    pub fn new(store: Arc<BillingStore>) -> Self {
        Self { store }
    }

    /// All billing records.
    pub fn list_all(&self) -> Vec<BillingRecord> {
        self.store.all()
    }

    /// Billing records for one user.
    pub fn list_for_user(&self, user_id: &str) -> Vec<BillingRecord> {
        self.store.for_user(user_id)
    }

    /// Billing records for one resource.
    pub fn list_for_resource(&self, resource_id: i64) -> Vec<BillingRecord> {
        self.store.for_resource(resource_id)
    }

    /// Total amount a user has been billed across all records.
    ///
    /// Zero for unknown users; an empty history is not an error.
    pub fn user_total(&self, user_id: &str) -> Decimal {
        self.store.user_total(user_id)
    }
}
