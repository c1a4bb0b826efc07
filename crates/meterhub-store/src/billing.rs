//! Billing store of append-only settlement records.

use std::sync::atomic::{AtomicI64, Ordering};

use dashmap::DashMap;
use rust_decimal::Decimal;
use tracing::warn;

use meterhub_core::AppResult;
use meterhub_entity::BillingRecord;

/// Append-only store of billing records.
///
/// Records are never updated or deleted, and concurrent appends need no
/// cross-record ordering. At most one record exists per usage session:
/// appending a second record for the same session returns the stored one
/// unchanged, which makes the engine's stop-transaction retry safe to
/// repeat with the session id as its idempotency key.
#[derive(Debug, Default)]
pub struct BillingStore {
    records: DashMap<i64, BillingRecord>,
    next_id: AtomicI64,
}

impl BillingStore {
    /// Create an empty billing store.
    pub fn new() -> Self {
        Self {
            records: DashMap::new(),
            next_id: AtomicI64::new(1),
        }
    }

    /// Reserve the next record id.
    pub fn allocate_id(&self) -> i64 {
        self.next_id.fetch_add(1, Ordering::SeqCst)
    }

    /// Append a record, deduplicating on the originating session.
    pub fn append(&self, record: BillingRecord) -> AppResult<BillingRecord> {
        if let Some(existing) = self.for_session(record.usage_session_id) {
            warn!(
                usage_session_id = record.usage_session_id,
                existing_record_id = existing.id,
                "Session already settled, keeping existing record"
            );
            return Ok(existing);
        }

        self.records.insert(record.id, record.clone());
        Ok(record)
    }

    /// The settlement record for a session, if one exists.
    pub fn for_session(&self, usage_session_id: i64) -> Option<BillingRecord> {
        self.records
            .iter()
            .find(|r| r.usage_session_id == usage_session_id)
            .map(|r| r.clone())
    }

    /// All records for a user, ordered by id.
    pub fn for_user(&self, user_id: &str) -> Vec<BillingRecord> {
        self.collect(|r| r.user_id == user_id)
    }

    /// All records for a resource, ordered by id.
    pub fn for_resource(&self, resource_id: i64) -> Vec<BillingRecord> {
        self.collect(|r| r.resource_id == resource_id)
    }

    /// Every record in the store, ordered by id.
    pub fn all(&self) -> Vec<BillingRecord> {
        self.collect(|_| true)
    }

    /// Sum of `total_cost` across a user's records.
    pub fn user_total(&self, user_id: &str) -> Decimal {
        self.records
            .iter()
            .filter(|r| r.user_id == user_id)
            .map(|r| r.total_cost)
            .sum()
    }

    fn collect(&self, pred: impl Fn(&BillingRecord) -> bool) -> Vec<BillingRecord> {
        let mut records: Vec<BillingRecord> = self
            .records
            .iter()
            .filter(|r| pred(r))
            .map(|r| r.clone())
            .collect();
        records.sort_by_key(|r| r.id);
        records
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rust_decimal_macros::dec;

    fn record(store: &BillingStore, session_id: i64, user: &str, total: Decimal) -> BillingRecord {
        BillingRecord {
            id: store.allocate_id(),
            usage_session_id: session_id,
            resource_id: 1,
            user_id: user.to_string(),
            duration_minutes: dec!(10),
            price_per_minute: dec!(2.50),
            total_cost: total,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_append_and_query() {
        let store = BillingStore::new();
        store.append(record(&store, 1, "u1", dec!(25.00))).unwrap();
        store.append(record(&store, 2, "u2", dec!(5.00))).unwrap();
        store.append(record(&store, 3, "u1", dec!(1.25))).unwrap();

        assert_eq!(store.all().len(), 3);
        assert_eq!(store.for_user("u1").len(), 2);
        assert_eq!(store.for_resource(1).len(), 3);
    }

    #[test]
    fn test_duplicate_session_keeps_first_record() {
        let store = BillingStore::new();
        let first = store.append(record(&store, 1, "u1", dec!(25.00))).unwrap();
        let second = store.append(record(&store, 1, "u1", dec!(99.00))).unwrap();

        assert_eq!(second.id, first.id);
        assert_eq!(second.total_cost, dec!(25.00));
        assert_eq!(store.all().len(), 1);
    }

    #[test]
    fn test_user_total_sums_costs() {
        let store = BillingStore::new();
        store.append(record(&store, 1, "u1", dec!(25.00))).unwrap();
        store.append(record(&store, 2, "u1", dec!(0.13))).unwrap();
        store.append(record(&store, 3, "u2", dec!(7.00))).unwrap();

        assert_eq!(store.user_total("u1"), dec!(25.13));
        assert_eq!(store.user_total("nobody"), dec!(0));
    }
}
