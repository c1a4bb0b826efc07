//! Usage session entity model.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::billing::round_to_cents;

/// Milliseconds per minute, used to derive fractional-minute durations.
const MILLIS_PER_MINUTE: i64 = 60_000;

/// One user's time-bounded occupation of one unit of a resource's capacity.
///
/// A session is created active by the session engine's start operation and
/// mutated exactly once, by the stop operation. `end_time`,
/// `duration_minutes`, and `cost` are set if and only if `is_active` is
/// false, and are immutable once set. There is no completed-to-active
/// transition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsageSession {
    /// Unique session identifier.
    pub id: i64,
    /// The resource this session occupies.
    pub resource_id: i64,
    /// Opaque identifier of the user holding the session.
    pub user_id: String,
    /// When the session started.
    pub start_time: DateTime<Utc>,
    /// When the session ended, once stopped.
    pub end_time: Option<DateTime<Utc>>,
    /// Whether the session is still occupying a capacity slot.
    pub is_active: bool,
    /// Fractional minutes of usage, computed at stop time. Not rounded.
    pub duration_minutes: Option<Decimal>,
    /// Total cost at stop time, rounded half-up to cents.
    pub cost: Option<Decimal>,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
}

impl UsageSession {
    /// Create a new active session starting at `start_time`.
    pub fn started(id: i64, resource_id: i64, user_id: String, start_time: DateTime<Utc>) -> Self {
        Self {
            id,
            resource_id,
            user_id,
            start_time,
            end_time: None,
            is_active: true,
            duration_minutes: None,
            cost: None,
            created_at: start_time,
        }
    }

    /// Transition the session to completed, computing duration and cost.
    ///
    /// The duration is the exact millisecond delta expressed in fractional
    /// minutes, not rounded; the cost is `duration * price_per_minute`
    /// rounded half-up to cents, the same formula the billing record uses.
    /// Callers must ensure the session is still active.
    pub fn complete(&mut self, end_time: DateTime<Utc>, price_per_minute: Decimal) {
        let millis = (end_time - self.start_time).num_milliseconds().max(0);
        let duration = Decimal::from(millis) / Decimal::from(MILLIS_PER_MINUTE);
        self.end_time = Some(end_time);
        self.is_active = false;
        self.duration_minutes = Some(duration);
        self.cost = Some(round_to_cents(duration * price_per_minute));
    }
}
