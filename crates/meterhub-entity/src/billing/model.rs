//! Billing record entity model.

use chrono::{DateTime, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Round a monetary amount half-up to two decimal places.
///
/// This is the only rounding step in billing: durations stay fractional
/// and the rate is exact, so rounding happens once, at the point the
/// total cost is computed.
pub fn round_to_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Immutable financial settlement of one completed usage session.
///
/// Exactly one record exists per completed session. `price_per_minute` is
/// a snapshot of the resource's rate at stop time, not a live reference;
/// later price changes never alter past records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BillingRecord {
    /// Unique billing record identifier.
    pub id: i64,
    /// The session this record settles.
    pub usage_session_id: i64,
    /// The resource that was used.
    pub resource_id: i64,
    /// The user who is billed.
    pub user_id: String,
    /// Fractional minutes of usage.
    pub duration_minutes: Decimal,
    /// Rate in effect when the session stopped.
    pub price_per_minute: Decimal,
    /// `duration_minutes * price_per_minute`, rounded half-up to cents.
    pub total_cost: Decimal,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
}
