//! Resource entity model.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A capacity-limited, billable unit that users check out for timed use.
///
/// `capacity` bounds the number of simultaneously active sessions;
/// `price_per_minute` is the rate snapshotted into billing records at
/// stop time. Capacity and price changes affect only future sessions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resource {
    /// Unique resource identifier.
    pub id: i64,
    /// Unique display name.
    pub name: String,
    /// Optional free-form description.
    pub description: Option<String>,
    /// Maximum number of concurrently active sessions.
    pub capacity: u32,
    /// Billing rate per minute of usage.
    pub price_per_minute: Decimal,
    /// When the resource was created.
    pub created_at: DateTime<Utc>,
    /// When the resource was last updated.
    pub updated_at: Option<DateTime<Utc>>,
}
