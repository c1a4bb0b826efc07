//! Billing record generation.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use meterhub_core::{AppError, AppResult};
use meterhub_entity::billing::round_to_cents;
use meterhub_entity::{BillingRecord, UsageSession};

/// Pure derivation of a [`BillingRecord`] from a completed session.
///
/// No side effects: persistence happens in the session engine, inside the
/// same logical transaction as the session's completion.
pub struct BillingGenerator;

impl BillingGenerator {
    /// Derive the settlement record for a completed session.
    ///
    /// `price_per_minute` is the rate in effect at stop time and is
    /// snapshotted into the record. The total is
    /// `duration_minutes * price_per_minute` rounded half-up to cents;
    /// the duration itself is never rounded before the multiplication.
    ///
    /// Fails with an internal error when handed a session that is still
    /// active or has no duration, since only the engine's stop path may
    /// call this and it does so strictly after completion.
    pub fn generate(
        session: &UsageSession,
        price_per_minute: Decimal,
        id: i64,
        now: DateTime<Utc>,
    ) -> AppResult<BillingRecord> {
        if session.is_active {
            return Err(AppError::internal(
                "Cannot generate a billing record for an active session",
            ));
        }
        let duration_minutes = session.duration_minutes.ok_or_else(|| {
            AppError::internal("Completed session is missing its duration")
        })?;

        Ok(BillingRecord {
            id,
            usage_session_id: session.id,
            resource_id: session.resource_id,
            user_id: session.user_id.clone(),
            duration_minutes,
            price_per_minute,
            total_cost: round_to_cents(duration_minutes * price_per_minute),
            created_at: now,
        })
    }
}
