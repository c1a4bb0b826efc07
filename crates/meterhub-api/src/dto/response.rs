//! Response DTOs.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Health check response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Crate version.
    pub version: String,
}

/// Aggregate billing total for one user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserTotalResponse {
    /// The user the total belongs to.
    pub user_id: String,
    /// Sum of `total_cost` across the user's billing records.
    pub total_spent: Decimal,
}
