//! Request DTOs with validation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Create resource request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateResourceRequest {
    /// Unique resource name.
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
    /// Maximum concurrent active sessions.
    pub capacity: u32,
    /// Billing rate per minute.
    pub price_per_minute: Decimal,
}

/// Partial resource update request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateResourceRequest {
    /// New name.
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New capacity.
    pub capacity: Option<u32>,
    /// New billing rate.
    pub price_per_minute: Option<Decimal>,
}

/// Start session request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct StartSessionRequest {
    /// The resource to check out.
    pub resource_id: i64,
    /// Opaque user identifier.
    #[validate(length(min = 1, message = "User id is required"))]
    pub user_id: String,
}

/// Stop session request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StopSessionRequest {
    /// The session to stop.
    pub session_id: i64,
}
