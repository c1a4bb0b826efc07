//! Billing record handlers.

use axum::Json;
use axum::extract::{Path, State};

use meterhub_entity::BillingRecord;

use crate::dto::response::UserTotalResponse;
use crate::state::AppState;

/// GET /billing
pub async fn list_billing(State(state): State<AppState>) -> Json<Vec<BillingRecord>> {
    Json(state.billing_service.list_all())
}

/// GET /billing/user/{user_id}
pub async fn list_billing_for_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Json<Vec<BillingRecord>> {
    Json(state.billing_service.list_for_user(&user_id))
}

/// GET /billing/user/{user_id}/total
pub async fn user_billing_total(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Json<UserTotalResponse> {
    let total_spent = state.billing_service.user_total(&user_id);
    Json(UserTotalResponse {
        user_id,
        total_spent,
    })
}

/// GET /billing/resource/{resource_id}
pub async fn list_billing_for_resource(
    State(state): State<AppState>,
    Path(resource_id): Path<i64>,
) -> Json<Vec<BillingRecord>> {
    Json(state.billing_service.list_for_resource(resource_id))
}
