//! Usage session handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use validator::Validate;

use meterhub_core::AppError;
use meterhub_entity::UsageSession;

use crate::dto::request::{StartSessionRequest, StopSessionRequest};
use crate::error::ApiError;
use crate::state::AppState;

/// GET /usage-sessions
pub async fn list_sessions(State(state): State<AppState>) -> Json<Vec<UsageSession>> {
    Json(state.session_service.list_all())
}

/// GET /usage-sessions/resource/{resource_id}
pub async fn list_sessions_for_resource(
    State(state): State<AppState>,
    Path(resource_id): Path<i64>,
) -> Json<Vec<UsageSession>> {
    Json(state.session_service.list_for_resource(resource_id))
}

/// GET /usage-sessions/user/{user_id}
pub async fn list_sessions_for_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Json<Vec<UsageSession>> {
    Json(state.session_service.list_for_user(&user_id))
}

/// POST /usage-sessions/start
pub async fn start_session(
    State(state): State<AppState>,
    Json(req): Json<StartSessionRequest>,
) -> Result<(StatusCode, Json<UsageSession>), ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let session = state
        .session_engine
        .start(req.resource_id, req.user_id)
        .await?;
    Ok((StatusCode::CREATED, Json(session)))
}

/// POST /usage-sessions/stop
pub async fn stop_session(
    State(state): State<AppState>,
    Json(req): Json<StopSessionRequest>,
) -> Result<Json<UsageSession>, ApiError> {
    let session = state.session_engine.stop(req.session_id).await?;
    Ok(Json(session))
}
