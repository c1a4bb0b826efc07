//! Resource CRUD handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use validator::Validate;

use meterhub_core::AppError;
use meterhub_entity::Resource;
use meterhub_store::registry::ResourceUpdate;

use crate::dto::request::{CreateResourceRequest, UpdateResourceRequest};
use crate::error::ApiError;
use crate::state::AppState;

/// GET /resources
pub async fn list_resources(State(state): State<AppState>) -> Json<Vec<Resource>> {
    Json(state.resource_service.list())
}

/// GET /resources/{id}
pub async fn get_resource(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Resource>, ApiError> {
    let resource = state.resource_service.get(id)?;
    Ok(Json(resource))
}

/// POST /resources
pub async fn create_resource(
    State(state): State<AppState>,
    Json(req): Json<CreateResourceRequest>,
) -> Result<(StatusCode, Json<Resource>), ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let resource = state.resource_service.create(
        req.name,
        req.description,
        req.capacity,
        req.price_per_minute,
    )?;
    Ok((StatusCode::CREATED, Json(resource)))
}

/// PUT /resources/{id}
pub async fn update_resource(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateResourceRequest>,
) -> Result<Json<Resource>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let resource = state.resource_service.update(
        id,
        ResourceUpdate {
            name: req.name,
            description: req.description,
            capacity: req.capacity,
            price_per_minute: req.price_per_minute,
        },
    )?;
    Ok(Json(resource))
}

/// DELETE /resources/{id}
pub async fn delete_resource(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state.resource_service.delete(id)?;
    Ok(StatusCode::NO_CONTENT)
}
