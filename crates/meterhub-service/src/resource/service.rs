//! Resource management service.

use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::info;

use meterhub_core::{AppError, AppResult, Clock};
use meterhub_entity::Resource;
use meterhub_store::ResourceRegistry;
use meterhub_store::registry::ResourceUpdate;

/// CRUD over resource definitions.
///
/// The session engine only reads the registry; every mutation goes through
/// this service so domain validation lives in one place.
#[derive(Debug, Clone)]
pub struct ResourceService {
    registry: Arc<ResourceRegistry>,
    clock: Arc<dyn Clock>,
}

impl ResourceService {
    /// Create a resource service over the given registry.
    pub fn new(registry: Arc<ResourceRegistry>, clock: Arc<dyn Clock>) -> Self {
        Self { registry, clock }
    }

    /// Create a new resource.
    pub fn create(
        &self,
        name: String,
        description: Option<String>,
        capacity: u32,
        price_per_minute: Decimal,
    ) -> AppResult<Resource> {
        validate_capacity(capacity)?;
        validate_price(price_per_minute)?;

        let resource =
            self.registry
                .insert(name, description, capacity, price_per_minute, self.clock.now())?;
        info!(resource_id = resource.id, name = %resource.name, "Resource created");
        Ok(resource)
    }

    /// Look up a resource by id.
    pub fn get(&self, id: i64) -> AppResult<Resource> {
        self.registry
            .get(id)
            .ok_or_else(|| AppError::not_found("Resource not found"))
    }

    /// List all resources.
    pub fn list(&self) -> Vec<Resource> {
        self.registry.all()
    }

    /// Apply a partial update.
    ///
    /// Capacity and price changes affect only sessions admitted after the
    /// update; billing already computed is untouched.
    pub fn update(&self, id: i64, update: ResourceUpdate) -> AppResult<Resource> {
        if let Some(capacity) = update.capacity {
            validate_capacity(capacity)?;
        }
        if let Some(price) = update.price_per_minute {
            validate_price(price)?;
        }

        let resource = self.registry.update(id, update, self.clock.now())?;
        info!(resource_id = resource.id, "Resource updated");
        Ok(resource)
    }

    /// Delete a resource.
    pub fn delete(&self, id: i64) -> AppResult<()> {
        self.registry
            .remove(id)
            .ok_or_else(|| AppError::not_found("Resource not found"))?;
        info!(resource_id = id, "Resource deleted");
        Ok(())
    }
}

fn validate_capacity(capacity: u32) -> AppResult<()> {
    if capacity == 0 {
        return Err(AppError::validation("Capacity must be a positive integer"));
    }
    Ok(())
}

fn validate_price(price: Decimal) -> AppResult<()> {
    if price < Decimal::ZERO {
        return Err(AppError::validation("Price per minute must not be negative"));
    }
    Ok(())
}
