//! Resource registry holding resource definitions.

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use rust_decimal::Decimal;

use meterhub_core::{AppError, AppResult};
use meterhub_entity::Resource;

/// Fields that may change on an existing resource.
///
/// Name and description may change at any time; capacity and price changes
/// affect only sessions admitted after the update.
#[derive(Debug, Clone, Default)]
pub struct ResourceUpdate {
    /// New display name.
    pub name: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New capacity.
    pub capacity: Option<u32>,
    /// New billing rate.
    pub price_per_minute: Option<Decimal>,
}

/// In-memory store of resource definitions.
///
/// Read-mostly: the session engine only looks resources up; mutation
/// happens through the resource CRUD service. Reads never take the
/// ledger's admission gates.
#[derive(Debug, Default)]
pub struct ResourceRegistry {
    resources: DashMap<i64, Resource>,
    next_id: AtomicI64,
}

impl ResourceRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            resources: DashMap::new(),
            next_id: AtomicI64::new(1),
        }
    }

    /// Insert a new resource, assigning it the next sequential id.
    ///
    /// Fails with a validation error when the name is already taken.
    pub fn insert(
        &self,
        name: String,
        description: Option<String>,
        capacity: u32,
        price_per_minute: Decimal,
        now: DateTime<Utc>,
    ) -> AppResult<Resource> {
        if self.resources.iter().any(|r| r.name == name) {
            return Err(AppError::validation("Resource name already exists"));
        }

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let resource = Resource {
            id,
            name,
            description,
            capacity,
            price_per_minute,
            created_at: now,
            updated_at: None,
        };
        self.resources.insert(id, resource.clone());
        Ok(resource)
    }

    /// Look up a resource by id.
    pub fn get(&self, id: i64) -> Option<Resource> {
        self.resources.get(&id).map(|r| r.clone())
    }

    /// Apply a partial update to a resource.
    pub fn update(&self, id: i64, update: ResourceUpdate, now: DateTime<Utc>) -> AppResult<Resource> {
        if let Some(new_name) = &update.name {
            if self.resources.iter().any(|r| r.id != id && r.name == *new_name) {
                return Err(AppError::validation("Resource name already exists"));
            }
        }

        let mut entry = self
            .resources
            .get_mut(&id)
            .ok_or_else(|| AppError::not_found("Resource not found"))?;

        if let Some(name) = update.name {
            entry.name = name;
        }
        if let Some(description) = update.description {
            entry.description = Some(description);
        }
        if let Some(capacity) = update.capacity {
            entry.capacity = capacity;
        }
        if let Some(price) = update.price_per_minute {
            entry.price_per_minute = price;
        }
        entry.updated_at = Some(now);

        Ok(entry.clone())
    }

    /// Remove a resource. Returns the removed definition, if any.
    pub fn remove(&self, id: i64) -> Option<Resource> {
        self.resources.remove(&id).map(|(_, r)| r)
    }

    /// All resources, ordered by id.
    pub fn all(&self) -> Vec<Resource> {
        let mut resources: Vec<Resource> = self.resources.iter().map(|r| r.clone()).collect();
        resources.sort_by_key(|r| r.id);
        resources
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn registry_with_one() -> (ResourceRegistry, Resource) {
        let registry = ResourceRegistry::new();
        let resource = registry
            .insert("gpu-a100".to_string(), None, 4, dec!(2.50), Utc::now())
            .unwrap();
        (registry, resource)
    }

    #[test]
    fn test_insert_assigns_sequential_ids() {
        let registry = ResourceRegistry::new();
        let first = registry
            .insert("a".to_string(), None, 1, dec!(1), Utc::now())
            .unwrap();
        let second = registry
            .insert("b".to_string(), None, 1, dec!(1), Utc::now())
            .unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let (registry, _) = registry_with_one();
        let err = registry
            .insert("gpu-a100".to_string(), None, 2, dec!(1), Utc::now())
            .unwrap_err();
        assert_eq!(err.kind, meterhub_core::error::ErrorKind::Validation);
    }

    #[test]
    fn test_update_touches_updated_at() {
        let (registry, resource) = registry_with_one();
        let updated = registry
            .update(
                resource.id,
                ResourceUpdate {
                    capacity: Some(8),
                    ..Default::default()
                },
                Utc::now(),
            )
            .unwrap();
        assert_eq!(updated.capacity, 8);
        assert!(updated.updated_at.is_some());
        assert_eq!(updated.name, "gpu-a100");
    }

    #[test]
    fn test_update_rejects_name_collision() {
        let (registry, resource) = registry_with_one();
        registry
            .insert("gpu-h100".to_string(), None, 2, dec!(5), Utc::now())
            .unwrap();

        let err = registry
            .update(
                resource.id,
                ResourceUpdate {
                    name: Some("gpu-h100".to_string()),
                    ..Default::default()
                },
                Utc::now(),
            )
            .unwrap_err();
        assert_eq!(err.kind, meterhub_core::error::ErrorKind::Validation);
    }

    #[test]
    fn test_remove_missing_is_none() {
        let registry = ResourceRegistry::new();
        assert!(registry.remove(42).is_none());
    }
}
