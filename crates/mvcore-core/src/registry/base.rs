//! Base registry trait and implementation.
//!
//! Provides the keyed storage that `Model` layers its proxy lifecycle on.

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::sync::Arc;

use mvcore_protocols::{DuplicatePolicy, ModelError};

/// Trait for items that can be stored in a registry.
///
/// Each registerable item must provide a unique ID.
pub trait Registerable: Send + Sync {
    /// Returns the unique identifier for this item.
    fn registry_id(&self) -> &str;
}

/// Generic registry for managing items by ID.
///
/// - Thread-safe storage using DashMap
/// - Insert with a caller-chosen collision policy
/// - Remove handing the item back to the caller
/// - Get by ID
///
/// No method runs user code while a map shard is locked.
///
/// # Type Parameters
///
/// * `T` - The trait object type to store (e.g., `dyn Proxy`)
pub struct BaseRegistry<T: ?Sized + Registerable> {
    items: DashMap<String, Arc<T>>,
}

impl<T: ?Sized + Registerable> BaseRegistry<T> {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            items: DashMap::new(),
        }
    }

    /// Insert an item under its registry ID.
    ///
    /// Returns the displaced item when `policy` is `Replace` and the ID was taken.
    pub fn insert(
        &self,
        item: Arc<T>,
        policy: DuplicatePolicy,
    ) -> Result<Option<Arc<T>>, ModelError> {
        let id = item.registry_id().to_string();

        match self.items.entry(id) {
            Entry::Occupied(mut entry) => match policy {
                DuplicatePolicy::Reject => {
                    Err(ModelError::AlreadyRegistered(entry.key().clone()))
                }
                DuplicatePolicy::Replace => Ok(Some(entry.insert(item))),
            },
            Entry::Vacant(entry) => {
                entry.insert(item);
                Ok(None)
            }
        }
    }

    /// Remove an item by ID, returning it if it was present.
    pub fn remove(&self, id: &str) -> Option<Arc<T>> {
        self.items.remove(id).map(|(_, item)| item)
    }

    /// Get an item by ID.
    pub fn get(&self, id: &str) -> Option<Arc<T>> {
        self.items.get(id).map(|item| item.clone())
    }

    /// Check if an item with the given ID is registered.
    pub fn contains(&self, id: &str) -> bool {
        self.items.contains_key(id)
    }

    /// List all registered item IDs.
    pub fn list_ids(&self) -> Vec<String> {
        self.items.iter().map(|entry| entry.key().clone()).collect()
    }

    /// Get the number of registered items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Snapshot of all items.
    pub fn values(&self) -> Vec<Arc<T>> {
        self.items.iter().map(|entry| entry.value().clone()).collect()
    }
}

impl<T: ?Sized + Registerable> Default for BaseRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "base_tests.rs"]
mod tests;
