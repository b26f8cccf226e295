//! Keyed model cores.
//!
//! A `ModelCores` hands out exactly one `Model` per core key for as long as
//! the host lives. The application owns the host and passes it (or the
//! models it yields) to whatever needs them.

use dashmap::DashMap;
use std::sync::Arc;

use tracing::{debug, info};

use mvcore_protocols::{DuplicatePolicy, ModelError};

use crate::model::Model;

/// Host of independent, lazily created models keyed by name.
pub struct ModelCores {
    cores: DashMap<String, Arc<Model>>,
    policy: DuplicatePolicy,
}

impl ModelCores {
    /// Create an empty host whose models reject duplicate proxy names.
    pub fn new() -> Self {
        Self::with_policy(DuplicatePolicy::default())
    }

    /// Create an empty host whose models use `policy`.
    pub fn with_policy(policy: DuplicatePolicy) -> Self {
        Self {
            cores: DashMap::new(),
            policy,
        }
    }

    /// Get the model for `key`, creating it on first request.
    ///
    /// Every call with the same key returns the same `Arc`.
    pub fn instance(&self, key: &str) -> Result<Arc<Model>, ModelError> {
        if key.is_empty() {
            return Err(ModelError::empty("core key"));
        }

        if let Some(model) = self.cores.get(key) {
            return Ok(model.clone());
        }

        let model = self
            .cores
            .entry(key.to_string())
            .or_insert_with(|| {
                info!(core = %key, policy = ?self.policy, "Model core created");
                Arc::new(Model::with_policy(self.policy))
            })
            .clone();
        Ok(model)
    }

    /// Check if a model exists for `key`.
    pub fn has_core(&self, key: &str) -> bool {
        self.cores.contains_key(key)
    }

    /// Drop the model for `key` from this host, returning it if present.
    ///
    /// Proxies inside the returned model are left registered there.
    pub fn remove_core(&self, key: &str) -> Option<Arc<Model>> {
        let (_, model) = self.cores.remove(key)?;
        debug!(core = %key, proxies = model.len(), "Model core removed");
        Some(model)
    }

    /// Keys of all live cores, in no particular order.
    pub fn keys(&self) -> Vec<String> {
        self.cores.iter().map(|entry| entry.key().clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.cores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cores.is_empty()
    }

    pub fn policy(&self) -> DuplicatePolicy {
        self.policy
    }
}

impl Default for ModelCores {
    fn default() -> Self {
        Self::new()
    }
}
