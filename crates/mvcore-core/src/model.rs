//! The proxy registry.
//!
//! `Model` maps proxy names to proxies and drives their lifecycle hooks:
//! `on_register` after insertion, `on_remove` after removal. Hooks always run
//! with no registry lock held, so a hook may call back into the same `Model`.

use std::sync::Arc;

use tracing::{debug, warn};

use mvcore_protocols::proxy::AsAny;
use mvcore_protocols::{DuplicatePolicy, ModelError, Proxy};

use crate::registry::{BaseRegistry, Registerable};

impl Registerable for dyn Proxy {
    fn registry_id(&self) -> &str {
        self.proxy_name()
    }
}

/// Registry of named proxies.
pub struct Model {
    proxies: BaseRegistry<dyn Proxy>,
    policy: DuplicatePolicy,
}

impl Model {
    /// Create an empty model that rejects duplicate names.
    pub fn new() -> Self {
        Self::with_policy(DuplicatePolicy::default())
    }

    /// Create an empty model with an explicit collision policy.
    pub fn with_policy(policy: DuplicatePolicy) -> Self {
        Self {
            proxies: BaseRegistry::new(),
            policy,
        }
    }

    /// The collision policy this model applies.
    pub fn policy(&self) -> DuplicatePolicy {
        self.policy
    }

    /// Register a proxy under its own name and call its `on_register` hook.
    ///
    /// Fails with `InvalidArgument` on an empty name. On a name collision the
    /// model's [`DuplicatePolicy`] decides: `Reject` fails with
    /// `AlreadyRegistered` and leaves the existing proxy in place, `Replace`
    /// calls `on_remove` on the displaced proxy before registering the new one.
    pub fn register_proxy(&self, proxy: Arc<dyn Proxy>) -> Result<(), ModelError> {
        if proxy.proxy_name().is_empty() {
            return Err(ModelError::empty("proxy name"));
        }

        let displaced = self
            .proxies
            .insert(proxy.clone(), self.policy)
            .inspect_err(|e| debug!(error = %e, "Proxy registration rejected"))?;

        if let Some(old) = displaced {
            warn!(proxy = %proxy.proxy_name(), "Replacing registered proxy");
            old.on_remove();
        }

        proxy.on_register();
        debug!(proxy = %proxy.proxy_name(), "Proxy registered");
        Ok(())
    }

    /// Look up a proxy by name.
    pub fn retrieve_proxy(&self, name: &str) -> Option<Arc<dyn Proxy>> {
        self.proxies.get(name)
    }

    /// Look up a proxy by name and downcast it to its concrete type.
    ///
    /// Returns `None` if the name is absent or the proxy is not a `P`.
    pub fn retrieve_proxy_as<P: Proxy>(&self, name: &str) -> Option<Arc<P>> {
        let proxy = self.proxies.get(name)?;
        <dyn Proxy as AsAny>::into_any(proxy).downcast::<P>().ok()
    }

    /// Remove a proxy by name, call its `on_remove` hook and hand it back.
    pub fn remove_proxy(&self, name: &str) -> Option<Arc<dyn Proxy>> {
        let proxy = self.proxies.remove(name)?;
        proxy.on_remove();
        debug!(proxy = %name, "Proxy removed");
        Some(proxy)
    }

    /// Check if a proxy is registered under `name`.
    pub fn has_proxy(&self, name: &str) -> bool {
        self.proxies.contains(name)
    }

    /// Names of all registered proxies, in no particular order.
    pub fn proxy_names(&self) -> Vec<String> {
        self.proxies.list_ids()
    }

    pub fn len(&self) -> usize {
        self.proxies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.proxies.is_empty()
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Model")
            .field("policy", &self.policy)
            .field("proxies", &self.proxies.len())
            .finish()
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
