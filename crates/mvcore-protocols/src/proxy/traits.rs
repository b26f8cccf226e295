//! Proxy trait definition.

use std::any::Any;
use std::sync::Arc;

/// Upcasting helpers so registries can hand back concrete proxy types.
///
/// Implemented for every `Send + Sync + 'static` type; never implement it by hand.
pub trait AsAny: Any + Send + Sync {
    /// Returns a reference to `self` as `Any` for downcasting.
    fn as_any(&self) -> &dyn Any;

    /// Converts a shared handle into `Arc<dyn Any>` for `Arc::downcast`.
    fn into_any(self: Arc<Self>) -> Arc<dyn Any + Send + Sync>;
}

impl<T: Any + Send + Sync> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Arc<Self>) -> Arc<dyn Any + Send + Sync> {
        self
    }
}

/// Core trait for everything stored in a `Model`.
///
/// A proxy provides:
/// - A unique name used as its registry key
/// - Lifecycle hooks invoked by the registry on insertion and removal
///
/// Hooks take `&self`; proxies that change state in a hook keep that state
/// behind interior mutability (see [`DataProxy`](super::DataProxy)).
pub trait Proxy: AsAny {
    /// Returns the name this proxy is registered under.
    fn proxy_name(&self) -> &str;

    /// Called by the registry right after the proxy is inserted.
    fn on_register(&self) {}

    /// Called by the registry right after the proxy is taken out.
    fn on_remove(&self) {}
}
