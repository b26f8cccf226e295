//! Generic data-holding proxy.

use std::fmt;

use parking_lot::RwLock;

use super::Proxy;

/// Name given to proxies constructed without one.
pub const DEFAULT_PROXY_NAME: &str = "Proxy";

/// A named proxy owning a payload of type `T`.
///
/// The payload sits behind a lock so that lifecycle hooks and callers holding
/// an `Arc` can both read and replace it.
pub struct DataProxy<T> {
    name: String,
    data: RwLock<T>,
}

impl<T> DataProxy<T> {
    /// Create a new proxy with the given name and payload.
    pub fn new(name: impl Into<String>, data: T) -> Self {
        Self {
            name: name.into(),
            data: RwLock::new(data),
        }
    }

    /// Create a proxy named [`DEFAULT_PROXY_NAME`].
    pub fn unnamed(data: T) -> Self {
        Self::new(DEFAULT_PROXY_NAME, data)
    }

    /// Returns the proxy name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Replace the payload, returning the previous one.
    pub fn set_data(&self, data: T) -> T {
        std::mem::replace(&mut *self.data.write(), data)
    }

    /// Run `f` against a shared borrow of the payload.
    pub fn with_data<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.data.read())
    }

    /// Run `f` against a mutable borrow of the payload.
    pub fn update_data<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        f(&mut self.data.write())
    }

    /// Consume the proxy and return its payload.
    pub fn into_data(self) -> T {
        self.data.into_inner()
    }
}

impl<T: Clone> DataProxy<T> {
    /// Returns a copy of the payload.
    pub fn data(&self) -> T {
        self.data.read().clone()
    }
}

impl<T: Default> Default for DataProxy<T> {
    fn default() -> Self {
        Self::unnamed(T::default())
    }
}

impl<T: fmt::Debug> fmt::Debug for DataProxy<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataProxy")
            .field("name", &self.name)
            .field("data", &*self.data.read())
            .finish()
    }
}

impl<T: Send + Sync + 'static> Proxy for DataProxy<T> {
    fn proxy_name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
#[path = "data_tests.rs"]
mod tests;
