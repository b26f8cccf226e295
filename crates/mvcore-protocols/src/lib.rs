//! # mvcore Protocols
//!
//! Core protocol definitions for the mvcore Model tier.
//! Contains the interfaces and value types shared by the registry and its callers.
//!
//! ## Core Types
//!
//! - [`Proxy`] - Trait for named data holders stored in a registry
//! - [`DataProxy`] - Generic proxy owning a typed payload
//! - [`Notification`] - Value type carried between MVC tiers
//! - [`DuplicatePolicy`] - What a registry does on a name collision
//! - [`ModelError`] - Errors raised by registry operations

pub mod error;
pub mod notification;
pub mod policy;
pub mod proxy;

pub use error::ModelError;
pub use notification::Notification;
pub use policy::DuplicatePolicy;
pub use proxy::{AsAny, DataProxy, Proxy, DEFAULT_PROXY_NAME};
