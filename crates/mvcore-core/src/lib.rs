//! # mvcore Core
//!
//! The Model tier: a registry of named proxies with lifecycle callbacks.
//!
//! ## Components
//!
//! - [`Model`] - Proxy registry invoking `on_register`/`on_remove`
//! - [`ModelCores`] - Host handing out one shared `Model` per core key
//! - [`BaseRegistry`] - Generic named store both are built on

pub mod cores;
pub mod model;
pub mod registry;

pub use cores::ModelCores;
pub use model::Model;
pub use registry::{BaseRegistry, Registerable};

pub use mvcore_protocols::{DataProxy, DuplicatePolicy, ModelError, Notification, Proxy};
