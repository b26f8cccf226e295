//! Generic registry storage.

mod base;

pub use base::{BaseRegistry, Registerable};
