//! Error types for the mvcore protocol layer.

mod model;

pub use model::*;
