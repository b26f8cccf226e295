//! Proxy protocol definitions.
//!
//! Proxies are the named data holders kept by a `Model`.

mod traits;
mod data;

pub use traits::*;
pub use data::*;
