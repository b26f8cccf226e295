//! Name collision policy for registries.

use serde::{Deserialize, Serialize};

/// What a registry does when a proxy is registered under a name that is already taken.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicatePolicy {
    /// Keep the existing entry and fail the registration.
    #[default]
    Reject,
    /// Swap in the new entry. The displaced one receives its removal callback.
    Replace,
}
