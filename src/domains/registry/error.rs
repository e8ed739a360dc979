//! Registry-specific error types.

use thiserror::Error;

/// Errors raised while building the instance registry.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// A configured registry id was blank.
    #[error("Registry ids must not be empty")]
    EmptyId,

    /// Two different registry ids derived the same catalog identifier.
    #[error("Registry ids '{first}' and '{second}' both map to catalog {identifier}")]
    Collision {
        identifier: String,
        first: String,
        second: String,
    },
}
