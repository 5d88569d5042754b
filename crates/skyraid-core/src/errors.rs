//! Error taxonomy for the simulation core.
//!
//! Both variants indicate a bug in a calling component rather than a
//! runtime fault; nothing here is eligible for retry.

use thiserror::Error;

/// Errors surfaced at the call site by fallible core operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SimError {
    /// A constructor or setup call received an unusable argument.
    #[error("invalid parameter: {0}")]
    InvalidParameter(&'static str),

    /// `remove` (or an observer subscription) targeted an entity that is
    /// not currently registered in the world.
    #[error("entity is not registered in the world")]
    NotRegistered,
}
