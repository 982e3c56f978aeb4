//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`OpenShipError`] via `#[from]`.

use std::error::Error as StdError;

/// Top-level error for application use-cases.
#[derive(Debug, thiserror::Error)]
pub enum OpenShipError {
    #[error("validation error")]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    #[error("storage error")]
    Storage(#[from] StorageError),

    #[error("platform error")]
    Platform(#[from] PlatformError),
}

/// A value failed a domain invariant.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("unknown theme {0:?}, expected \"light\" or \"dark\"")]
    InvalidTheme(String),

    #[error("name must not be empty")]
    EmptyName,

    #[error("invalid character {found:?} in name {name:?}")]
    InvalidName { name: String, found: char },
}

/// A lookup found nothing.
#[derive(Debug, thiserror::Error)]
#[error("{entity} {id:?} not found")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}

/// A persistence facility (browser storage, filesystem) failed.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The facility is not available at all (disabled, sandboxed, no window).
    #[error("storage unavailable")]
    Unavailable,

    /// The facility refused the operation (quota, security policy, …).
    #[error("storage rejected the operation: {0}")]
    Rejected(String),

    /// The underlying IO layer failed.
    #[error("storage backend failure")]
    Backend(#[source] Box<dyn StdError + Send + Sync>),
}

/// The host platform (document, media queries) could not answer.
#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    /// No document / window to talk to.
    #[error("platform unavailable")]
    Unavailable,

    /// The platform answered with an error.
    #[error("platform call failed: {0}")]
    Call(String),
}
