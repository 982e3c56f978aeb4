//! Filesystem-specific error type wrapping IO errors.

use std::path::PathBuf;

use openship_domain::error::{OpenShipError, StorageError};

/// Errors originating from reading content on disk.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    /// The file exists but could not be read.
    #[error("failed to read {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl From<ContentError> for OpenShipError {
    fn from(err: ContentError) -> Self {
        Self::Storage(StorageError::Backend(Box::new(err)))
    }
}
