//! Claims domain errors

use thiserror::Error;

use core_kernel::PortError;

/// Errors that can occur in the claims workflow
#[derive(Debug, Error)]
pub enum ClaimError {
    #[error("Claim already exists: {0}")]
    DuplicateClaim(String),

    #[error("Claim not found: {0}")]
    ClaimNotFound(String),

    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("Document write failed: {0}")]
    DocumentWriteFailed(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<PortError> for ClaimError {
    fn from(err: PortError) -> Self {
        if err.is_conflict() {
            ClaimError::DuplicateClaim(err.to_string())
        } else if err.is_not_found() {
            ClaimError::ClaimNotFound(err.to_string())
        } else if err.is_transient() {
            ClaimError::StorageUnavailable(err.to_string())
        } else {
            ClaimError::Internal(err.to_string())
        }
    }
}
