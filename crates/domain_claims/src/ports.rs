//! Claims Domain Ports
//!
//! This module defines the port interfaces the claims workflow needs from
//! its collaborators, enabling swappable implementations:
//!
//! - **Internal adapters**: PostgreSQL claim storage (infra_db) and
//!   local-filesystem document storage (infra_storage)
//! - **Test adapters**: in-memory map implementations in [`crate::adapters`]
//!
//! Application services receive the port traits by `Arc<dyn _>` and never
//! know which adapter is behind them.

use async_trait::async_trait;

use core_kernel::{ClaimId, DomainPort, PortError};

use crate::claim::{Claim, ClaimStatus};

/// Data for creating a new claim record
///
/// When `id` is `None` the store assigns the next identifier in sequence;
/// callers that know their key (the test harness does) supply it
/// explicitly.
#[derive(Debug, Clone)]
pub struct NewClaim {
    pub id: Option<ClaimId>,
    pub status: ClaimStatus,
    pub document_path: Option<String>,
    pub lecturer_name: String,
    pub notes: Option<String>,
}

/// An uploaded supporting document, as received from the request layer
#[derive(Debug, Clone)]
pub struct DocumentUpload {
    /// Client-side file name; adapters sanitize it before use
    pub file_name: String,
    /// Raw file content
    pub content: Vec<u8>,
}

impl DocumentUpload {
    pub fn new(file_name: impl Into<String>, content: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            content,
        }
    }

    /// A zero-length upload is treated as "no file submitted"
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

/// Port for claim record storage
///
/// Absence on point lookup is `Ok(None)`, never an error; `update` and
/// `remove` report a missing identifier as `PortError::NotFound`, and
/// `insert` reports a duplicate identifier as `PortError::Conflict`.
#[async_trait]
pub trait ClaimStore: DomainPort {
    /// Inserts a new claim record
    ///
    /// # Returns
    ///
    /// The stored claim, with the identifier the store assigned when the
    /// caller did not supply one.
    async fn insert(&self, claim: NewClaim) -> Result<Claim, PortError>;

    /// Point lookup by identifier
    async fn find_by_id(&self, id: ClaimId) -> Result<Option<Claim>, PortError>;

    /// Returns every claim whose status equals the argument, order unspecified
    async fn find_by_status(&self, status: ClaimStatus) -> Result<Vec<Claim>, PortError>;

    /// Persists in-place changes to an existing record identified by `claim.id`
    async fn update(&self, claim: &Claim) -> Result<(), PortError>;

    /// Deletes the record with the given identifier
    async fn remove(&self, id: ClaimId) -> Result<(), PortError>;

    /// Drops every record and restarts identifier assignment
    ///
    /// Test-harness collaborator; not part of the production contract.
    async fn reset_all(&self) -> Result<(), PortError>;
}

/// Port for supporting-document storage
///
/// Implementations must not leave partial files behind on failure.
#[async_trait]
pub trait DocumentStore: DomainPort {
    /// Persists an uploaded binary and returns its stable path reference
    async fn store(&self, upload: DocumentUpload) -> Result<String, PortError>;

    /// Removes a previously stored document
    ///
    /// Used to roll back a submit whose claim insert failed. Removing a
    /// path that no longer exists is not an error.
    async fn remove(&self, path: &str) -> Result<(), PortError>;
}
