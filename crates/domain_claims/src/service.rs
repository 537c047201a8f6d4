//! Claims workflow service
//!
//! [`ClaimsService`] exposes the operations the request layer consumes.
//! Each method maps to exactly one use case and returns the outcome value
//! the caller should act on. Store-level absence is normal control flow
//! for approve, reject, and delete: those operations absorb a missing
//! identifier into the same redirect a successful transition produces.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use core_kernel::ClaimId;

use crate::claim::{Claim, ClaimStatus};
use crate::error::ClaimError;
use crate::ports::{ClaimStore, DocumentStore, DocumentUpload, NewClaim};

/// Which downstream view the caller should present next
///
/// Stands in for the source framework's action-result type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Redirect {
    /// The claim-submitted confirmation view
    ClaimSubmitted,
    /// The pending claims review list
    PendingClaims,
    /// The claim tracking view
    TrackClaims,
}

/// Outcome of a successful submit
#[derive(Debug, Clone, Serialize)]
pub struct SubmitReceipt {
    pub claim_id: ClaimId,
    pub redirect: Redirect,
}

/// Claim fields as received from the submitter
///
/// Any status carried by the payload is ignored: claims always enter the
/// workflow as `Pending`.
#[derive(Debug, Clone, Deserialize)]
pub struct ClaimSubmission {
    pub claim_id: Option<ClaimId>,
    pub lecturer_name: String,
    pub notes: Option<String>,
    pub status: Option<ClaimStatus>,
}

impl ClaimSubmission {
    pub fn new(lecturer_name: impl Into<String>) -> Self {
        Self {
            claim_id: None,
            lecturer_name: lecturer_name.into(),
            notes: None,
            status: None,
        }
    }
}

/// Orchestrates the claims workflow over injected storage ports
///
/// Holds no claim state of its own; every operation goes straight to the
/// store.
#[derive(Clone)]
pub struct ClaimsService {
    store: Arc<dyn ClaimStore>,
    documents: Arc<dyn DocumentStore>,
}

impl ClaimsService {
    pub fn new(store: Arc<dyn ClaimStore>, documents: Arc<dyn DocumentStore>) -> Self {
        Self { store, documents }
    }

    /// Submits a new claim, storing the supporting document first
    ///
    /// The document is persisted before the claim row is inserted, so a
    /// failed write leaves no row referencing a nonexistent file. If the
    /// insert itself fails the stored document is removed again.
    ///
    /// # Errors
    ///
    /// - [`ClaimError::DocumentWriteFailed`] when the document cannot be stored
    /// - [`ClaimError::DuplicateClaim`] when an explicit id already exists
    pub async fn submit_claim(
        &self,
        submission: ClaimSubmission,
        document: Option<DocumentUpload>,
    ) -> Result<SubmitReceipt, ClaimError> {
        let document_path = match document {
            Some(upload) if !upload.is_empty() => {
                let path = self
                    .documents
                    .store(upload)
                    .await
                    .map_err(|e| ClaimError::DocumentWriteFailed(e.to_string()))?;
                Some(path)
            }
            _ => None,
        };

        let record = NewClaim {
            id: submission.claim_id,
            status: ClaimStatus::Pending,
            document_path: document_path.clone(),
            lecturer_name: submission.lecturer_name,
            notes: submission.notes,
        };

        let claim = match self.store.insert(record).await {
            Ok(claim) => claim,
            Err(err) => {
                if let Some(path) = document_path {
                    if let Err(cleanup) = self.documents.remove(&path).await {
                        warn!(%path, error = %cleanup, "document left behind by aborted submit");
                    }
                }
                return Err(err.into());
            }
        };

        info!(claim_id = %claim.id, has_document = claim.has_document(), "claim submitted");

        Ok(SubmitReceipt {
            claim_id: claim.id,
            redirect: Redirect::ClaimSubmitted,
        })
    }

    /// Returns every claim awaiting review
    pub async fn pending_claims(&self) -> Result<Vec<Claim>, ClaimError> {
        let claims = self.store.find_by_status(ClaimStatus::Pending).await?;
        Ok(claims)
    }

    /// Approves the claim with the given identifier
    ///
    /// A missing identifier is a no-op; both paths redirect back to the
    /// pending list.
    pub async fn approve_claim(&self, id: ClaimId) -> Result<Redirect, ClaimError> {
        self.transition(id, ClaimStatus::Approved).await?;
        Ok(Redirect::PendingClaims)
    }

    /// Rejects the claim with the given identifier
    ///
    /// A missing identifier redirects back to the pending list with no
    /// state change, exactly like a successful reject.
    pub async fn reject_claim(&self, id: ClaimId) -> Result<Redirect, ClaimError> {
        self.transition(id, ClaimStatus::Rejected).await?;
        Ok(Redirect::PendingClaims)
    }

    /// Deletes the claim with the given identifier
    ///
    /// Idempotent: removing an absent id still redirects to the tracking
    /// view.
    pub async fn delete_claim(&self, id: ClaimId) -> Result<Redirect, ClaimError> {
        match self.store.remove(id).await {
            Ok(()) => info!(claim_id = %id, "claim deleted"),
            Err(err) if err.is_not_found() => {
                warn!(claim_id = %id, "no claim to delete")
            }
            Err(err) => return Err(err.into()),
        }
        Ok(Redirect::TrackClaims)
    }

    async fn transition(&self, id: ClaimId, target: ClaimStatus) -> Result<(), ClaimError> {
        let Some(mut claim) = self.store.find_by_id(id).await? else {
            warn!(claim_id = %id, status = %target, "no claim to update");
            return Ok(());
        };

        claim.transition_to(target);

        match self.store.update(&claim).await {
            Ok(()) => {
                info!(claim_id = %id, status = %target, "claim status updated");
                Ok(())
            }
            // Deleted between the read and the write; same no-op contract.
            Err(err) if err.is_not_found() => {
                warn!(claim_id = %id, "claim vanished before update");
                Ok(())
            }
            Err(err) => Err(err.into()),
        }
    }
}
