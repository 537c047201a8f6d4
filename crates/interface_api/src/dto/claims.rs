//! Claims DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;

use core_kernel::ClaimId;
use domain_claims::{Claim, Redirect};

/// Response for a successful claim submission
#[derive(Debug, Serialize)]
pub struct SubmitClaimResponse {
    pub claim_id: ClaimId,
    pub redirect: Redirect,
}

/// Response carrying only the next view to present
#[derive(Debug, Serialize)]
pub struct RedirectResponse {
    pub redirect: Redirect,
}

/// A claim as presented to API consumers
#[derive(Debug, Serialize)]
pub struct ClaimResponse {
    pub claim_id: ClaimId,
    pub status: String,
    pub document_path: Option<String>,
    pub lecturer_name: String,
    pub notes: Option<String>,
    pub submitted_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Claim> for ClaimResponse {
    fn from(claim: Claim) -> Self {
        Self {
            claim_id: claim.id,
            status: claim.status.to_string(),
            document_path: claim.document_path,
            lecturer_name: claim.lecturer_name,
            notes: claim.notes,
            submitted_at: claim.submitted_at,
            updated_at: claim.updated_at,
        }
    }
}
