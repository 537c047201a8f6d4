//! Claim aggregate

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use core_kernel::{ClaimId, CoreError};

/// Workflow status of a claim
///
/// Serialized as exactly `Pending`, `Approved`, or `Rejected` - the same
/// strings the backing store persists in its status column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClaimStatus {
    /// Awaiting review
    Pending,
    /// Signed off by a reviewer
    Approved,
    /// Turned down by a reviewer
    Rejected,
}

impl ClaimStatus {
    /// Returns the canonical string form of the status
    pub fn as_str(&self) -> &'static str {
        match self {
            ClaimStatus::Pending => "Pending",
            ClaimStatus::Approved => "Approved",
            ClaimStatus::Rejected => "Rejected",
        }
    }

    /// Returns true when no workflow operation transitions out of this status
    pub fn is_terminal(&self) -> bool {
        matches!(self, ClaimStatus::Approved | ClaimStatus::Rejected)
    }
}

impl fmt::Display for ClaimStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClaimStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(ClaimStatus::Pending),
            "Approved" => Ok(ClaimStatus::Approved),
            "Rejected" => Ok(ClaimStatus::Rejected),
            other => Err(CoreError::validation(format!(
                "unknown claim status '{other}'"
            ))),
        }
    }
}

/// A lecturer reimbursement claim
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claim {
    /// Unique identifier
    pub id: ClaimId,
    /// Workflow status
    pub status: ClaimStatus,
    /// Reference to the stored supporting document, if one was submitted.
    /// Immutable after creation.
    pub document_path: Option<String>,
    /// Name of the submitting lecturer
    pub lecturer_name: String,
    /// Free-text notes
    pub notes: Option<String>,
    /// When the claim entered the store
    pub submitted_at: DateTime<Utc>,
    /// Last modification timestamp
    pub updated_at: DateTime<Utc>,
}

impl Claim {
    /// Moves the claim to the given status and touches the update timestamp
    pub fn transition_to(&mut self, status: ClaimStatus) {
        self.status = status;
        self.updated_at = Utc::now();
    }

    /// Marks the claim approved
    pub fn approve(&mut self) {
        self.transition_to(ClaimStatus::Approved);
    }

    /// Marks the claim rejected
    pub fn reject(&mut self) {
        self.transition_to(ClaimStatus::Rejected);
    }

    /// Returns true when a supporting document was submitted with the claim
    pub fn has_document(&self) -> bool {
        self.document_path.as_deref().is_some_and(|p| !p.is_empty())
    }
}
