//! Test Data Builders
//!
//! Builder for constructing claim records with sensible defaults, so
//! tests specify only the fields they care about.

use core_kernel::ClaimId;
use domain_claims::{ClaimStatus, NewClaim};

use crate::fixtures::ClaimFixtures;

/// Builder for test claim records
pub struct TestClaimBuilder {
    id: Option<ClaimId>,
    status: ClaimStatus,
    document_path: Option<String>,
    lecturer_name: String,
    notes: Option<String>,
}

impl Default for TestClaimBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestClaimBuilder {
    /// Creates a builder with the canonical valid-claim defaults
    pub fn new() -> Self {
        Self {
            id: None,
            status: ClaimStatus::Pending,
            document_path: Some("/uploads/test.pdf".to_string()),
            lecturer_name: ClaimFixtures::lecturer_name().to_string(),
            notes: Some(ClaimFixtures::notes().to_string()),
        }
    }

    /// Sets an explicit claim identifier
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(ClaimId::new(id));
        self
    }

    /// Sets the status
    pub fn with_status(mut self, status: ClaimStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the document path
    pub fn with_document_path(mut self, path: impl Into<String>) -> Self {
        self.document_path = Some(path.into());
        self
    }

    /// Clears the document path
    pub fn without_document(mut self) -> Self {
        self.document_path = None;
        self
    }

    /// Sets the lecturer name
    pub fn with_lecturer_name(mut self, name: impl Into<String>) -> Self {
        self.lecturer_name = name.into();
        self
    }

    /// Sets the notes
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Builds the claim record
    pub fn build(self) -> NewClaim {
        NewClaim {
            id: self.id,
            status: self.status,
            document_path: self.document_path,
            lecturer_name: self.lecturer_name,
            notes: self.notes,
        }
    }
}
