//! Pre-built Test Fixtures
//!
//! Ready-to-use test data for claims. The values mirror the canonical
//! valid claim the workflow tests are written against: lecturer
//! "John Doe", notes "Test notes", document at `/uploads/test{id}.pdf`.

use core_kernel::ClaimId;
use domain_claims::{ClaimStatus, DocumentUpload, NewClaim};

/// Fixture for claim test data
pub struct ClaimFixtures;

impl ClaimFixtures {
    /// The canonical lecturer name used across the suite
    pub fn lecturer_name() -> &'static str {
        "John Doe"
    }

    /// The canonical notes text used across the suite
    pub fn notes() -> &'static str {
        "Test notes"
    }

    /// Creates a valid pending claim record with the given identifier
    pub fn valid_claim(id: i64) -> NewClaim {
        NewClaim {
            id: Some(ClaimId::new(id)),
            status: ClaimStatus::Pending,
            document_path: Some(format!("/uploads/test{id}.pdf")),
            lecturer_name: Self::lecturer_name().to_string(),
            notes: Some(Self::notes().to_string()),
        }
    }

    /// Creates a valid claim record already in the given status
    pub fn claim_with_status(id: i64, status: ClaimStatus) -> NewClaim {
        NewClaim {
            status,
            ..Self::valid_claim(id)
        }
    }
}

/// Fixture for document uploads
pub struct DocumentFixtures;

impl DocumentFixtures {
    /// A small PDF-named upload with dummy content
    pub fn dummy_pdf() -> DocumentUpload {
        DocumentUpload::new("test.pdf", b"Dummy file content".to_vec())
    }

    /// A zero-length upload, treated by submit as "no file"
    pub fn empty() -> DocumentUpload {
        DocumentUpload::new("empty.pdf", Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_claim_is_pending_with_document() {
        let claim = ClaimFixtures::valid_claim(1);

        assert_eq!(claim.id, Some(ClaimId::new(1)));
        assert_eq!(claim.status, ClaimStatus::Pending);
        assert_eq!(claim.document_path.as_deref(), Some("/uploads/test1.pdf"));
        assert_eq!(claim.lecturer_name, "John Doe");
    }

    #[test]
    fn test_claim_with_status_overrides_only_status() {
        let claim = ClaimFixtures::claim_with_status(2, ClaimStatus::Approved);

        assert_eq!(claim.status, ClaimStatus::Approved);
        assert_eq!(claim.document_path.as_deref(), Some("/uploads/test2.pdf"));
    }

    #[test]
    fn test_dummy_pdf_has_content() {
        assert!(!DocumentFixtures::dummy_pdf().is_empty());
        assert!(DocumentFixtures::empty().is_empty());
    }
}
