//! Custom Test Assertions
//!
//! Assertion helpers for claims that give more meaningful error messages
//! than bare equality checks.

use core_kernel::ClaimId;
use domain_claims::{Claim, ClaimStatus};

/// Asserts that a claim has the expected status
pub fn assert_claim_status(claim: &Claim, expected: ClaimStatus) {
    assert_eq!(
        claim.status, expected,
        "Claim {} has status {}, expected {}",
        claim.id, claim.status, expected
    );
}

/// Asserts that every claim in the slice is pending
pub fn assert_all_pending(claims: &[Claim]) {
    for claim in claims {
        assert_eq!(
            claim.status,
            ClaimStatus::Pending,
            "Claim {} leaked into the pending list with status {}",
            claim.id,
            claim.status
        );
    }
}

/// Asserts that the slice contains exactly the given identifiers, in any order
pub fn assert_claim_ids(claims: &[Claim], expected: &[i64]) {
    let mut actual: Vec<i64> = claims.iter().map(|c| c.id.value()).collect();
    actual.sort_unstable();

    let mut expected: Vec<i64> = expected.to_vec();
    expected.sort_unstable();

    assert_eq!(
        actual, expected,
        "Claim id set mismatch: got {actual:?}, expected {expected:?}"
    );
}

/// Asserts that a claim carries a non-empty document reference
pub fn assert_has_document(claim: &Claim) {
    assert!(
        claim.has_document(),
        "Claim {} has no stored document",
        claim.id
    );
}

/// Asserts that none of the claims carries the given identifier
pub fn assert_id_absent(claims: &[Claim], id: ClaimId) {
    assert!(
        claims.iter().all(|c| c.id != id),
        "Claim {id} unexpectedly present"
    );
}
