//! Property-Based Test Generators
//!
//! Proptest strategies for generating random claim data that maintains
//! domain invariants.

use core_kernel::ClaimId;
use domain_claims::{ClaimStatus, NewClaim};
use proptest::prelude::*;

/// Strategy for generating valid claim identifiers
pub fn claim_id_strategy() -> impl Strategy<Value = ClaimId> {
    (1i64..1_000_000).prop_map(ClaimId::new)
}

/// Strategy for generating claim statuses
pub fn claim_status_strategy() -> impl Strategy<Value = ClaimStatus> {
    prop_oneof![
        Just(ClaimStatus::Pending),
        Just(ClaimStatus::Approved),
        Just(ClaimStatus::Rejected),
    ]
}

/// Strategy for generating lecturer names
pub fn lecturer_name_strategy() -> impl Strategy<Value = String> {
    "[A-Z][a-z]{1,11} [A-Z][a-z]{1,11}"
}

/// Strategy for generating optional notes
pub fn notes_strategy() -> impl Strategy<Value = Option<String>> {
    proptest::option::of("[A-Za-z0-9 ]{0,60}")
}

/// Strategy for generating optional document paths
pub fn document_path_strategy() -> impl Strategy<Value = Option<String>> {
    proptest::option::of("[a-z0-9]{1,12}\\.pdf".prop_map(|name| format!("/uploads/{name}")))
}

/// Strategy for generating whole claim records with explicit identifiers
pub fn new_claim_strategy() -> impl Strategy<Value = NewClaim> {
    (
        claim_id_strategy(),
        claim_status_strategy(),
        document_path_strategy(),
        lecturer_name_strategy(),
        notes_strategy(),
    )
        .prop_map(|(id, status, document_path, lecturer_name, notes)| NewClaim {
            id: Some(id),
            status,
            document_path,
            lecturer_name,
            notes,
        })
}
