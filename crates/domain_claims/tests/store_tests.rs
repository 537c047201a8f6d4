//! Contract tests for the in-memory claim store
//!
//! The PostgreSQL adapter is held to the same contract in
//! infra_db/tests/postgres_store_tests.rs.

use core_kernel::{ClaimId, PortError};
use domain_claims::adapters::InMemoryClaimStore;
use domain_claims::{ClaimStatus, ClaimStore, NewClaim};
use proptest::prelude::*;

fn new_claim(id: Option<i64>, status: ClaimStatus) -> NewClaim {
    NewClaim {
        id: id.map(ClaimId::new),
        status,
        document_path: id.map(|n| format!("/uploads/test{n}.pdf")),
        lecturer_name: "John Doe".to_string(),
        notes: Some("Test notes".to_string()),
    }
}

// ============================================================================
// Insert Tests
// ============================================================================

mod insert_tests {
    use super::*;

    #[tokio::test]
    async fn test_insert_with_explicit_id() {
        let store = InMemoryClaimStore::new();

        let claim = store.insert(new_claim(Some(1), ClaimStatus::Pending)).await.unwrap();

        assert_eq!(claim.id, ClaimId::new(1));
        assert_eq!(claim.status, ClaimStatus::Pending);
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_insert_duplicate_id_is_conflict() {
        let store = InMemoryClaimStore::new();
        store.insert(new_claim(Some(1), ClaimStatus::Pending)).await.unwrap();

        let err = store
            .insert(new_claim(Some(1), ClaimStatus::Pending))
            .await
            .unwrap_err();

        assert!(err.is_conflict());
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_insert_without_id_assigns_sequence() {
        let store = InMemoryClaimStore::new();

        let first = store.insert(new_claim(None, ClaimStatus::Pending)).await.unwrap();
        let second = store.insert(new_claim(None, ClaimStatus::Pending)).await.unwrap();

        assert_eq!(first.id, ClaimId::new(1));
        assert_eq!(second.id, ClaimId::new(2));
    }

    #[tokio::test]
    async fn test_assignment_skips_past_explicit_ids() {
        let store = InMemoryClaimStore::new();
        store.insert(new_claim(Some(5), ClaimStatus::Pending)).await.unwrap();

        let assigned = store.insert(new_claim(None, ClaimStatus::Pending)).await.unwrap();

        assert_eq!(assigned.id, ClaimId::new(6));
    }

    #[tokio::test]
    async fn test_insert_stamps_timestamps() {
        let store = InMemoryClaimStore::new();

        let claim = store.insert(new_claim(Some(1), ClaimStatus::Pending)).await.unwrap();

        assert_eq!(claim.submitted_at, claim.updated_at);
    }
}

// ============================================================================
// Lookup Tests
// ============================================================================

mod lookup_tests {
    use super::*;

    #[tokio::test]
    async fn test_find_by_id_miss_is_none_not_error() {
        let store = InMemoryClaimStore::new();

        let found = store.find_by_id(ClaimId::new(99)).await.unwrap();

        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_find_by_id_returns_inserted_claim() {
        let store = InMemoryClaimStore::new();
        let inserted = store.insert(new_claim(Some(1), ClaimStatus::Pending)).await.unwrap();

        let found = store.find_by_id(ClaimId::new(1)).await.unwrap().unwrap();

        assert_eq!(found, inserted);
    }

    #[tokio::test]
    async fn test_find_by_status_filters_exactly() {
        let store = InMemoryClaimStore::new();
        store.insert(new_claim(Some(1), ClaimStatus::Pending)).await.unwrap();
        store.insert(new_claim(Some(2), ClaimStatus::Approved)).await.unwrap();
        store.insert(new_claim(Some(3), ClaimStatus::Pending)).await.unwrap();

        let pending = store.find_by_status(ClaimStatus::Pending).await.unwrap();
        let mut ids: Vec<i64> = pending.iter().map(|c| c.id.value()).collect();
        ids.sort_unstable();

        assert_eq!(ids, vec![1, 3]);
        assert!(pending.iter().all(|c| c.status == ClaimStatus::Pending));
    }

    #[tokio::test]
    async fn test_find_by_status_empty_store_is_empty_vec() {
        let store = InMemoryClaimStore::new();

        let pending = store.find_by_status(ClaimStatus::Pending).await.unwrap();

        assert!(pending.is_empty());
    }
}

// ============================================================================
// Update / Remove Tests
// ============================================================================

mod mutation_tests {
    use super::*;

    #[tokio::test]
    async fn test_update_persists_changes() {
        let store = InMemoryClaimStore::new();
        let mut claim = store.insert(new_claim(Some(1), ClaimStatus::Pending)).await.unwrap();

        claim.approve();
        store.update(&claim).await.unwrap();

        let found = store.find_by_id(ClaimId::new(1)).await.unwrap().unwrap();
        assert_eq!(found.status, ClaimStatus::Approved);
    }

    #[tokio::test]
    async fn test_update_missing_id_is_not_found() {
        let store = InMemoryClaimStore::new();
        let claim = store.insert(new_claim(Some(1), ClaimStatus::Pending)).await.unwrap();
        store.remove(ClaimId::new(1)).await.unwrap();

        let err = store.update(&claim).await.unwrap_err();

        assert!(matches!(err, PortError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_remove_deletes_record() {
        let store = InMemoryClaimStore::new();
        store.insert(new_claim(Some(1), ClaimStatus::Pending)).await.unwrap();

        store.remove(ClaimId::new(1)).await.unwrap();

        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_remove_missing_id_is_not_found() {
        let store = InMemoryClaimStore::new();

        let err = store.remove(ClaimId::new(99)).await.unwrap_err();

        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_reset_all_wipes_and_restarts_sequence() {
        let store = InMemoryClaimStore::new();
        store.insert(new_claim(Some(7), ClaimStatus::Pending)).await.unwrap();

        store.reset_all().await.unwrap();

        assert!(store.is_empty().await);
        let assigned = store.insert(new_claim(None, ClaimStatus::Pending)).await.unwrap();
        assert_eq!(assigned.id, ClaimId::new(1));
    }
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Any inserted claim fetched by id compares equal on every
    /// caller-supplied field.
    #[test]
    fn prop_insert_then_fetch_round_trips(
        id in 1i64..10_000,
        lecturer_name in "[A-Za-z][A-Za-z ]{0,39}",
        notes in proptest::option::of("[A-Za-z0-9 ]{0,60}"),
        with_document in any::<bool>(),
    ) {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .build()
            .expect("tokio runtime");

        runtime.block_on(async {
            let store = InMemoryClaimStore::new();
            let record = NewClaim {
                id: Some(ClaimId::new(id)),
                status: ClaimStatus::Pending,
                document_path: with_document.then(|| format!("/uploads/test{id}.pdf")),
                lecturer_name: lecturer_name.clone(),
                notes: notes.clone(),
            };

            store.insert(record).await.unwrap();
            let found = store.find_by_id(ClaimId::new(id)).await.unwrap().unwrap();

            assert_eq!(found.id.value(), id);
            assert_eq!(found.status, ClaimStatus::Pending);
            assert_eq!(found.lecturer_name, lecturer_name);
            assert_eq!(found.notes, notes);
            assert_eq!(found.has_document(), with_document);
        });
    }
}
