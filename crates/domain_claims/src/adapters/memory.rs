//! In-memory adapters
//!
//! Map-backed implementations of the storage ports. These play the role
//! the in-memory database plays in the original test suite: full
//! relational semantics (unique keys, status filtering, reset between
//! tests) without an external engine.

use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, AtomicU64, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use core_kernel::{ClaimId, DomainPort, PortError};

use crate::claim::{Claim, ClaimStatus};
use crate::ports::{ClaimStore, DocumentStore, DocumentUpload, NewClaim};

/// In-memory claim store
///
/// Identifier assignment is monotonic and skips past any explicitly
/// supplied keys, matching the identity-column behavior of the
/// PostgreSQL adapter.
pub struct InMemoryClaimStore {
    claims: RwLock<HashMap<ClaimId, Claim>>,
    next_id: AtomicI64,
}

impl InMemoryClaimStore {
    pub fn new() -> Self {
        Self {
            claims: RwLock::new(HashMap::new()),
            next_id: AtomicI64::new(1),
        }
    }

    /// Number of live records; test helper
    pub async fn len(&self) -> usize {
        self.claims.read().await.len()
    }

    /// True when the store holds no records; test helper
    pub async fn is_empty(&self) -> bool {
        self.claims.read().await.is_empty()
    }
}

impl Default for InMemoryClaimStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DomainPort for InMemoryClaimStore {}

#[async_trait]
impl ClaimStore for InMemoryClaimStore {
    async fn insert(&self, claim: NewClaim) -> Result<Claim, PortError> {
        let mut claims = self.claims.write().await;

        let id = match claim.id {
            Some(id) => {
                if claims.contains_key(&id) {
                    return Err(PortError::conflict(format!("claim {id} already exists")));
                }
                self.next_id.fetch_max(id.value() + 1, Ordering::Relaxed);
                id
            }
            None => ClaimId::new(self.next_id.fetch_add(1, Ordering::Relaxed)),
        };

        let now = Utc::now();
        let stored = Claim {
            id,
            status: claim.status,
            document_path: claim.document_path,
            lecturer_name: claim.lecturer_name,
            notes: claim.notes,
            submitted_at: now,
            updated_at: now,
        };
        claims.insert(id, stored.clone());

        Ok(stored)
    }

    async fn find_by_id(&self, id: ClaimId) -> Result<Option<Claim>, PortError> {
        Ok(self.claims.read().await.get(&id).cloned())
    }

    async fn find_by_status(&self, status: ClaimStatus) -> Result<Vec<Claim>, PortError> {
        let claims = self.claims.read().await;
        Ok(claims
            .values()
            .filter(|c| c.status == status)
            .cloned()
            .collect())
    }

    async fn update(&self, claim: &Claim) -> Result<(), PortError> {
        let mut claims = self.claims.write().await;
        match claims.get_mut(&claim.id) {
            Some(slot) => {
                *slot = claim.clone();
                Ok(())
            }
            None => Err(PortError::not_found("Claim", claim.id)),
        }
    }

    async fn remove(&self, id: ClaimId) -> Result<(), PortError> {
        self.claims
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| PortError::not_found("Claim", id))
    }

    async fn reset_all(&self) -> Result<(), PortError> {
        self.claims.write().await.clear();
        self.next_id.store(1, Ordering::Relaxed);
        Ok(())
    }
}

/// In-memory document store
pub struct InMemoryDocumentStore {
    files: RwLock<HashMap<String, Vec<u8>>>,
    counter: AtomicU64,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self {
            files: RwLock::new(HashMap::new()),
            counter: AtomicU64::new(1),
        }
    }

    /// Number of stored documents; test helper
    pub async fn len(&self) -> usize {
        self.files.read().await.len()
    }

    /// True when a document exists at the given path; test helper
    pub async fn contains(&self, path: &str) -> bool {
        self.files.read().await.contains_key(path)
    }
}

impl Default for InMemoryDocumentStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DomainPort for InMemoryDocumentStore {}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn store(&self, upload: DocumentUpload) -> Result<String, PortError> {
        let seq = self.counter.fetch_add(1, Ordering::Relaxed);
        let path = format!("/uploads/{seq:04}-{}", upload.file_name);
        self.files.write().await.insert(path.clone(), upload.content);
        Ok(path)
    }

    async fn remove(&self, path: &str) -> Result<(), PortError> {
        self.files.write().await.remove(path);
        Ok(())
    }
}
