//! Test and in-memory adapters for the claims domain ports

mod memory;

pub use memory::{InMemoryClaimStore, InMemoryDocumentStore};
