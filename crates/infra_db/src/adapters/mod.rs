//! Internal adapters implementing the claims domain ports over PostgreSQL

mod claims;

pub use claims::PostgresClaimStore;
