//! Infrastructure Database Layer
//!
//! This crate provides the PostgreSQL implementation of the claims
//! storage port using SQLx.
//!
//! # Architecture
//!
//! The crate follows the ports-and-adapters pattern: the domain defines
//! [`domain_claims::ClaimStore`], and [`adapters::PostgresClaimStore`]
//! implements it over a connection pool. Callers that need to swap in the
//! in-memory adapter for tests never see the difference.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_db::{DatabaseConfig, create_pool, PostgresClaimStore};
//!
//! let pool = create_pool(DatabaseConfig::new("postgres://localhost/claims")).await?;
//! let store = PostgresClaimStore::new(pool);
//! ```

pub mod pool;
pub mod error;
pub mod adapters;

pub use pool::{DatabasePool, create_pool, create_pool_from_url, DatabaseConfig};
pub use error::DatabaseError;
pub use adapters::PostgresClaimStore;
