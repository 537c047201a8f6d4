//! Core Kernel - Foundational types for the claims workflow system
//!
//! This crate provides the building blocks shared by the domain and
//! infrastructure layers:
//! - Strongly-typed claim identifiers
//! - The common error type
//! - Port infrastructure for swappable storage adapters

pub mod identifiers;
pub mod error;
pub mod ports;

pub use identifiers::ClaimId;
pub use error::CoreError;
pub use ports::{DomainPort, PortError};
