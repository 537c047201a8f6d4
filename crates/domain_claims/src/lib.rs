//! Claims Workflow Domain
//!
//! This crate implements the lecturer claims workflow: submission with an
//! optional supporting document, pending review, approval or rejection,
//! and deletion.
//!
//! # Claim Lifecycle
//!
//! ```text
//!         submit
//!  (none) ------> Pending --approve--> Approved
//!                    |
//!                    +------reject---> Rejected
//! ```
//!
//! Approved and Rejected are terminal. Delete removes a claim from any
//! state.

pub mod claim;
pub mod ports;
pub mod service;
pub mod adapters;
pub mod error;

pub use claim::{Claim, ClaimStatus};
pub use ports::{ClaimStore, DocumentStore, DocumentUpload, NewClaim};
pub use service::{ClaimSubmission, ClaimsService, Redirect, SubmitReceipt};
pub use error::ClaimError;
