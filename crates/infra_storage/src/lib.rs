//! Infrastructure Storage Layer
//!
//! Local-filesystem implementation of the claims document port. Uploaded
//! files land under a configured root directory with unique, sanitized
//! names; the stored path string is what the claim record references.

mod local;

pub use local::LocalDocumentStore;
