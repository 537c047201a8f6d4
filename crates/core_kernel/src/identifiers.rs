//! Strongly-typed identifiers for domain entities
//!
//! A newtype wrapper around the integer claim key prevents accidental
//! mixing with other integer values flowing through the system.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Identifier of a claim record
///
/// Claims are keyed by a positive integer. Tests supply explicit values;
/// the production store assigns the next value in sequence when the
/// submitter does not provide one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClaimId(i64);

impl ClaimId {
    /// Display prefix used in logs and error messages
    pub const PREFIX: &'static str = "CLM";

    /// Creates an identifier from a raw integer value
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the underlying integer value
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for ClaimId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", Self::PREFIX, self.0)
    }
}

impl FromStr for ClaimId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Strip prefix if present
        let raw = s.strip_prefix("CLM-").unwrap_or(s);
        Ok(Self(raw.parse()?))
    }
}

impl From<i64> for ClaimId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<ClaimId> for i64 {
    fn from(id: ClaimId) -> i64 {
        id.0
    }
}
