//! Checksum Value Object
//!
//! A hex-encoded content hash identifying the bytes of a build artifact.
//! Two artifacts with equal bytes always carry equal checksums, regardless
//! of where or when they were built.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

/// Content hash of an artifact
///
/// Wraps a lowercase hex SHA-256 digest (64 characters, no prefix).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Checksum(String);

impl Checksum {
    /// Wrap an already computed hex digest
    pub fn new(hex: impl Into<String>) -> Self {
        Self(hex.into().to_lowercase())
    }

    /// Compute the checksum of an in-memory byte slice
    pub fn of_bytes(bytes: &[u8]) -> Self {
        Self::from_digest(Sha256::digest(bytes))
    }

    /// Build a checksum from finished digest output
    pub fn from_digest(digest: impl fmt::LowerHex) -> Self {
        Self(format!("{:x}", digest))
    }

    /// The hex digest
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check if this checksum matches another
    pub fn matches(&self, other: &Checksum) -> bool {
        self.0 == other.0
    }
}

impl fmt::Display for Checksum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Checksum {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Checksum {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl AsRef<str> for Checksum {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
