//! ServiceDiff entity - a service reconciled across two references

use serde::{Deserialize, Serialize};
use std::fmt;

use super::service::Service;

/// Classification of a service between base and compare
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Comment {
    /// Only present at the compare reference
    New,
    /// Only present at the base reference
    Removed,
    /// Present at both, artifacts differ
    Modified,
    /// Present at both, artifacts identical
    Unmodified,
}

impl Comment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Comment::New => "new",
            Comment::Removed => "removed",
            Comment::Modified => "modified",
            Comment::Unmodified => "unmodified",
        }
    }

    /// Whether this classification means the service must be rebuilt/deployed
    pub fn is_change(&self) -> bool {
        !matches!(self, Comment::Unmodified)
    }
}

impl fmt::Display for Comment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A service's presence and change status across two references
///
/// Immutable once classified. Construct through [`ServiceDiff::classify`],
/// which rejects the impossible "absent on both sides" case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceDiff {
    pub name: String,
    pub changed: bool,
    pub comment: Comment,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base: Option<Service>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compare: Option<Service>,
}

impl ServiceDiff {
    /// Classify a service from its base and compare builds
    ///
    /// Returns `None` when neither side observed the service.
    pub fn classify(base: Option<Service>, compare: Option<Service>) -> Option<Self> {
        let (name, comment) = match (&base, &compare) {
            (None, None) => return None,
            (None, Some(c)) => (c.name.clone(), Comment::New),
            // removed entries take their name from the base build
            (Some(b), None) => (b.name.clone(), Comment::Removed),
            (Some(b), Some(c)) if b.same_build(c) => (c.name.clone(), Comment::Unmodified),
            (Some(_), Some(c)) => (c.name.clone(), Comment::Modified),
        };

        Some(Self {
            name,
            changed: comment.is_change(),
            comment,
            base,
            compare,
        })
    }
}
