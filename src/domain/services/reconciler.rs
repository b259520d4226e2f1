//! Reconciler Domain Service
//!
//! Matches a base inventory against a compare inventory by service name and
//! classifies every name observed on either side.

use std::collections::BTreeMap;

use crate::domain::entities::{Comment, Service, ServiceDiff};

/// Per-classification totals of a diff
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiffSummary {
    pub new: usize,
    pub removed: usize,
    pub modified: usize,
    pub unmodified: usize,
}

impl DiffSummary {
    pub fn of(diffs: &[ServiceDiff]) -> Self {
        diffs.iter().fold(Self::default(), |mut acc, d| {
            match d.comment {
                Comment::New => acc.new += 1,
                Comment::Removed => acc.removed += 1,
                Comment::Modified => acc.modified += 1,
                Comment::Unmodified => acc.unmodified += 1,
            }
            acc
        })
    }

    /// Number of services that changed in any way
    pub fn changed(&self) -> usize {
        self.new + self.removed + self.modified
    }

    pub fn total(&self) -> usize {
        self.changed() + self.unmodified
    }
}

/// Reconciler service for classifying two inventories
#[derive(Debug, Clone, Copy, Default)]
pub struct Reconciler;

impl Reconciler {
    /// Create a new Reconciler instance
    pub fn new() -> Self {
        Self
    }

    /// Reconcile base and compare inventories
    ///
    /// Every name present in either inventory appears exactly once in the
    /// result, which is sorted by name ascending. If an inventory holds the
    /// same name twice, the later entry wins.
    pub fn reconcile(&self, base: Vec<Service>, compare: Vec<Service>) -> Vec<ServiceDiff> {
        let mut sides: BTreeMap<String, (Option<Service>, Option<Service>)> = BTreeMap::new();

        for c in compare {
            let name = c.name.clone();
            sides.entry(name).or_default().1 = Some(c);
        }

        for b in base {
            let name = b.name.clone();
            sides.entry(name).or_default().0 = Some(b);
        }

        sides
            .into_values()
            .filter_map(|(base, compare)| ServiceDiff::classify(base, compare))
            .collect()
    }
}
