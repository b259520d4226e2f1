//! Diff Use Case
//!
//! Orchestrates the diff flow:
//! 1. Inventory the compare reference
//! 2. Inventory the base reference
//! 3. Reconcile both inventories by service name
//!
//! Compare is inventoried first, so the working tree is left at base.

use crate::domain::entities::ServiceDiff;
use crate::domain::ports::{
    Fingerprinter, InventoryEvent, Repository, ServiceBuilder, ServiceLocator,
};
use crate::domain::services::{DiffSummary, Reconciler};
use crate::error::MonoMetaResult;

use super::inventory::InventoryUseCase;

/// Result of a diff
#[derive(Debug, Clone, Default)]
pub struct DiffResult {
    /// One entry per service name seen on either side, sorted by name
    pub diffs: Vec<ServiceDiff>,
    pub summary: DiffSummary,
}

impl DiffResult {
    pub fn new(diffs: Vec<ServiceDiff>) -> Self {
        let summary = DiffSummary::of(&diffs);
        Self { diffs, summary }
    }

    pub fn has_changes(&self) -> bool {
        self.summary.changed() > 0
    }

    /// Keep only new, removed and modified services
    pub fn changed_only(self) -> Self {
        Self::new(self.diffs.into_iter().filter(|d| d.changed).collect())
    }
}

/// Diff use case - compares the services of two references
pub struct DiffUseCase<R, L, B, F>
where
    R: Repository,
    L: ServiceLocator,
    B: ServiceBuilder,
    F: Fingerprinter,
{
    inventory: InventoryUseCase<R, L, B, F>,
    reconciler: Reconciler,
}

impl<R, L, B, F> DiffUseCase<R, L, B, F>
where
    R: Repository,
    L: ServiceLocator,
    B: ServiceBuilder,
    F: Fingerprinter,
{
    pub fn new(inventory: InventoryUseCase<R, L, B, F>) -> Self {
        Self {
            inventory,
            reconciler: Reconciler::new(),
        }
    }

    /// Diff `base` against `compare`
    ///
    /// Either inventory failing aborts the diff with that failure.
    pub fn execute(&mut self, base: &str, compare: &str) -> MonoMetaResult<DiffResult> {
        let compare_services = self.inventory.inventory(compare)?;
        let base_services = self.inventory.inventory(base)?;

        let result = DiffResult::new(self.reconciler.reconcile(base_services, compare_services));

        self.inventory.events().on_event(InventoryEvent::DiffCompleted {
            base: base.to_string(),
            compare: compare.to_string(),
            total: result.summary.total(),
            changed: result.summary.changed(),
        });

        Ok(result)
    }

    /// Release the repository
    pub fn close(&mut self) -> MonoMetaResult<()> {
        self.inventory.close()
    }

    pub fn inventory(&self) -> &InventoryUseCase<R, L, B, F> {
        &self.inventory
    }
}
