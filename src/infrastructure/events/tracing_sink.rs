//! Tracing Event Sink
//!
//! Forwards inventory events to `tracing` as structured records. Whether they
//! show up is decided by the subscriber the binary installs.

use tracing::{debug, info};

use crate::domain::ports::{InventoryEvent, InventoryEventSink};

/// Event sink that logs through `tracing`
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingEventSink;

impl InventoryEventSink for TracingEventSink {
    fn on_event(&self, event: InventoryEvent) {
        match event {
            InventoryEvent::CheckedOut {
                requested,
                resolved,
            } => info!(%requested, %resolved, "checked out reference"),
            InventoryEvent::ServicesLocated { reference, count } => {
                info!(%reference, count, "located services")
            }
            InventoryEvent::ServiceExcluded { name, directory } => {
                debug!(%name, directory = %directory.display(), "excluded service")
            }
            InventoryEvent::BuildStarted { name, directory } => {
                debug!(%name, directory = %directory.display(), "building service")
            }
            InventoryEvent::ServiceBuilt {
                name,
                artifact,
                checksum,
            } => debug!(%name, artifact = %artifact.display(), %checksum, "built service"),
            InventoryEvent::InventoryCompleted { reference, count } => {
                info!(%reference, count, "inventory complete")
            }
            InventoryEvent::DiffCompleted {
                base,
                compare,
                total,
                changed,
            } => info!(%base, %compare, total, changed, "diff complete"),
        }
    }
}
