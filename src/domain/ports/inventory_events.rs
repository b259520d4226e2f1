//! Inventory Event Port
//!
//! Provides an observable interface for inventory and diff operations.
//! This is how the library logs: the sink is injected by the caller, there is
//! no process-wide logging switch.

use std::path::PathBuf;

/// Event emitted while inventorying references and diffing them
#[derive(Debug, Clone, PartialEq)]
pub enum InventoryEvent {
    /// A reference was resolved and checked out
    CheckedOut { requested: String, resolved: String },

    /// Service directories were found for a reference
    ServicesLocated { reference: String, count: usize },

    /// A located directory was skipped by the exclude list
    ServiceExcluded { name: String, directory: PathBuf },

    /// A service build is about to run
    BuildStarted { name: String, directory: PathBuf },

    /// A service was built and fingerprinted
    ServiceBuilt {
        name: String,
        artifact: PathBuf,
        checksum: String,
    },

    /// Inventory of a reference finished
    InventoryCompleted { reference: String, count: usize },

    /// Two inventories were reconciled
    DiffCompleted {
        base: String,
        compare: String,
        total: usize,
        changed: usize,
    },
}

/// Trait for receiving inventory events
///
/// Implementations:
/// - `TracingEventSink`: structured log records via `tracing`
/// - `JsonEventSink`: NDJSON event stream for CI
/// - `NoopEventSink`: silent operation
pub trait InventoryEventSink: Send + Sync {
    /// Handle an event
    fn on_event(&self, event: InventoryEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl InventoryEventSink for NoopEventSink {
    fn on_event(&self, _event: InventoryEvent) {}
}
