//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod builder;
pub mod fingerprinter;
pub mod inventory_events;
pub mod repository;
pub mod service_locator;

pub use builder::ServiceBuilder;
pub use fingerprinter::Fingerprinter;
pub use inventory_events::{InventoryEvent, InventoryEventSink, NoopEventSink};
pub use repository::Repository;
pub use service_locator::ServiceLocator;
