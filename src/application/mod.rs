//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `InventoryUseCase` - Checks out a reference, builds and fingerprints its services
//! - `DiffUseCase` - Inventories two references and reconciles them

pub mod diff;
pub mod inventory;

pub use diff::{DiffResult, DiffUseCase};
pub use inventory::{InventoryOptions, InventoryUseCase};
