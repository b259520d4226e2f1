//! Domain Layer
//!
//! Pure business logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Service and ServiceDiff
//! - `value_objects/` - Checksum, ServicePattern, BuildCommand, BinaryName
//! - `services/` - Reconciler (classification of two inventories)
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system, git or processes
//! 2. **Pure Functions** - Services are stateless and testable
//! 3. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
