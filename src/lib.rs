//! mono-meta - service inventory and diff for monorepos
//!
//! Checks out git references of a monorepo, builds every service directory
//! matched by a glob pattern, fingerprints the artifacts and reports which
//! services are new, removed, modified or unmodified between two references.
//!
//! ```ignore
//! use mono_meta::{Config, presentation::factory};
//!
//! let settings = config.validate()?;
//! let mut diff = factory::create_diff_use_case(&settings, Arc::new(NoopEventSink))?;
//! let result = diff.execute("master", "feature")?;
//! diff.close()?;
//! ```

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{DiffResult, DiffUseCase, InventoryOptions, InventoryUseCase};
pub use config::{Config, Settings};
pub use domain::entities::{Comment, Service, ServiceDiff};
pub use domain::ports::{InventoryEvent, InventoryEventSink, NoopEventSink};
pub use domain::services::{DiffSummary, Reconciler};
pub use domain::value_objects::{BinaryName, BuildCommand, Checksum, ServicePattern};
pub use error::{MonoMetaError, MonoMetaResult};
