//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `git/` - Repository providers (Local, Remote)
//! - `build/` - Build runner (Shell)
//! - `fs/` - Service locator (Glob) and fingerprinter (SHA-256)
//! - `events/` - Event sinks (Tracing, JSON)

pub mod build;
pub mod events;
pub mod fs;
pub mod git;

// Re-export for convenience
pub use build::ShellBuilder;
pub use events::{JsonEventSink, TracingEventSink};
pub use fs::{GlobLocator, Sha256Fingerprinter};
pub use git::{open_repository, LocalRepository, RemoteRepository};
