//! File System Implementations
//!
//! Concrete implementations of the ServiceLocator and Fingerprinter ports.

mod fingerprint;
mod locator;

pub use fingerprint::Sha256Fingerprinter;
pub use locator::GlobLocator;
