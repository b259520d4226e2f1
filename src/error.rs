//! Error types for mono-meta
//!
//! Uses `thiserror` for library errors. The binary wraps these in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for mono-meta operations
pub type MonoMetaResult<T> = Result<T, MonoMetaError>;

/// Main error type for mono-meta operations
#[derive(Error, Debug)]
pub enum MonoMetaError {
    /// Required configuration missing or malformed
    #[error("invalid configuration: {message}")]
    ConfigInvalid { message: String },

    /// No reference name ends with the requested string
    #[error("could not find ref/branch: {reference}")]
    ReferenceNotFound { reference: String },

    /// Build command exited non-zero
    #[error("build failed in {directory}:\n{output}")]
    BuildFailed { directory: PathBuf, output: String },

    /// Build command could not be started at all
    #[error("could not run build command '{program}' in {directory}: {source}")]
    BuildSpawn {
        program: String,
        directory: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Expected build output missing or unreadable
    #[error("could not read build artifact {path}: {source}")]
    ArtifactUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Clone or open of the working tree failed
    #[error("could not access git repository '{location}': {message}")]
    RepositoryAccessFailed { location: String, message: String },

    /// Inventory of one reference failed
    #[error("failed to get services from {reference}")]
    InventoryFailed {
        reference: String,
        #[source]
        source: Box<MonoMetaError>,
    },

    /// Git error after the repository was opened
    #[error("git error: {0}")]
    Git(#[from] git2::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl MonoMetaError {
    /// Shorthand for a `ConfigInvalid` error
    pub fn config(message: impl Into<String>) -> Self {
        Self::ConfigInvalid {
            message: message.into(),
        }
    }

    /// Wrap an error with the reference whose inventory pass it aborted
    pub fn in_inventory(self, reference: &str) -> Self {
        Self::InventoryFailed {
            reference: reference.to_string(),
            source: Box::new(self),
        }
    }

    /// The innermost error, skipping inventory wrappers
    pub fn root(&self) -> &MonoMetaError {
        match self {
            Self::InventoryFailed { source, .. } => source.root(),
            other => other,
        }
    }
}
