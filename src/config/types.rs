//! Configuration types

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{BinaryName, BuildCommand, ServicePattern};
use crate::error::{MonoMetaError, MonoMetaResult};

/// Raw configuration as read from a file, the environment or CLI flags
///
/// Every field is optional so layers can be merged; `validate` applies the
/// defaults and checks the result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Glob pattern locating service directories, relative to the repo root
    pub services: Option<String>,

    /// Build command template, must contain `$1`
    pub cmd: Option<String>,

    /// Artifact file name inside each service directory
    pub binary_name: Option<String>,

    /// Service names to skip
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub exclude: Vec<String>,

    /// Existing working tree, or clone target when `url` is set
    pub local: Option<PathBuf>,

    /// Remote repository to clone
    pub url: Option<String>,
}

impl Config {
    /// Overlay `other` on top of `self`; set fields in `other` win
    pub fn merge(self, other: Config) -> Config {
        Config {
            services: other.services.or(self.services),
            cmd: other.cmd.or(self.cmd),
            binary_name: other.binary_name.or(self.binary_name),
            exclude: if other.exclude.is_empty() {
                self.exclude
            } else {
                other.exclude
            },
            local: other.local.or(self.local),
            url: other.url.or(self.url),
        }
    }

    /// Apply defaults and validate
    ///
    /// Runs before any git or build work.
    pub fn validate(&self) -> MonoMetaResult<Settings> {
        let services = self
            .services
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(|| MonoMetaError::config("services path is required"))?;
        let pattern = ServicePattern::new(services)?;

        let build_command = match self.cmd.as_deref() {
            Some(cmd) => BuildCommand::new(cmd)?,
            None => BuildCommand::default(),
        };

        let binary_name = match self.binary_name.as_deref() {
            Some(name) => BinaryName::new(name)?,
            None => BinaryName::default(),
        };

        let url = self.url.as_deref().map(str::trim).filter(|u| !u.is_empty());
        let source = match (url, &self.local) {
            (Some(url), into) => RepositorySource::Remote {
                url: url.to_string(),
                into: into.clone(),
            },
            (None, Some(path)) => RepositorySource::Local(path.clone()),
            (None, None) => return Err(MonoMetaError::config("--url or --local must be set")),
        };

        let exclude = self
            .exclude
            .iter()
            .map(|e| e.trim())
            .filter(|e| !e.is_empty())
            .map(str::to_string)
            .collect();

        Ok(Settings {
            pattern,
            build_command,
            binary_name,
            exclude,
            source,
        })
    }
}

/// Where the repository comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepositorySource {
    /// Existing working tree, used in place
    Local(PathBuf),
    /// Cloned from `url`, into `into` or a temporary directory
    Remote { url: String, into: Option<PathBuf> },
}

/// Validated configuration
#[derive(Debug, Clone)]
pub struct Settings {
    pub pattern: ServicePattern,
    pub build_command: BuildCommand,
    pub binary_name: BinaryName,
    pub exclude: Vec<String>,
    pub source: RepositorySource,
}
