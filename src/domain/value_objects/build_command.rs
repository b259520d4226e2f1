//! Build command template
//!
//! The externally configured command line that builds one service, e.g.
//! `go build -o $1`. The template is split into words with shell quoting
//! rules but never run through a shell. The `$1` placeholder is replaced by
//! the binary name in every word, so the artifact lands at
//! `<service dir>/<binary name>`.

use std::fmt;

use crate::error::{MonoMetaError, MonoMetaResult};

/// Default build command used when none is configured
pub const DEFAULT_BUILD_CMD: &str = "go build -o $1";

/// Default artifact file name
pub const DEFAULT_BINARY_NAME: &str = "app";

/// Validated build command template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildCommand {
    template: String,
}

impl BuildCommand {
    /// Output placeholder token
    pub const PLACEHOLDER: &'static str = "$1";

    /// Parse and validate a template
    pub fn new(template: &str) -> MonoMetaResult<Self> {
        let template = template.trim();
        if template.is_empty() {
            return Err(MonoMetaError::config("build command is required"));
        }

        if !template.contains(Self::PLACEHOLDER) {
            return Err(MonoMetaError::config(format!(
                "build command ({}) must output to arg {}, e.g. '-o {}'",
                template,
                Self::PLACEHOLDER,
                Self::PLACEHOLDER
            )));
        }

        match shlex::split(template) {
            None => {
                return Err(MonoMetaError::config(format!(
                    "build command ({}) has an unterminated quote or escape",
                    template
                )));
            }
            Some(words) if words.first().map_or(true, |w| w.is_empty()) => {
                return Err(MonoMetaError::config(format!(
                    "build command ({}) names no program",
                    template
                )));
            }
            Some(_) => {}
        }

        Ok(Self {
            template: template.to_string(),
        })
    }

    /// The raw template
    pub fn as_str(&self) -> &str {
        &self.template
    }

    /// Program and arguments with the placeholder substituted
    pub fn render(&self, binary: &BinaryName) -> (String, Vec<String>) {
        let mut parts = shlex::split(&self.template)
            .unwrap_or_default()
            .into_iter()
            .map(|part| part.replace(Self::PLACEHOLDER, binary.as_str()));

        // `new` guarantees balanced quotes and a non-empty program
        let program = parts.next().unwrap_or_default();
        (program, parts.collect())
    }
}

impl Default for BuildCommand {
    fn default() -> Self {
        Self {
            template: DEFAULT_BUILD_CMD.to_string(),
        }
    }
}

impl fmt::Display for BuildCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.template)
    }
}

/// File name of the artifact a build produces inside the service directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryName(String);

impl BinaryName {
    pub fn new(name: &str) -> MonoMetaResult<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(MonoMetaError::config("binary name is required"));
        }
        if name == "." || name == ".." || name.contains(['/', '\\']) {
            return Err(MonoMetaError::config(format!(
                "binary name '{}' must be a plain file name",
                name
            )));
        }
        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for BinaryName {
    fn default() -> Self {
        Self(DEFAULT_BINARY_NAME.to_string())
    }
}

impl fmt::Display for BinaryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
