//! Service path pattern value object
//!
//! A shell-glob-style pattern, relative to the repository root, that matches
//! the directories holding services (e.g. `services/*` or `cmd/*/server`).
//! Wildcards apply within a single path segment; recursive `**` is rejected.

use globset::{GlobBuilder, GlobMatcher};
use std::fmt;
use std::path::{Component, Path, PathBuf};

use crate::error::{MonoMetaError, MonoMetaResult};

/// Characters that make a path segment a glob rather than a literal
const GLOB_META: &[char] = &['*', '?', '[', '{'];

/// Validated service path pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServicePattern {
    raw: String,
    segments: Vec<String>,
}

impl ServicePattern {
    /// Parse and validate a pattern
    pub fn new(pattern: &str) -> MonoMetaResult<Self> {
        let trimmed = pattern.trim();
        if trimmed.is_empty() {
            return Err(MonoMetaError::config("services path is required"));
        }

        let segments: Vec<String> = trimmed
            .split(['/', '\\'])
            .filter(|s| !s.is_empty() && *s != ".")
            .map(str::to_string)
            .collect();

        if segments.is_empty() {
            return Err(MonoMetaError::config(format!(
                "services path '{}' does not name any directory",
                pattern
            )));
        }

        if segments.iter().any(|s| s.contains("**")) {
            return Err(MonoMetaError::config(format!(
                "services path '{}' must not use recursive '**' wildcards",
                pattern
            )));
        }

        if let Some(bad) = segments
            .iter()
            .filter(|s| is_glob_segment(s))
            .find_map(|s| segment_matcher(s).err())
        {
            return Err(bad);
        }

        if segments.iter().any(|s| s == "..") {
            return Err(MonoMetaError::config(format!(
                "services path '{}' must stay inside the repository",
                pattern
            )));
        }

        Ok(Self {
            raw: segments.join("/"),
            segments,
        })
    }

    /// The normalized pattern text (`/`-separated, no leading `./`)
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Pattern segments in order
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Whether any segment contains a wildcard
    pub fn has_wildcard(&self) -> bool {
        self.segments.iter().any(|s| is_glob_segment(s))
    }

    /// The pattern joined onto a repository root
    pub fn absolute(&self, root: &Path) -> PathBuf {
        self.segments
            .iter()
            .fold(root.to_path_buf(), |path, segment| path.join(segment))
    }

    /// Derive the service name of a matched directory
    ///
    /// Walks the absolute pattern and the matched path segment by segment and
    /// returns the first matched segment that differs from the pattern. That is
    /// the concrete value the wildcard took. Returns an empty string when no
    /// segment diverges.
    pub fn name_of(&self, root: &Path, matched: &Path) -> String {
        let pattern = self.absolute(root);
        let pattern_parts = normal_parts(&pattern);
        let matched_parts = normal_parts(matched);

        matched_parts
            .iter()
            .zip(pattern_parts.iter())
            .find(|(m, p)| m != p)
            .map(|(m, _)| m.clone())
            .unwrap_or_default()
    }
}

impl fmt::Display for ServicePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

/// Whether a single path segment is a glob
pub fn is_glob_segment(segment: &str) -> bool {
    segment.contains(GLOB_META)
}

/// Compile one glob segment
///
/// `*` and `?` never cross a path separator.
pub fn segment_matcher(segment: &str) -> MonoMetaResult<GlobMatcher> {
    GlobBuilder::new(segment)
        .literal_separator(true)
        .build()
        .map(|glob| glob.compile_matcher())
        .map_err(|e| {
            MonoMetaError::config(format!("invalid services pattern '{}': {}", segment, e))
        })
}

fn normal_parts(path: &Path) -> Vec<String> {
    path.components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(s.to_string_lossy().into_owned()),
            Component::RootDir | Component::Prefix(_) => Some(String::new()),
            Component::CurDir | Component::ParentDir => None,
        })
        .collect()
}
