//! Glob Service Locator
//!
//! Implements the ServiceLocator port by expanding the pattern one segment at
//! a time. Literal segments are joined, wildcard segments are matched against
//! directory entries. As in a shell, `*` does not match a leading dot.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::ports::ServiceLocator;
use crate::domain::value_objects::{is_glob_segment, segment_matcher, ServicePattern};
use crate::error::MonoMetaResult;

/// Locates service directories with shell-style globbing
#[derive(Debug, Clone, Copy, Default)]
pub struct GlobLocator;

impl GlobLocator {
    /// Create a new GlobLocator instance
    pub fn new() -> Self {
        Self
    }

    fn expand(candidates: &[PathBuf], segment: &str) -> MonoMetaResult<Vec<PathBuf>> {
        if !is_glob_segment(segment) {
            return Ok(candidates
                .iter()
                .map(|dir| dir.join(segment))
                .filter(|path| path.exists())
                .collect());
        }

        let matcher = segment_matcher(segment)?;
        let include_hidden = segment.starts_with('.');
        let mut matches = Vec::new();

        for dir in candidates {
            // unreadable or non-directory candidates simply match nothing
            let Ok(entries) = fs::read_dir(dir) else {
                continue;
            };

            let mut found: Vec<PathBuf> = entries
                .flatten()
                .filter(|entry| {
                    let name = entry.file_name();
                    let name = name.to_string_lossy();
                    (include_hidden || !name.starts_with('.')) && matcher.is_match(name.as_ref())
                })
                .map(|entry| entry.path())
                .collect();
            found.sort();
            matches.extend(found);
        }

        Ok(matches)
    }
}

impl ServiceLocator for GlobLocator {
    fn locate(&self, root: &Path, pattern: &ServicePattern) -> MonoMetaResult<Vec<PathBuf>> {
        let mut candidates = vec![root.to_path_buf()];

        for segment in pattern.segments() {
            candidates = Self::expand(&candidates, segment)?;
            if candidates.is_empty() {
                break;
            }
        }

        Ok(candidates.into_iter().filter(|path| path.is_dir()).collect())
    }
}
