//! Repository port - abstraction over a git working tree
//!
//! Two providers exist: a local repository opened in place and a remote one
//! cloned into a scratch directory. Both expose the same capability.

use std::path::{Path, PathBuf};

use crate::error::MonoMetaResult;

/// A git working tree that can be moved between references
///
/// `checkout` mutates the working tree in place, so it takes `&mut self`:
/// no build may read the tree while a checkout is in flight.
pub trait Repository {
    /// Check out the reference whose full name ends with `reference`
    ///
    /// Returns the full resolved reference name (e.g. `refs/heads/master`).
    /// When several references share the suffix, the last one enumerated wins.
    fn checkout(&mut self, reference: &str) -> MonoMetaResult<String>;

    /// Absolute path of the working tree root
    fn root_path(&self) -> &Path;

    /// Delete the files among `paths` that the repository does not track
    ///
    /// Tracked files, missing files and paths outside the working tree are
    /// left alone.
    fn remove_untracked(&mut self, paths: &[PathBuf]) -> MonoMetaResult<()>;

    /// Release acquired resources
    ///
    /// Idempotent: later calls are no-ops, and providers that acquired
    /// nothing do nothing.
    fn close(&mut self) -> MonoMetaResult<()>;
}

impl<R: Repository + ?Sized> Repository for Box<R> {
    fn checkout(&mut self, reference: &str) -> MonoMetaResult<String> {
        (**self).checkout(reference)
    }

    fn root_path(&self) -> &Path {
        (**self).root_path()
    }

    fn remove_untracked(&mut self, paths: &[PathBuf]) -> MonoMetaResult<()> {
        (**self).remove_untracked(paths)
    }

    fn close(&mut self) -> MonoMetaResult<()> {
        (**self).close()
    }
}

impl<R: Repository + ?Sized> Repository for &mut R {
    fn checkout(&mut self, reference: &str) -> MonoMetaResult<String> {
        (**self).checkout(reference)
    }

    fn root_path(&self) -> &Path {
        (**self).root_path()
    }

    fn remove_untracked(&mut self, paths: &[PathBuf]) -> MonoMetaResult<()> {
        (**self).remove_untracked(paths)
    }

    fn close(&mut self) -> MonoMetaResult<()> {
        (**self).close()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repository_trait_is_object_safe() {
        fn _assert_object_safe(_: &dyn Repository) {}
    }
}
