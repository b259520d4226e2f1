//! Local repository provider
//!
//! Opens an existing working tree in place. Nothing is acquired, so closing
//! is a no-op.

use std::path::{Path, PathBuf};

use git2::Repository as GitRepository;

use super::checkout::{checkout, remove_untracked};
use crate::domain::ports::Repository;
use crate::error::{MonoMetaError, MonoMetaResult};

/// A repository that already exists on disk
pub struct LocalRepository {
    repo: GitRepository,
    root: PathBuf,
}

impl LocalRepository {
    /// Open the repository at `path`
    pub fn open(path: &Path) -> MonoMetaResult<Self> {
        let repo = GitRepository::open(path).map_err(|e| MonoMetaError::RepositoryAccessFailed {
            location: path.display().to_string(),
            message: e.message().to_string(),
        })?;

        let root = working_tree_root(&repo, &path.display().to_string())?;
        Ok(Self { repo, root })
    }
}

impl Repository for LocalRepository {
    fn checkout(&mut self, reference: &str) -> MonoMetaResult<String> {
        checkout(&self.repo, reference)
    }

    fn root_path(&self) -> &Path {
        &self.root
    }

    fn remove_untracked(&mut self, paths: &[PathBuf]) -> MonoMetaResult<()> {
        remove_untracked(&self.repo, &self.root, paths)
    }

    fn close(&mut self) -> MonoMetaResult<()> {
        Ok(())
    }
}

/// Absolute working tree root of an opened repository
pub(crate) fn working_tree_root(repo: &GitRepository, location: &str) -> MonoMetaResult<PathBuf> {
    let workdir = repo
        .workdir()
        .ok_or_else(|| MonoMetaError::RepositoryAccessFailed {
            location: location.to_string(),
            message: "repository has no working tree".to_string(),
        })?;

    Ok(std::path::absolute(workdir)?)
}
