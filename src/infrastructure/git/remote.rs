//! Remote repository provider
//!
//! Clones a URL into a scratch directory and deletes the clone on close.

use std::fs;
use std::path::{Path, PathBuf};

use git2::Repository as GitRepository;
use tempfile::TempDir;
use tracing::{debug, info};

use super::checkout::{checkout, remove_untracked};
use super::local::working_tree_root;
use crate::domain::ports::Repository;
use crate::error::{MonoMetaError, MonoMetaResult};

/// Where a clone lives until the repository is closed
enum Scratch {
    /// Fresh temporary directory, removed on drop
    Temp(TempDir),
    /// Caller-chosen clone path
    Dir(PathBuf),
}

/// A repository cloned from a remote URL
pub struct RemoteRepository {
    repo: GitRepository,
    root: PathBuf,
    scratch: Option<Scratch>,
}

impl RemoteRepository {
    /// Clone `url` into `into`, or into a new temporary directory
    pub fn clone_url(url: &str, into: Option<&Path>) -> MonoMetaResult<Self> {
        let scratch = match into {
            Some(path) => Scratch::Dir(path.to_path_buf()),
            None => Scratch::Temp(
                tempfile::Builder::new()
                    .prefix("mono-meta-")
                    .tempdir()?,
            ),
        };
        let destination = match &scratch {
            Scratch::Temp(dir) => dir.path().to_path_buf(),
            Scratch::Dir(path) => path.clone(),
        };

        info!(%url, path = %destination.display(), "cloning repository");

        let repo = GitRepository::clone(url, &destination).map_err(|e| {
            MonoMetaError::RepositoryAccessFailed {
                location: url.to_string(),
                message: format!(
                    "failed to clone into '{}': {}",
                    destination.display(),
                    e.message()
                ),
            }
        })?;
        let root = working_tree_root(&repo, url)?;

        Ok(Self {
            repo,
            root,
            scratch: Some(scratch),
        })
    }
}

impl Repository for RemoteRepository {
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
        match self.scratch.take() {
            Some(Scratch::Temp(dir)) => {
                debug!(path = %dir.path().display(), "removing clone");
                dir.close()?;
            }
            Some(Scratch::Dir(path)) => {
                debug!(path = %path.display(), "removing clone");
                if path.exists() {
                    fs::remove_dir_all(&path)?;
                }
            }
            None => {}
        }
        Ok(())
    }
}
