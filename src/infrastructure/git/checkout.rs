//! Reference resolution and checkout shared by both repository providers

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use git2::build::CheckoutBuilder;
use git2::{Repository as GitRepository, Status};
use tracing::{debug, trace};

use crate::error::{MonoMetaError, MonoMetaResult};

/// Find the full name of the reference ending with `suffix`
///
/// Every reference is visited; when several share the suffix (say a branch
/// and a tag), the last one enumerated wins.
pub(crate) fn resolve_reference(repo: &GitRepository, suffix: &str) -> MonoMetaResult<String> {
    let mut resolved = None;

    for reference in repo.references()? {
        let reference = reference?;
        let Some(name) = reference.name() else {
            continue;
        };
        if name.ends_with(suffix) {
            trace!(candidate = %name, %suffix, "reference matches suffix");
            resolved = Some(name.to_string());
        }
    }

    resolved.ok_or_else(|| MonoMetaError::ReferenceNotFound {
        reference: suffix.to_string(),
    })
}

/// Check the working tree out to the commit of the matching reference
///
/// HEAD is detached at that commit. The working tree is only touched once
/// the reference is resolved.
pub(crate) fn checkout(repo: &GitRepository, suffix: &str) -> MonoMetaResult<String> {
    let name = resolve_reference(repo, suffix)?;
    let commit = repo.find_reference(&name)?.resolve()?.peel_to_commit()?;

    let mut opts = CheckoutBuilder::new();
    opts.safe();
    repo.checkout_tree(commit.as_object(), Some(&mut opts))?;
    repo.set_head_detached(commit.id())?;

    debug!(reference = %name, commit = %commit.id(), "checked out");
    Ok(name)
}

/// Delete the untracked or ignored files among `paths`
///
/// Only regular files under `root` are considered. Tracked files stay, even
/// when modified.
pub(crate) fn remove_untracked(
    repo: &GitRepository,
    root: &Path,
    paths: &[PathBuf],
) -> MonoMetaResult<()> {
    for path in paths {
        let Ok(relative) = path.strip_prefix(root) else {
            continue;
        };
        if !path.is_file() {
            continue;
        }

        let status = repo.status_file(relative)?;
        if !status.intersects(Status::WT_NEW | Status::IGNORED) {
            trace!(path = %path.display(), ?status, "keeping tracked file");
            continue;
        }

        match fs::remove_file(path) {
            Ok(()) => debug!(path = %path.display(), "removed untracked file"),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => return Err(e.into()),
        }
    }
    Ok(())
}
