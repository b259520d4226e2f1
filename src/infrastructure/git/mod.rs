//! Git Repository Providers
//!
//! Concrete implementations of the Repository port on top of `git2`.

mod checkout;
mod local;
mod remote;

pub use local::LocalRepository;
pub use remote::RemoteRepository;

use crate::config::RepositorySource;
use crate::domain::ports::Repository;
use crate::error::MonoMetaResult;

/// Open the configured repository
///
/// A remote source is cloned (into `into` when given); a local source must
/// point at an existing working tree.
pub fn open_repository(source: &RepositorySource) -> MonoMetaResult<Box<dyn Repository>> {
    match source {
        RepositorySource::Remote { url, into } => {
            Ok(Box::new(RemoteRepository::clone_url(url, into.as_deref())?))
        }
        RepositorySource::Local(path) => Ok(Box::new(LocalRepository::open(path)?)),
    }
}
