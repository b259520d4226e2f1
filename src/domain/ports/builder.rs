//! ServiceBuilder port - the black-box build step

use std::path::{Path, PathBuf};

use crate::error::MonoMetaResult;

/// Builds one service directory into a single artifact file
pub trait ServiceBuilder {
    /// Build `service_dir` and return the path of the produced artifact
    ///
    /// A failed build surfaces the command's combined output verbatim.
    fn build(&self, service_dir: &Path) -> MonoMetaResult<PathBuf>;

    /// Where a build of `service_dir` leaves its artifact
    fn artifact_path(&self, service_dir: &Path) -> PathBuf;
}

impl<B: ServiceBuilder + ?Sized> ServiceBuilder for &B {
    fn build(&self, service_dir: &Path) -> MonoMetaResult<PathBuf> {
        (**self).build(service_dir)
    }

    fn artifact_path(&self, service_dir: &Path) -> PathBuf {
        (**self).artifact_path(service_dir)
    }
}
