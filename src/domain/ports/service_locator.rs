//! ServiceLocator port - enumerate service directories

use std::path::{Path, PathBuf};

use crate::domain::value_objects::ServicePattern;
use crate::error::MonoMetaResult;

/// Expands a service pattern against a working tree root
pub trait ServiceLocator {
    /// Directories under `root` matching `pattern`
    ///
    /// Order follows filesystem enumeration and is not guaranteed to be
    /// sorted. Callers impose the canonical ordering.
    fn locate(&self, root: &Path, pattern: &ServicePattern) -> MonoMetaResult<Vec<PathBuf>>;
}

impl<L: ServiceLocator + ?Sized> ServiceLocator for &L {
    fn locate(&self, root: &Path, pattern: &ServicePattern) -> MonoMetaResult<Vec<PathBuf>> {
        (**self).locate(root, pattern)
    }
}
