//! Fingerprinter port - content hash of a build artifact

use std::path::Path;

use crate::domain::value_objects::Checksum;
use crate::error::MonoMetaResult;

/// Computes a deterministic checksum over an artifact's full byte content
pub trait Fingerprinter {
    fn fingerprint(&self, artifact: &Path) -> MonoMetaResult<Checksum>;
}

impl<F: Fingerprinter + ?Sized> Fingerprinter for &F {
    fn fingerprint(&self, artifact: &Path) -> MonoMetaResult<Checksum> {
        (**self).fingerprint(artifact)
    }
}
