//! SHA-256 Fingerprinter
//!
//! Implements the Fingerprinter port by streaming the artifact through SHA-256.

use sha2::{Digest, Sha256};
use std::fs::File;
use std::io;
use std::path::Path;

use crate::domain::ports::Fingerprinter;
use crate::domain::value_objects::Checksum;
use crate::error::{MonoMetaError, MonoMetaResult};

/// Hashes artifact bytes with SHA-256
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha256Fingerprinter;

impl Sha256Fingerprinter {
    pub fn new() -> Self {
        Self
    }
}

impl Fingerprinter for Sha256Fingerprinter {
    fn fingerprint(&self, artifact: &Path) -> MonoMetaResult<Checksum> {
        let unreadable = |source: io::Error| MonoMetaError::ArtifactUnreadable {
            path: artifact.to_path_buf(),
            source,
        };

        let mut file = File::open(artifact).map_err(unreadable)?;
        let mut hasher = Sha256::new();
        io::copy(&mut file, &mut hasher).map_err(unreadable)?;

        Ok(Checksum::from_digest(hasher.finalize()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn fingerprint_matches_in_memory_checksum() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("app");
        fs::write(&path, b"\x7fELF binary bytes").unwrap();

        let csum = Sha256Fingerprinter::new().fingerprint(&path).unwrap();
        assert_eq!(csum, Checksum::of_bytes(b"\x7fELF binary bytes"));
    }

    #[test]
    fn fingerprint_is_independent_of_location() {
        let dir = tempdir().unwrap();
        let a = dir.path().join("a/app");
        let b = dir.path().join("b/app");
        fs::create_dir_all(a.parent().unwrap()).unwrap();
        fs::create_dir_all(b.parent().unwrap()).unwrap();
        fs::write(&a, "same").unwrap();
        fs::write(&b, "same").unwrap();

        let fp = Sha256Fingerprinter::new();
        assert_eq!(fp.fingerprint(&a).unwrap(), fp.fingerprint(&b).unwrap());
        assert_eq!(fp.fingerprint(&a).unwrap(), fp.fingerprint(&a).unwrap());
    }

    #[test]
    fn missing_artifact_is_unreadable() {
        let dir = tempdir().unwrap();
        let err = Sha256Fingerprinter::new()
            .fingerprint(&dir.path().join("app"))
            .unwrap_err();
        assert!(matches!(err, MonoMetaError::ArtifactUnreadable { .. }));
    }

    #[test]
    fn directory_is_unreadable() {
        let dir = tempdir().unwrap();
        let err = Sha256Fingerprinter::new().fingerprint(dir.path()).unwrap_err();
        assert!(matches!(err, MonoMetaError::ArtifactUnreadable { .. }));
    }
}
