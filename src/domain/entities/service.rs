//! Service entity - a built artifact at one git reference
//!
//! Services are created fresh on every inventory pass and discarded once the
//! diff has been computed. Nothing is cached across references or runs.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::domain::value_objects::Checksum;

/// A service built at a specific reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    /// Wildcard value that distinguishes this service from its siblings
    pub name: String,
    /// Absolute path of the produced artifact
    pub path: PathBuf,
    /// Content hash of the artifact bytes
    pub checksum: Checksum,
    /// Full name of the reference the build ran against (e.g. `refs/heads/master`)
    pub reference: String,
}

impl Service {
    pub fn new(
        name: impl Into<String>,
        path: impl Into<PathBuf>,
        checksum: Checksum,
        reference: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            checksum,
            reference: reference.into(),
        }
    }

    /// Get the artifact path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether two services were built from identical artifact bytes
    pub fn same_build(&self, other: &Service) -> bool {
        self.checksum.matches(&other.checksum)
    }
}

/// Sort services into canonical inventory order (name ascending)
pub fn sort_by_name(services: &mut [Service]) {
    services.sort_by(|a, b| a.name.cmp(&b.name));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_build_ignores_path_and_reference() {
        let a = Service::new("api", "/a/api/app", Checksum::of_bytes(b"x"), "refs/heads/master");
        let b = Service::new("api", "/b/api/app", Checksum::of_bytes(b"x"), "refs/heads/feature");
        assert!(a.same_build(&b));
    }

    #[test]
    fn sort_by_name_orders_ascending() {
        let mut services = vec![
            Service::new("worker", "/w", Checksum::new("1"), "r"),
            Service::new("api", "/a", Checksum::new("2"), "r"),
        ];
        sort_by_name(&mut services);
        assert_eq!(services[0].name, "api");
        assert_eq!(services[1].name, "worker");
    }

    #[test]
    fn serializes_expected_fields() {
        let service = Service::new(
            "api",
            "/repo/services/api/app",
            Checksum::new("abc"),
            "refs/heads/master",
        );
        let value = serde_json::to_value(&service).unwrap();
        assert_eq!(value["name"], "api");
        assert_eq!(value["path"], "/repo/services/api/app");
        assert_eq!(value["checksum"], "abc");
        assert_eq!(value["reference"], "refs/heads/master");
    }
}
