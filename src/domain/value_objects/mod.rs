//! Domain Value Objects
//!
//! Immutable, validated value types: the checksum of an artifact, the
//! service path pattern and the build command template.

mod build_command;
mod checksum;
mod service_pattern;

pub use build_command::{BinaryName, BuildCommand, DEFAULT_BINARY_NAME, DEFAULT_BUILD_CMD};
pub use checksum::Checksum;
pub use service_pattern::{is_glob_segment, segment_matcher, ServicePattern};
