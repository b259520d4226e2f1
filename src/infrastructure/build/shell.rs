//! Shell Build Runner
//!
//! Implements the ServiceBuilder port by running the configured build command
//! with the service directory as its working directory.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::domain::ports::ServiceBuilder;
use crate::domain::value_objects::{BinaryName, BuildCommand};
use crate::error::{MonoMetaError, MonoMetaResult};

/// Runs an external build command per service
#[derive(Debug, Clone, Default)]
pub struct ShellBuilder {
    command: BuildCommand,
    binary: BinaryName,
}

impl ShellBuilder {
    pub fn new(command: BuildCommand, binary: BinaryName) -> Self {
        Self { command, binary }
    }
}

impl ServiceBuilder for ShellBuilder {
    fn build(&self, service_dir: &Path) -> MonoMetaResult<PathBuf> {
        let (program, args) = self.command.render(&self.binary);

        let output = Command::new(&program)
            .args(&args)
            .current_dir(service_dir)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| MonoMetaError::BuildSpawn {
                program: program.clone(),
                directory: service_dir.to_path_buf(),
                source,
            })?;

        if !output.status.success() {
            let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
            combined.push_str(&String::from_utf8_lossy(&output.stderr));
            return Err(MonoMetaError::BuildFailed {
                directory: service_dir.to_path_buf(),
                output: combined,
            });
        }

        Ok(self.artifact_path(service_dir))
    }

    fn artifact_path(&self, service_dir: &Path) -> PathBuf {
        service_dir.join(self.binary.as_str())
    }
}
