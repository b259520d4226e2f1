//! Common test utilities for mono-meta CLI and scenario tests.
//!
//! This module provides:
//! - `TestRepo`: a throwaway git repository driven through `git2`
//! - `MonoMeta`: a runner for the built binary with a scrubbed environment

#![allow(dead_code)]

pub mod repo;

pub use repo::*;

use std::path::Path;
use std::process::{Command, Output};

/// Build command used by the tests: the artifact is a copy of `main.txt`
pub const COPY_BUILD: &str = "cp main.txt $1";

/// Result of running a mono-meta CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    fn from_output(output: Output) -> Self {
        Self {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }

    /// Parse stdout as JSON
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.stdout).unwrap_or_else(|e| {
            panic!(
                "stdout is not JSON ({}):\n{}\nstderr:\n{}",
                e, self.stdout, self.stderr
            )
        })
    }

    /// `(name, comment)` pairs of a JSON diff, in output order
    pub fn classified(&self) -> Vec<(String, String)> {
        self.json()
            .as_array()
            .expect("diff output is an array")
            .iter()
            .map(|d| {
                (
                    d["name"].as_str().unwrap().to_string(),
                    d["comment"].as_str().unwrap().to_string(),
                )
            })
            .collect()
    }
}

/// Command builder for the mono-meta binary
pub fn mono_meta() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_mono-meta"));
    for (key, _) in std::env::vars() {
        if key.starts_with("MONO_META_") {
            cmd.env_remove(&key);
        }
    }
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Run `mono-meta diff` against a local repository
pub fn diff(repo: &Path, base: &str, compare: &str, extra: &[&str]) -> TestResult {
    let output = mono_meta()
        .args(["diff", "--services", "services/*", "--build-cmd", COPY_BUILD])
        .arg("--local")
        .arg(repo)
        .args(["--base", base, "--compare", compare])
        .args(extra)
        .output()
        .expect("failed to run mono-meta");
    TestResult::from_output(output)
}

/// Run `mono-meta services` against a local repository
pub fn services(repo: &Path, branch: &str, extra: &[&str]) -> TestResult {
    let output = mono_meta()
        .args(["services", "--services", "services/*", "--build-cmd", COPY_BUILD])
        .arg("--local")
        .arg(repo)
        .args(["--branch", branch])
        .args(extra)
        .output()
        .expect("failed to run mono-meta");
    TestResult::from_output(output)
}

/// Run mono-meta with arbitrary arguments
pub fn run(args: &[&str]) -> TestResult {
    let output = mono_meta()
        .args(args)
        .output()
        .expect("failed to run mono-meta");
    TestResult::from_output(output)
}
