//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - An isolated home directory so no real configuration file is picked up
//! - Command builders with the winpath environment cleared
//! - Helpers for writing configuration files

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Every environment variable the binary reads.
const WINPATH_ENV_VARS: [&str; 9] = [
    "WINPATH_CONFIG",
    "WINPATH_LOG_MODE",
    "WINPATH_CACHE_CAPACITY",
    "WINPATH_CACHE_SHARDS",
    "WINPATH_NEGATIVE_CAPACITY",
    "WINPATH_NEGATIVE_EXPECTED_ITEMS",
    "WINPATH_FALSE_POSITIVE_RATE",
    "WINPATH_GIT_BASH_DEMANGLE",
    "RUST_LOG",
];

/// Test environment with an isolated home directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path used as `HOME` for the binary
    pub home: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let home = temp_dir.path().to_path_buf();
        Self { temp_dir, home }
    }

    /// Get a command builder for the winpath binary.
    ///
    /// `HOME` points into the temporary directory and all winpath
    /// variables are removed, so results only depend on the test's own
    /// arguments and files.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("winpath").expect("Failed to find winpath binary");
        cmd.env("HOME", &self.home).env("USERPROFILE", &self.home);
        for var in WINPATH_ENV_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Write a file under the temporary directory and return its path.
    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.home.join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&path, contents).expect("Failed to write test file");
        path
    }

    /// Write `~/.winpath/config.yaml`.
    pub fn write_default_config(&self, contents: &str) -> PathBuf {
        self.write_file(".winpath/config.yaml", contents)
    }

    /// Get the home path.
    pub fn path(&self) -> &Path {
        &self.home
    }
}

/// Stdout of a finished command as lines.
#[allow(dead_code)]
pub fn stdout_lines(output: &std::process::Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect()
}
