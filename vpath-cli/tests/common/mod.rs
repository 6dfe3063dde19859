//! Common test utilities for CLI integration tests.
//!
//! This module provides an isolated environment for running the `vpath`
//! binary: a temporary working directory, an empty user configuration
//! directory, and a data directory to point wildcards at.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Environment variables the binary reads, cleared for every test.
const VPATH_ENV: &[&str] = &[
    "VPATH_WILDCARDS",
    "VPATH_TIE_BREAK",
    "VPATH_LOG_MODE",
    "VPATH_CONFIG_DIR",
];

/// Test environment with isolated configuration and data directories.
pub struct TestEnv {
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Working directory the binary runs in
    pub work_dir: PathBuf,
    /// User configuration directory passed via `--config-dir`
    pub config_dir: PathBuf,
    /// Directory `$DATA` points at in [`TestEnv::with_data`]
    pub data_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let root = temp_dir.path().to_path_buf();
        let work_dir = root.join("work");
        let config_dir = root.join("config");
        let data_dir = root.join("data");
        for dir in [&work_dir, &config_dir, &data_dir] {
            fs::create_dir_all(dir).expect("Failed to create test directory");
        }

        Self {
            temp_dir,
            work_dir,
            config_dir,
            data_dir,
        }
    }

    /// A command running in the working directory with a clean environment.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("vpath").expect("Failed to find vpath binary");
        cmd.current_dir(&self.work_dir)
            .arg("--config-dir")
            .arg(&self.config_dir);
        for var in VPATH_ENV {
            cmd.env_remove(var);
        }
        cmd
    }

    /// A command with `$DATA` registered against the data directory.
    pub fn with_data(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("--wildcard").arg(self.data_wildcard());
        cmd
    }

    pub fn data_wildcard(&self) -> String {
        format!("$DATA={}", self.data_dir.display())
    }

    /// Write a file under the data directory.
    pub fn write_data(&self, relative: &str, contents: impl AsRef<[u8]>) -> PathBuf {
        write_file(&self.data_dir.join(relative), contents)
    }

    /// Write `vpath.yaml` or another file into the working directory.
    pub fn write_work(&self, relative: &str, contents: &str) -> PathBuf {
        write_file(&self.work_dir.join(relative), contents)
    }

    /// Write the user configuration file.
    pub fn write_user_config(&self, contents: &str) -> PathBuf {
        write_file(&self.config_dir.join("config.yaml"), contents)
    }
}

fn write_file(path: &Path, contents: impl AsRef<[u8]>) -> PathBuf {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create parent directory");
    }
    fs::write(path, contents).expect("Failed to write test file");
    path.to_path_buf()
}
