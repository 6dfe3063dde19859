//! Common test utilities for integration tests.
//!
//! This module provides helper functions and fixture builders for testing
//! the vpath library.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use vpath::Vfs;

/// A temporary data directory registered as `$DATA` in a fresh context.
#[allow(dead_code)]
pub struct DataDir {
    pub dir: TempDir,
    pub vfs: Vfs,
}

#[allow(dead_code)]
impl DataDir {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let mut vfs = Vfs::new();
        vfs.add_wildcard("$DATA", &dir.path().to_string_lossy());
        Self { dir, vfs }
    }

    /// Write `contents` to `relative` under the data directory, creating
    /// parents as needed.
    pub fn write(&self, relative: &str, contents: impl AsRef<[u8]>) -> PathBuf {
        let path = self.dir.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, contents).unwrap();
        path
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }
}

/// Path to a file under `tests/fixtures/configs`.
#[allow(dead_code)]
pub fn fixture_path(relative: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("configs")
        .join(relative)
}
