//! Scratch directory for integration tests.

use std::path::{Path, PathBuf};

use tempfile::TempDir;

use super::fixtures;

/// Temporary working directory with helpers to create input files.
///
/// Everything is removed when the value is dropped.
pub struct TestDir {
    dir: TempDir,
}

impl TestDir {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("Failed to create temp dir"),
        }
    }

    /// Absolute path of `name` inside the directory
    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Write raw bytes to `name`
    pub fn write(&self, name: &str, bytes: &[u8]) -> PathBuf {
        let path = self.path(name);
        std::fs::write(&path, bytes).expect("Failed to write test file");
        path
    }

    /// Write an 8-bit RGB PNG
    pub fn write_rgb_png(&self, name: &str, width: u32, height: u32, pixels: &[[u8; 3]]) -> PathBuf {
        self.write(name, &fixtures::rgb_png(width, height, pixels))
    }

    /// Write an 8-bit RGBA PNG
    pub fn write_rgba_png(&self, name: &str, width: u32, height: u32, pixels: &[[u8; 4]]) -> PathBuf {
        self.write(name, &fixtures::rgba_png(width, height, pixels))
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }
}
