//! Test fixture utilities for creating raw PCM inputs.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A test fixture holding a working directory with raw PCM files.
pub struct PcmFixture {
    pub root: TempDir,
}

impl PcmFixture {
    /// Create a new empty fixture directory.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp dir");
        Self { root }
    }

    /// Get the fixture root path.
    pub fn path(&self) -> &Path {
        self.root.path()
    }

    /// Write a raw PCM file with the given bytes.
    pub fn add_raw(&self, name: &str, bytes: &[u8]) -> PathBuf {
        let path = self.root.path().join(format!("{name}.raw"));
        fs::write(&path, bytes).expect("Failed to write raw file");
        path
    }

    /// Write a raw PCM file containing one cycle of a square wave.
    ///
    /// `length` samples alternating between +100 and -100 every
    /// `half_period` samples.
    pub fn add_square(&self, name: &str, length: usize, half_period: usize) -> PathBuf {
        let bytes: Vec<u8> = (0..length)
            .map(|i| {
                if (i / half_period) % 2 == 0 {
                    100i8 as u8
                } else {
                    (-100i8) as u8
                }
            })
            .collect();
        self.add_raw(name, &bytes)
    }

    /// Path for an output header inside the fixture.
    pub fn header_path(&self, name: &str) -> PathBuf {
        self.root.path().join(format!("{name}.h"))
    }
}

impl Default for PcmFixture {
    fn default() -> Self {
        Self::new()
    }
}
