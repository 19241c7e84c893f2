//! mozzify resampler backend
//!
//! Converts arbitrary audio files into the signed 8-bit raw PCM stream the
//! core transform consumes, by spawning sox as a subprocess.
//!
//! The conversion is modeled as a capability: callers depend on the
//! [`Resampler`] trait, and [`SoxResampler`] is the subprocess-backed
//! implementation. An in-process resampler can be substituted later without
//! touching the header generation pipeline.
//!
//! # sox discovery
//!
//! [`SoxResampler`] searches for the executable in this order:
//!
//! 1. `sox_path` config override
//! 2. `SOX_PATH` environment variable
//! 3. System PATH
//! 4. Common installation locations (platform-specific)

pub mod error;
mod sox;

pub use error::{ResampleError, ResampleResult};
pub use sox::{sox_version, SoxConfig, SoxResampler};

use std::path::{Path, PathBuf};

/// Output of one resample run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResampleOutput {
    /// Path of the produced raw PCM file.
    pub output_path: PathBuf,
    /// Diagnostic text the converter printed (stdout and stderr), returned
    /// as a value instead of being intercepted from the process streams.
    pub diagnostics: String,
}

/// Capability for turning an audio file into signed 8-bit raw PCM.
pub trait Resampler {
    /// Converts `input` into a headerless signed 8-bit PCM file at `output`,
    /// resampled to `target_rate` Hz.
    fn resample(
        &self,
        input: &Path,
        output: &Path,
        target_rate: u32,
    ) -> ResampleResult<ResampleOutput>;
}
