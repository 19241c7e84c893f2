//! Error types for the core conversion.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur during wavetable header generation.
#[derive(Debug, Error)]
pub enum CoreError {
    /// File open/read/write failure, with the path that caused it.
    #[error("I/O error on {path}: {source}")]
    Io {
        /// Path of the file being read or written.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Input PCM stream contained no samples.
    #[error("empty input: {path} contains no samples")]
    EmptyInput {
        /// Path of the empty input file.
        path: PathBuf,
    },

    /// Non-positive sampling rate.
    #[error("invalid sampling rate: {rate}")]
    InvalidSampleRate {
        /// The invalid sampling rate.
        rate: i64,
    },
}

impl CoreError {
    /// Creates an I/O error with path context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Returns a stable error code for machine-readable output.
    pub fn code(&self) -> &'static str {
        match self {
            CoreError::Io { .. } => "CORE_001",
            CoreError::EmptyInput { .. } => "CORE_002",
            CoreError::InvalidSampleRate { .. } => "CORE_003",
        }
    }
}
