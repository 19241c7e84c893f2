//! Error types for the resampler backend.

use std::process::ExitStatus;
use thiserror::Error;

/// Result type for resample operations.
pub type ResampleResult<T> = Result<T, ResampleError>;

/// Errors that can occur while running the external converter.
#[derive(Debug, Error)]
pub enum ResampleError {
    /// The sox executable could not be located.
    #[error("sox executable not found (set SOX_PATH or install sox)")]
    SoxNotFound,

    /// sox ran but exited unsuccessfully.
    #[error("sox command failed ({status}): {stderr}")]
    CommandFailed {
        /// Exit status of the sox process.
        status: ExitStatus,
        /// Captured standard error output.
        stderr: String,
    },

    /// I/O error while spawning or waiting on the process.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ResampleError {
    /// Returns a stable error code for machine-readable output.
    pub fn code(&self) -> &'static str {
        match self {
            ResampleError::SoxNotFound => "RSMP_001",
            ResampleError::CommandFailed { .. } => "RSMP_002",
            ResampleError::Io(_) => "RSMP_003",
        }
    }
}
