//! sox subprocess invocation.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::{ResampleError, ResampleResult};
use crate::{ResampleOutput, Resampler};

/// Configuration for the sox-backed resampler.
#[derive(Debug, Clone, Default)]
pub struct SoxConfig {
    /// Path to the sox executable. When unset, discovery falls back to the
    /// `SOX_PATH` environment variable, then PATH, then common locations.
    pub sox_path: Option<PathBuf>,
}

impl SoxConfig {
    /// Sets the sox executable path.
    pub fn sox_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.sox_path = Some(path.into());
        self
    }
}

/// Resampler that shells out to sox.
#[derive(Debug, Default)]
pub struct SoxResampler {
    config: SoxConfig,
}

impl SoxResampler {
    /// Creates a resampler with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a resampler with the given configuration.
    pub fn with_config(config: SoxConfig) -> Self {
        Self { config }
    }

    /// Finds the sox executable path.
    pub fn find_sox(&self) -> ResampleResult<PathBuf> {
        // Check config override first
        if let Some(ref path) = self.config.sox_path {
            if path.exists() {
                return Ok(path.clone());
            }
        }

        // Check SOX_PATH environment variable
        if let Ok(path) = std::env::var("SOX_PATH") {
            let path = PathBuf::from(path);
            if path.exists() {
                return Ok(path);
            }
        }

        // Try to find sox in PATH
        let sox_names = if cfg!(windows) {
            vec!["sox.exe", "sox"]
        } else {
            vec!["sox"]
        };

        for name in sox_names {
            if let Ok(path) = which::which(name) {
                return Ok(path);
            }
        }

        // Try common installation paths
        let common_paths = if cfg!(windows) {
            vec![
                "C:\\Program Files (x86)\\sox-14-4-2\\sox.exe",
                "C:\\Program Files\\sox\\sox.exe",
            ]
        } else if cfg!(target_os = "macos") {
            vec!["/usr/local/bin/sox", "/opt/homebrew/bin/sox"]
        } else {
            vec!["/usr/bin/sox", "/usr/local/bin/sox"]
        };

        for path_str in common_paths {
            let path = PathBuf::from(path_str);
            if path.exists() {
                return Ok(path);
            }
        }

        Err(ResampleError::SoxNotFound)
    }
}

impl Resampler for SoxResampler {
    fn resample(
        &self,
        input: &Path,
        output: &Path,
        target_rate: u32,
    ) -> ResampleResult<ResampleOutput> {
        let sox = self.find_sox()?;

        let result = Command::new(&sox)
            .arg(input)
            .arg("-r")
            .arg(target_rate.to_string())
            .arg("-b")
            .arg("8")
            .arg("-e")
            .arg("signed-integer")
            .arg(output)
            .output()?;

        let stdout = String::from_utf8_lossy(&result.stdout);
        let stderr = String::from_utf8_lossy(&result.stderr);

        if !result.status.success() {
            return Err(ResampleError::CommandFailed {
                status: result.status,
                stderr: stderr.into_owned(),
            });
        }

        // sox reports progress on stderr even on success
        let diagnostics = if stdout.is_empty() {
            stderr.into_owned()
        } else {
            format!("{stdout}{stderr}")
        };

        Ok(ResampleOutput {
            output_path: output.to_path_buf(),
            diagnostics,
        })
    }
}

/// Returns the first line of `sox --version` output, if sox is available.
pub fn sox_version() -> ResampleResult<String> {
    let sox = SoxResampler::new().find_sox()?;
    let result = Command::new(sox).arg("--version").output()?;
    if !result.status.success() {
        return Err(ResampleError::CommandFailed {
            status: result.status,
            stderr: String::from_utf8_lossy(&result.stderr).into_owned(),
        });
    }
    // The version is in the first non-empty line of the output
    let text = String::from_utf8_lossy(&result.stdout);
    Ok(text
        .lines()
        .find(|l| !l.trim().is_empty())
        .unwrap_or_default()
        .trim()
        .to_string())
}
