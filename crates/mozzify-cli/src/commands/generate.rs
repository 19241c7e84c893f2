//! Generate command implementation
//!
//! Runs the full pipeline: audio file -> sox -> raw signed 8-bit PCM ->
//! wavetable header. The intermediate raw file is removed afterwards
//! unless `--keep-raw` is given, whether or not the conversion succeeded.

use anyhow::Result;
use colored::Colorize;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use mozzify_core::CoreResult;
use mozzify_resample::{Resampler, SoxResampler};

use super::{print_error_envelope, ConvertReport};

/// Run the generate command
///
/// # Arguments
/// * `input` - Path to the source audio file (any format sox understands)
/// * `sample_rate` - Target sampling rate in Hz
/// * `name` - Base identifier (default: input file stem)
/// * `out_dir` - Output directory (default: directory of the input file)
/// * `keep_raw` - Keep the intermediate `.raw` file
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 success, 1 resample error, 2 conversion error
pub fn run(
    input: &str,
    sample_rate: u32,
    name: Option<&str>,
    out_dir: Option<&str>,
    keep_raw: bool,
    json_output: bool,
) -> Result<ExitCode> {
    let input = Path::new(input);
    let name = match name {
        Some(n) => n.to_string(),
        None => input
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "wavetable".to_string()),
    };
    let out_dir: PathBuf = match out_dir {
        Some(d) => PathBuf::from(d),
        None => input.parent().unwrap_or(Path::new(".")).to_path_buf(),
    };
    let raw_path = out_dir.join(format!("{name}.raw"));
    let header_path = out_dir.join(format!("{name}.h"));

    let resampled = match SoxResampler::new().resample(input, &raw_path, sample_rate) {
        Ok(output) => output,
        Err(e) => {
            if json_output {
                print_error_envelope(e.code(), &e.to_string());
            } else {
                eprintln!("{}: {}", "error".red(), e);
            }
            return Ok(ExitCode::from(1));
        }
    };

    let converted = convert_and_cleanup(&raw_path, &header_path, &name, sample_rate, keep_raw);

    match converted {
        Ok(result) => {
            if json_output {
                let report = ConvertReport::new(&result, &header_path.to_string_lossy())
                    .with_diagnostics(resampled.diagnostics);
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                if !resampled.diagnostics.is_empty() {
                    println!("{}", resampled.diagnostics.trim_end().dimmed());
                }
                println!("{} {}", "Wrote".green(), header_path.display());
                println!(
                    "  {} samples, table size {}, base frequency {} Hz",
                    result.sample_count, result.table_size, result.frequency
                );
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            if json_output {
                print_error_envelope(e.code(), &e.to_string());
            } else {
                eprintln!("{}: {}", "error".red(), e);
            }
            Ok(ExitCode::from(2))
        }
    }
}

/// Converts the raw file and removes it afterwards (unless kept), on
/// success and failure alike.
fn convert_and_cleanup(
    raw_path: &Path,
    header_path: &Path,
    name: &str,
    sample_rate: u32,
    keep_raw: bool,
) -> CoreResult<mozzify_core::ConvertResult> {
    let result = mozzify_core::convert(raw_path, header_path, name, sample_rate);
    if !keep_raw && raw_path.exists() {
        // best effort: the header result is what matters
        let _ = std::fs::remove_file(raw_path);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_convert_and_cleanup_removes_raw_on_success() {
        let dir = tempfile::tempdir().unwrap();
        let raw = dir.path().join("tone.raw");
        std::fs::write(&raw, [1u8, 2, 3, 4]).unwrap();
        let header = dir.path().join("tone.h");

        let result = convert_and_cleanup(&raw, &header, "tone", 8000, false).unwrap();
        assert_eq!(result.table_size, 4);
        assert!(header.exists());
        assert!(!raw.exists());
    }

    #[test]
    fn test_convert_and_cleanup_removes_raw_on_failure() {
        let dir = tempfile::tempdir().unwrap();
        let raw = dir.path().join("empty.raw");
        std::fs::write(&raw, []).unwrap();
        let header = dir.path().join("empty.h");

        let err = convert_and_cleanup(&raw, &header, "empty", 8000, false).unwrap_err();
        assert_eq!(err.code(), "CORE_002");
        assert!(!header.exists());
        assert!(!raw.exists());
    }

    #[test]
    fn test_convert_and_cleanup_honors_keep_raw() {
        let dir = tempfile::tempdir().unwrap();
        let raw = dir.path().join("tone.raw");
        std::fs::write(&raw, [1u8, 2, 3, 4]).unwrap();
        let header = dir.path().join("tone.h");

        convert_and_cleanup(&raw, &header, "tone", 8000, true).unwrap();
        assert!(raw.exists());
    }
}
