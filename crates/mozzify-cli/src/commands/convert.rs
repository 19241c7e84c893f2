//! Convert command implementation
//!
//! Runs the core transform alone: raw signed 8-bit PCM in, header out.

use anyhow::Result;
use colored::Colorize;
use std::path::Path;
use std::process::ExitCode;

use super::{print_error_envelope, ConvertReport};

/// Run the convert command
///
/// # Arguments
/// * `input` - Path to the raw signed 8-bit PCM file
/// * `output` - Path of the header file to write
/// * `name` - Base identifier for the emitted array and macros
/// * `sample_rate` - Sampling rate the raw file was produced at, in Hz
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 success, 1 conversion error
pub fn run(
    input: &str,
    output: &str,
    name: &str,
    sample_rate: u32,
    json_output: bool,
) -> Result<ExitCode> {
    match mozzify_core::convert(Path::new(input), Path::new(output), name, sample_rate) {
        Ok(result) => {
            if json_output {
                let report = ConvertReport::new(&result, output);
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{} {}", "Wrote".green(), output);
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
            Ok(ExitCode::from(1))
        }
    }
}
