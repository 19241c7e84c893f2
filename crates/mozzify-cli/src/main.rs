//! mozzify CLI - Wavetable header generation for Mozzi
//!
//! This binary converts audio into C headers containing wavetable arrays
//! for the Mozzi embedded synthesis library.

use clap::{Parser, Subcommand};
use std::process::ExitCode;

// Use modules from the library crate
use mozzify_cli::commands;

/// mozzify - Mozzi wavetable header generation
#[derive(Parser)]
#[command(name = "mozzify")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a raw signed 8-bit PCM file into a wavetable header
    Convert {
        /// Path to the raw signed 8-bit PCM file
        #[arg(short, long)]
        input: String,

        /// Path of the header file to write
        #[arg(short, long)]
        output: String,

        /// Base identifier for the array and macros (default: output file stem)
        #[arg(short, long)]
        name: Option<String>,

        /// Sampling rate the raw file was produced at, in Hz
        #[arg(short = 'r', long)]
        sample_rate: u32,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Convert an audio file end to end: resample with sox, then emit the header
    Generate {
        /// Path to the source audio file (any format sox understands)
        #[arg(short, long)]
        input: String,

        /// Target sampling rate in Hz
        #[arg(short = 'r', long)]
        sample_rate: u32,

        /// Base identifier for the array and macros (default: input file stem)
        #[arg(short, long)]
        name: Option<String>,

        /// Output directory (default: directory of the input file)
        #[arg(short, long)]
        out_dir: Option<String>,

        /// Keep the intermediate .raw file instead of deleting it
        #[arg(long)]
        keep_raw: bool,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Check system dependencies and configuration
    Doctor,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Convert {
            input,
            output,
            name,
            sample_rate,
            json,
        } => {
            let name = name.unwrap_or_else(|| {
                std::path::Path::new(&output)
                    .file_stem()
                    .map(|s| s.to_string_lossy().into_owned())
                    .unwrap_or_else(|| "wavetable".to_string())
            });
            commands::convert::run(&input, &output, &name, sample_rate, json)
        }
        Commands::Generate {
            input,
            sample_rate,
            name,
            out_dir,
            keep_raw,
            json,
        } => commands::generate::run(
            &input,
            sample_rate,
            name.as_deref(),
            out_dir.as_deref(),
            keep_raw,
            json,
        ),
        Commands::Doctor => commands::doctor::run(),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
