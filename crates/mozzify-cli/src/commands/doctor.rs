//! Doctor command implementation
//!
//! Checks system dependencies and configuration.

use anyhow::Result;
use colored::Colorize;
use std::env;
use std::process::{Command, ExitCode};

use mozzify_resample::sox_version;

/// Run the doctor command
///
/// Checks:
/// - sox installation and version
/// - Output directory permissions
/// - Version information
///
/// # Returns
/// Exit code: 0 if all checks pass, 1 if any fail
pub fn run() -> Result<ExitCode> {
    println!("{}", "mozzify Doctor".cyan().bold());
    println!("{}", "==============".cyan());
    println!();

    let mut all_ok = true;

    println!("{}", "Versions:".bold());
    println!(
        "  {} mozzify-cli v{}",
        "->".green(),
        env!("CARGO_PKG_VERSION")
    );
    match get_rustc_version() {
        Some(version) => println!("  {} rustc {}", "->".green(), version),
        None => println!("  {} rustc (not found)", "->".yellow()),
    }
    println!();

    println!("{}", "Dependencies:".bold());
    match sox_version() {
        Ok(version) => {
            println!("  {} {} (found)", "ok".green(), version);
        }
        Err(e) => {
            println!("  {} sox not available: {}", "!!".yellow(), e);
            println!(
                "     {}",
                "sox is required for the generate pipeline; convert works without it.".dimmed()
            );
            println!("     {}", "Install from https://sox.sourceforge.net/".dimmed());
            // Not a hard failure - the core transform has no sox dependency
        }
    }
    println!();

    println!("{}", "Permissions:".bold());
    match env::current_dir() {
        Ok(dir) => {
            let test_file = dir.join(".mozzify_write_test");
            match std::fs::write(&test_file, b"test") {
                Ok(()) => {
                    let _ = std::fs::remove_file(&test_file);
                    println!("  {} current directory is writable", "ok".green());
                }
                Err(e) => {
                    println!("  {} current directory not writable: {}", "!!".red(), e);
                    all_ok = false;
                }
            }
        }
        Err(e) => {
            println!("  {} cannot determine current directory: {}", "!!".red(), e);
            all_ok = false;
        }
    }
    println!();

    if all_ok {
        println!("{}", "All checks passed.".green());
        Ok(ExitCode::SUCCESS)
    } else {
        println!("{}", "Some checks failed.".red());
        Ok(ExitCode::from(1))
    }
}

/// Gets the rustc version string, if rustc is on PATH.
fn get_rustc_version() -> Option<String> {
    let output = Command::new("rustc").arg("--version").output().ok()?;
    if !output.status.success() {
        return None;
    }
    let version = String::from_utf8_lossy(&output.stdout);
    Some(version.trim().to_string())
}
