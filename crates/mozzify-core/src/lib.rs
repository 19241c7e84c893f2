//! mozzify core
//!
//! This crate implements the raw-PCM-to-wavetable-header transform used by the
//! `mozzify` tool: it reads a signed 8-bit raw PCM file, derives wavetable
//! metadata (sample count, power-of-two table size, reference playback
//! frequency), and emits a C header in the format consumed by the Mozzi
//! embedded synthesis library.
//!
//! # Determinism
//!
//! Header emission is deterministic. Given the same PCM bytes, table name, and
//! sampling rate, the output is byte-identical across runs: no timestamps, no
//! environment-dependent content. The BLAKE3 hash of the header text is
//! carried in [`ConvertResult`] so callers can validate this.
//!
//! # Example
//!
//! ```ignore
//! use mozzify_core::convert;
//! use std::path::Path;
//!
//! let result = convert(
//!     Path::new("kick.raw"),
//!     Path::new("kick.h"),
//!     "kick",
//!     16384,
//! )?;
//!
//! println!("{} samples, table size {}", result.sample_count, result.table_size);
//! ```
//!
//! # Crate Structure
//!
//! - [`convert()`] - Main entry point for header generation
//! - [`pcm`] - Raw signed 8-bit PCM reader
//! - [`table`] - Wavetable sizing and playback frequency derivation
//! - [`header`] - Deterministic header rendering and atomic writing
//! - [`error`] - Error types

pub mod convert;
pub mod error;
pub mod header;
pub mod pcm;
pub mod table;

// Re-export main types at crate root
pub use convert::{convert, ConvertResult};
pub use error::{CoreError, CoreResult};
pub use header::render_header;
pub use table::{playback_frequency, table_size, WavetableDescriptor};
