//! Main entry point: raw PCM file in, Mozzi header file out.

use std::path::Path;

use crate::error::{CoreError, CoreResult};
use crate::header::{render_header, write_header};
use crate::pcm::read_pcm;
use crate::table::WavetableDescriptor;

/// Result of a successful conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertResult {
    /// Number of samples in the emitted array.
    pub sample_count: usize,
    /// Power-of-two lookup table length.
    pub table_size: usize,
    /// Reference playback frequency in Hz.
    pub frequency: u32,
    /// BLAKE3 hash of the emitted header text, for determinism validation.
    pub header_hash: String,
}

/// Converts a raw signed 8-bit PCM file into a Mozzi wavetable header.
///
/// Reads every byte of `raw_pcm_path` as one signed sample, derives the
/// table metadata, and writes the header to `output_path` atomically. The
/// transform is synchronous and holds no shared state; concurrent calls are
/// safe as long as they use distinct paths.
///
/// # Errors
/// - [`CoreError::InvalidSampleRate`] if `sampling_rate` is zero
/// - [`CoreError::EmptyInput`] if the PCM file contains no samples
/// - [`CoreError::Io`] on read or write failure; on write failure no
///   partial output file is left behind
pub fn convert(
    raw_pcm_path: &Path,
    output_path: &Path,
    name: &str,
    sampling_rate: u32,
) -> CoreResult<ConvertResult> {
    if sampling_rate == 0 {
        return Err(CoreError::InvalidSampleRate { rate: 0 });
    }

    let samples = read_pcm(raw_pcm_path)?;
    let desc = WavetableDescriptor::derive(samples.len(), sampling_rate, name, raw_pcm_path)?;

    let text = render_header(&samples, &desc, raw_pcm_path);
    write_header(output_path, &text)?;

    Ok(ConvertResult {
        sample_count: desc.sample_count,
        table_size: desc.table_size,
        frequency: desc.playback_frequency(),
        header_hash: blake3::hash(text.as_bytes()).to_hex().to_string(),
    })
}
