//! Wavetable sizing and playback frequency derivation.

use std::path::Path;

use crate::error::{CoreError, CoreResult};

/// Derived metadata for one wavetable conversion.
///
/// Created once per conversion and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WavetableDescriptor {
    /// Number of samples in the source PCM stream.
    pub sample_count: usize,
    /// Power-of-two lookup table length.
    pub table_size: usize,
    /// Sampling rate of the source PCM stream in Hz.
    pub sampling_rate: u32,
    /// Base identifier for the emitted array and macros.
    pub name: String,
}

impl WavetableDescriptor {
    /// Derives a descriptor from a sample count, sampling rate, and name.
    ///
    /// # Errors
    /// Returns [`CoreError::EmptyInput`] for a zero sample count and
    /// [`CoreError::InvalidSampleRate`] for a zero sampling rate.
    pub fn derive(
        sample_count: usize,
        sampling_rate: u32,
        name: impl Into<String>,
        source: &Path,
    ) -> CoreResult<Self> {
        if sampling_rate == 0 {
            return Err(CoreError::InvalidSampleRate { rate: 0 });
        }
        let table_size = table_size_for(sample_count, source)?;
        Ok(Self {
            sample_count,
            table_size,
            sampling_rate,
            name: name.into(),
        })
    }

    /// Frequency at which the table plays back when read once per cycle
    /// at the source rate.
    pub fn playback_frequency(&self) -> u32 {
        // table_size is always >= 1 here
        self.sampling_rate / self.table_size as u32
    }
}

/// Computes the wavetable length for a sample count: the largest power of
/// two that is less than or equal to `sample_count`. A count that is
/// already a power of two maps to itself; a count of 1 maps to 1.
///
/// # Errors
/// Returns [`CoreError::EmptyInput`] if `sample_count` is zero (the path
/// is only used for the error message).
pub fn table_size(sample_count: usize) -> CoreResult<usize> {
    table_size_for(sample_count, Path::new(""))
}

fn table_size_for(sample_count: usize, source: &Path) -> CoreResult<usize> {
    if sample_count == 0 {
        return Err(CoreError::EmptyInput {
            path: source.to_path_buf(),
        });
    }
    Ok(1usize << sample_count.ilog2())
}

/// Computes the reference playback frequency `rate / table_size`,
/// truncated to an integer to match the emitted macro's type.
///
/// # Errors
/// Returns [`CoreError::InvalidSampleRate`] if `rate` is zero and
/// [`CoreError::EmptyInput`] if `table_size` is zero.
pub fn playback_frequency(rate: u32, table_size: usize) -> CoreResult<u32> {
    if rate == 0 {
        return Err(CoreError::InvalidSampleRate { rate: 0 });
    }
    if table_size == 0 {
        return Err(CoreError::EmptyInput {
            path: Default::default(),
        });
    }
    Ok(rate / table_size as u32)
}
