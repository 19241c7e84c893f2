//! Raw signed 8-bit PCM reader.
//!
//! The input format is the one produced by
//! `sox <in> -r <rate> -b 8 -e signed-integer <out>`: one two's-complement
//! signed byte per sample, no container header.

use std::fs;
use std::path::Path;

use crate::error::{CoreError, CoreResult};

/// Reads a raw signed 8-bit PCM file into sample values.
///
/// The entire file is consumed; each byte is reinterpreted as a
/// two's-complement `i8`.
///
/// # Errors
/// Returns [`CoreError::Io`] if the file cannot be opened or read.
pub fn read_pcm(path: &Path) -> CoreResult<Vec<i8>> {
    let bytes = fs::read(path).map_err(|e| CoreError::io(path, e))?;
    Ok(bytes.into_iter().map(|b| b as i8).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_reads_bytes_as_twos_complement() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[0x00, 0x01, 0x7f, 0x80, 0xff]).unwrap();
        file.flush().unwrap();

        let samples = read_pcm(file.path()).unwrap();
        assert_eq!(samples, vec![0, 1, 127, -128, -1]);
    }

    #[test]
    fn test_empty_file_reads_as_empty_buffer() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let samples = read_pcm(file.path()).unwrap();
        assert!(samples.is_empty());
    }

    #[test]
    fn test_missing_file_is_io_error_with_path() {
        let err = read_pcm(Path::new("does/not/exist.raw")).unwrap_err();
        match &err {
            CoreError::Io { path, .. } => {
                assert_eq!(path, Path::new("does/not/exist.raw"));
            }
            other => panic!("expected Io error, got {other:?}"),
        }
    }
}
