//! End-to-End Conversion Tests for mozzify
//!
//! Tests verify the full raw-PCM-to-header transform through the public
//! `mozzify_core::convert` entry point.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p mozzify-tests --test e2e_convert
//! ```

use mozzify_core::{convert, CoreError};
use mozzify_tests::fixtures::PcmFixture;
use pretty_assertions::assert_eq;

#[test]
fn test_convert_writes_complete_header() {
    let fixture = PcmFixture::new();
    let raw = fixture.add_square("square", 64, 8);
    let out = fixture.header_path("square");

    let result = convert(&raw, &out, "square", 16384).unwrap();
    assert_eq!(result.sample_count, 64);
    assert_eq!(result.table_size, 64);
    assert_eq!(result.frequency, 256);

    let text = std::fs::read_to_string(&out).unwrap();
    assert!(text.contains("#ifndef SQUARE_H_"));
    assert!(text.contains("#define SQUARE_NUM_CELLS 64"));
    assert!(text.contains("#define SQUARE_TABLE_SIZE 64"));
    assert!(text.contains("#define SQUARE_SAMPLERATE 16384"));
    assert!(text.contains("#define SQUARE_BASE_FREQUENCY 256"));
    assert!(text.contains("CONSTTABLE_STORAGE(int8_t) SQUARE_DATA [] = {"));
    assert!(text.contains("#include \"mozzi_pgmspace.h\""));
    assert!(text.ends_with("#endif /* SQUARE_H_ */\n"));
}

#[test]
fn test_convert_array_literal_count_matches_sample_count() {
    let fixture = PcmFixture::new();
    let raw = fixture.add_square("count", 100, 5);
    let out = fixture.header_path("count");

    let result = convert(&raw, &out, "count", 8000).unwrap();
    assert_eq!(result.sample_count, 100);
    assert_eq!(result.table_size, 64);

    let text = std::fs::read_to_string(&out).unwrap();
    let body = text
        .split("_DATA [] = {")
        .nth(1)
        .and_then(|s| s.split("};").next())
        .expect("array body present");
    let literals = body
        .split(',')
        .filter(|s| !s.trim().is_empty())
        .count();
    assert_eq!(literals, 100);
}

#[test]
fn test_convert_non_power_of_two_floors_table_size() {
    let fixture = PcmFixture::new();
    let raw = fixture.add_raw("five", &[1, 0xff, 2, 0xfe, 0]);
    let out = fixture.header_path("five");

    let result = convert(&raw, &out, "five", 16000).unwrap();
    assert_eq!(result.table_size, 4);
    assert_eq!(result.frequency, 4000);
}

#[test]
fn test_convert_rejects_empty_input() {
    let fixture = PcmFixture::new();
    let raw = fixture.add_raw("empty", &[]);
    let out = fixture.header_path("empty");

    let err = convert(&raw, &out, "empty", 8000).unwrap_err();
    assert!(matches!(err, CoreError::EmptyInput { .. }));
    assert!(!out.exists());
}

#[test]
fn test_convert_rejects_zero_sample_rate() {
    let fixture = PcmFixture::new();
    let raw = fixture.add_raw("tone", &[1, 2, 3]);
    let out = fixture.header_path("tone");

    let err = convert(&raw, &out, "tone", 0).unwrap_err();
    assert!(matches!(err, CoreError::InvalidSampleRate { rate: 0 }));
    assert!(!out.exists());
}

#[test]
fn test_convert_write_failure_leaves_no_partial_artifact() {
    let fixture = PcmFixture::new();
    let raw = fixture.add_raw("tone", &[1, 2, 3, 4]);
    let out = fixture.path().join("missing_dir").join("tone.h");

    let err = convert(&raw, &out, "tone", 8000).unwrap_err();
    assert!(matches!(err, CoreError::Io { .. }));
    assert!(!out.exists());
    assert!(!out.parent().unwrap().exists());
}

#[test]
fn test_convert_sanitizes_awkward_names() {
    let fixture = PcmFixture::new();
    let raw = fixture.add_raw("awkward", &[1, 2, 3, 4]);
    let out = fixture.header_path("awkward");

    convert(&raw, &out, "808 kick-drum", 8000).unwrap();
    let text = std::fs::read_to_string(&out).unwrap();
    assert!(text.contains("#ifndef _808_KICK_DRUM_H_"));
    assert!(text.contains("CONSTTABLE_STORAGE(int8_t) _808_KICK_DRUM_DATA [] = {"));
}
