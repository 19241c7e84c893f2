//! Deterministic Mozzi header rendering and atomic writing.
//!
//! The emitted header carries no timestamps or other variable metadata, so
//! identical inputs always produce byte-identical text.

use std::fmt::Write as _;
use std::io::Write as _;
use std::path::Path;

use crate::error::{CoreError, CoreResult};
use crate::table::WavetableDescriptor;

/// Number of sample values per emitted array line.
const VALUES_PER_LINE: usize = 8;

/// Renders the complete header text for a sample buffer.
///
/// `source` is only used in the provenance comment; it does not affect the
/// array or macro values.
pub fn render_header(samples: &[i8], desc: &WavetableDescriptor, source: &Path) -> String {
    let ident = sanitize_identifier(&desc.name);
    let guard = ident.to_uppercase();

    let mut out = String::new();
    let _ = writeln!(out, "#ifndef {guard}_H_");
    let _ = writeln!(out, "#define {guard}_H_");
    out.push('\n');
    let _ = writeln!(
        out,
        "/* {} wavetable for Mozzi, converted from {} by mozzify */",
        ident,
        source.display()
    );
    out.push('\n');
    out.push_str("#include <Arduino.h>\n");
    out.push_str("#include \"mozzi_pgmspace.h\"\n");
    out.push('\n');
    let _ = writeln!(out, "#define {guard}_NUM_CELLS {}", desc.sample_count);
    let _ = writeln!(out, "#define {guard}_TABLE_SIZE {}", desc.table_size);
    let _ = writeln!(out, "#define {guard}_SAMPLERATE {}", desc.sampling_rate);
    let _ = writeln!(
        out,
        "#define {guard}_BASE_FREQUENCY {}",
        desc.playback_frequency()
    );
    out.push('\n');
    let _ = writeln!(out, "CONSTTABLE_STORAGE(int8_t) {guard}_DATA [] = {{");
    for chunk in samples.chunks(VALUES_PER_LINE) {
        let line: Vec<String> = chunk.iter().map(|v| v.to_string()).collect();
        let _ = writeln!(out, "    {},", line.join(", "));
    }
    out.push_str("};\n");
    out.push('\n');
    let _ = writeln!(out, "#endif /* {guard}_H_ */");
    out
}

/// Writes header text to `path`, atomically.
///
/// The text is staged in a temporary file in the destination directory and
/// persisted over the target, so a failed write never leaves a partial
/// artifact behind.
///
/// # Errors
/// Returns [`CoreError::Io`] if the destination directory does not exist or
/// the write fails.
pub fn write_header(path: &Path, text: &str) -> CoreResult<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut staged = tempfile::Builder::new()
        .prefix(".mozzify_header_")
        .tempfile_in(dir)
        .map_err(|e| CoreError::io(path, e))?;
    staged
        .write_all(text.as_bytes())
        .map_err(|e| CoreError::io(path, e))?;
    staged.flush().map_err(|e| CoreError::io(path, e))?;
    staged
        .persist(path)
        .map_err(|e| CoreError::io(path, e.error))?;
    Ok(())
}

/// Reduces a requested output name to a valid C identifier.
///
/// Characters outside `[A-Za-z0-9_]` become `_`; an empty name or one
/// starting with a digit gets a leading `_`.
pub fn sanitize_identifier(name: &str) -> String {
    let mut ident: String = name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect();
    if ident.is_empty() || ident.chars().next().is_some_and(|c| c.is_ascii_digit()) {
        ident.insert(0, '_');
    }
    ident
}
