//! Machine-readable JSON envelopes shared by the commands.

use mozzify_core::ConvertResult;
use serde::Serialize;

/// JSON report for a completed conversion.
#[derive(Debug, Serialize)]
pub struct ConvertReport {
    /// Whether the conversion succeeded (always true when emitted).
    pub success: bool,
    /// Path of the emitted header file.
    pub output: String,
    /// Number of samples in the emitted array.
    pub sample_count: usize,
    /// Power-of-two lookup table length.
    pub table_size: usize,
    /// Reference playback frequency in Hz.
    pub frequency: u32,
    /// BLAKE3 hash of the header text.
    pub header_hash: String,
    /// Diagnostic text from the external converter, when the pipeline ran it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub converter_diagnostics: Option<String>,
}

impl ConvertReport {
    /// Builds a report from a conversion result and output path.
    pub fn new(result: &ConvertResult, output: &str) -> Self {
        Self {
            success: true,
            output: output.to_string(),
            sample_count: result.sample_count,
            table_size: result.table_size,
            frequency: result.frequency,
            header_hash: result.header_hash.clone(),
            converter_diagnostics: None,
        }
    }

    /// Attaches converter diagnostics to the report.
    pub fn with_diagnostics(mut self, diagnostics: String) -> Self {
        if !diagnostics.is_empty() {
            self.converter_diagnostics = Some(diagnostics);
        }
        self
    }
}

/// Prints a JSON error envelope with a stable error code.
pub fn print_error_envelope(code: &str, message: &str) {
    let envelope = serde_json::json!({
        "success": false,
        "error": {
            "code": code,
            "message": message,
        }
    });
    println!("{}", serde_json::to_string_pretty(&envelope).expect("envelope is valid JSON"));
}
