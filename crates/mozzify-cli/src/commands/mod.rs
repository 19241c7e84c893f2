//! Command implementations for the mozzify CLI.

pub mod convert;
pub mod doctor;
pub mod generate;

mod report;

pub use report::{print_error_envelope, ConvertReport};
