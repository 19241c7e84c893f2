//! mozzify CLI library.
//!
//! This crate provides the command implementations behind the `mozzify`
//! binary: header generation from raw PCM, the full audio-to-header
//! pipeline, and environment diagnostics.

pub mod commands;
