//! mozzify End-to-End Test Infrastructure
//!
//! This crate provides integration tests for the conversion pipeline:
//!
//! - Convert: raw PCM file -> header file
//! - **Determinism**: byte-identical output across runs
//! - Generate: audio file -> sox -> raw PCM -> header (requires sox)
//!
//! ## Running Tests
//!
//! ```bash
//! # Run tests that need no external tools
//! cargo test -p mozzify-tests --test e2e_convert --test e2e_determinism
//!
//! # Run the sox pipeline tests (requires sox on PATH)
//! cargo test -p mozzify-tests --test e2e_generate -- --ignored
//! ```

pub mod fixtures;
