//! Spaceline CLI library.
//!
//! This crate provides the output formatting used by the `spaceline-cli`
//! binary.

pub mod output;
