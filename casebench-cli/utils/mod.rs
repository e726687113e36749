//! Small shared utilities for the benchmark binaries.
//!
//! Argument pre-filtering and permissive number parsing are shared by both
//! entrypoints; general-notation formatting backs the text report.

pub mod args;
pub mod lenient;

pub(crate) mod number;
