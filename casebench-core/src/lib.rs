//! # casebench-core
//!
//! Building blocks for ASCII text micro-benchmarks.
//!
//! The crate covers the two halves of the benchmark workflow:
//!
//! - **Generation**: a reproducible synthetic corpus written through an
//!   alignment-controlled buffer ([`generator`], [`content`], [`rng`], [`buffer`]).
//! - **Conversion**: the per-byte ASCII case transform measured by the serial
//!   converter ([`case`]), plus best-effort resident-memory introspection
//!   ([`memory`]).
//!
//! ## Example
//!
//! ```
//! use casebench_core::case::{convert_in_place, CaseMode};
//! use casebench_core::config::GenerationParams;
//! use casebench_core::generator::generate;
//!
//! let params = GenerationParams::default().with_size(256).with_alpha(100);
//! let mut text = generate(&params)?.into_vec();
//! assert_eq!(text.len(), 256);
//!
//! convert_in_place(&mut text, CaseMode::Lower);
//! assert!(text.iter().all(u8::is_ascii_lowercase));
//! # Ok::<(), casebench_core::Error>(())
//! ```

pub mod buffer;
pub mod case;
pub mod config;
pub mod content;
pub mod error;
pub mod generator;
pub mod memory;
pub mod rng;

pub use error::{Error, Result};
