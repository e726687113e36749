//! Shared functionality for the `gen-text` and `case-serial` binaries.
//!
//! The crate turns command-line options into immutable run configurations,
//! performs the whole-file I/O around the core generator and case transform,
//! and renders the converter's timing report.

pub mod config;
pub mod error;
pub mod io;
pub mod logging;
pub mod process;
pub mod report;
pub mod utils;


pub use config::{
    ConvertConfig, GenerateConfig, ReportFormat, DEFAULT_CONVERT_INPUT, DEFAULT_CONVERT_OUTPUT,
    DEFAULT_GENERATE_OUTPUT, DEFAULT_MODE_NAME, IMPLEMENTATION_LABEL,
};
pub use error::{Error, Result};
pub use logging::init_logging;
pub use process::{convert_file, generate_file, run_convert, GenerationSummary};
pub use report::Report;
pub use utils::args::{parse_filtered, retain_known_args, KnownFlags};
