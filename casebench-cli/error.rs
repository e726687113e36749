//! Error types for the benchmark binaries.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Main error type for CLI operations.
///
/// Every variant is fatal: the binaries print it with their program name and
/// exit with status 1.
#[derive(Debug, Error)]
pub enum Error {
    /// Failed to read the input file
    #[error("{}: cannot read input: {source}", path.display())]
    OpenInput {
        /// Path to the input file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Failed to create the output file
    #[error("{}: cannot create output: {source}", path.display())]
    CreateOutput {
        /// Path to the output file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Failed while writing the output file
    #[error("{}: cannot write output: {source}", path.display())]
    WriteOutput {
        /// Path to the output file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// A recognized flag was the last argument
    #[error("missing value for {flag}")]
    MissingValue {
        /// The flag as given on the command line
        flag: String,
    },

    /// Failed to emit the report line
    #[error("cannot write report: {0}")]
    Report(#[source] io::Error),

    /// Buffer allocation or generation failure
    #[error(transparent)]
    Generate(#[from] casebench_core::Error),
}

/// Specialized `Result` type for CLI operations.
pub type Result<T> = std::result::Result<T, Error>;
