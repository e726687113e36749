//! Error types and result handling for text generation.

use std::fmt;

/// Result alias using the crate-level [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;

/// Failure modes of buffer allocation and corpus output.
#[derive(Debug)]
pub enum Error {
    /// I/O failure while writing generated output.
    Io(std::io::Error),

    /// The requested alignment cannot be honored by the allocator.
    InvalidAlignment {
        /// Alignment in bytes requested by the caller
        align: usize,
    },

    /// Requested buffer could not be allocated.
    AllocationFailed {
        /// Size in bytes of the buffer that failed to allocate
        capacity: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "I/O error: {err}"),
            Error::InvalidAlignment { align } => {
                write!(f, "alignment of {align} bytes is not a power of two")
            }
            Error::AllocationFailed { capacity } => {
                write!(f, "unable to allocate aligned buffer of {capacity} bytes")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}
