//! Whole-file reads and writes.
//!
//! Both tools load or store a complete buffer in one call; files are closed
//! before the functions return.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use crate::error::{Error, Result};

/// Reads the entire input file.
///
/// # Errors
///
/// Returns [`Error::OpenInput`] if the file cannot be opened or read.
pub fn read_input(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|source| Error::OpenInput {
        path: path.to_path_buf(),
        source,
    })
}

/// Creates (or truncates) `path` and writes `data` to it verbatim.
///
/// # Errors
///
/// Returns [`Error::CreateOutput`] if the file cannot be created and
/// [`Error::WriteOutput`] if writing fails part way.
pub fn write_output(path: &Path, data: &[u8]) -> Result<()> {
    let mut file = File::create(path).map_err(|source| Error::CreateOutput {
        path: path.to_path_buf(),
        source,
    })?;

    file.write_all(data)
        .and_then(|()| file.flush())
        .map_err(|source| Error::WriteOutput {
            path: path.to_path_buf(),
            source,
        })
}
