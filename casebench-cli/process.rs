//! End-to-end runs of the generator and the serial converter.

use std::io::Write;
use std::time::{Duration, Instant};

use casebench_core::case::convert_in_place;
use casebench_core::generator::generate;
use casebench_core::memory::MemoryProbe;
use tracing::{debug, warn};

use crate::config::{ConvertConfig, GenerateConfig, IMPLEMENTATION_LABEL};
use crate::error::{Error, Result};
use crate::io::{read_input, write_output};
use crate::report::Report;

/// Outcome of a generator run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationSummary {
    /// Bytes written to the output file
    pub bytes: usize,
    /// Wall time for generation and writing
    pub elapsed: Duration,
}

/// Generates a corpus and writes it to the configured output file.
///
/// The workflow is strictly linear:
///
/// 1. Allocates `size + align` bytes on an `align` boundary
/// 2. Fills the window at offset `misalign` from the seeded engine
/// 3. Writes the window to the output file
///
/// # Errors
///
/// Returns an error in these cases:
///
/// - The alignment is not a power of two or the buffer cannot be allocated
/// - The output file cannot be created or written
pub fn generate_file(config: &GenerateConfig) -> Result<GenerationSummary> {
    let params = &config.params;
    debug!(
        size = params.size(),
        alpha = params.alpha(),
        align = params.align(),
        misalign = params.misalign(),
        seed = params.seed(),
        output = %config.output.display(),
        "starting generation"
    );

    let started = Instant::now();
    let text = generate(params)?;
    write_output(&config.output, text.as_bytes())?;
    let elapsed = started.elapsed();

    debug!(bytes = text.len(), elapsed_ms = elapsed.as_secs_f64() * 1000.0, "corpus written");

    Ok(GenerationSummary {
        bytes: text.len(),
        elapsed,
    })
}

/// Converts the input file and measures the run.
///
/// Only the transform is counted as processing time and only the output
/// write as I/O time; reading the input is not measured. Resident memory is
/// sampled from `probe` after the write.
///
/// # Errors
///
/// Returns an error if the input cannot be read or the output cannot be
/// created or written.
pub fn convert_file<P>(config: &ConvertConfig, probe: &P) -> Result<Report>
where
    P: MemoryProbe + ?Sized,
{
    let mut data = read_input(&config.input)?;
    debug!(
        input = %config.input.display(),
        bytes = data.len(),
        mode = %config.mode,
        "input loaded"
    );

    let t0 = Instant::now();
    convert_in_place(&mut data, config.mode);
    let t1 = Instant::now();
    write_output(&config.output, &data)?;
    let t2 = Instant::now();

    let resident_kib = probe.resident_kib();
    if resident_kib.is_none() {
        warn!("resident memory is unavailable, reporting -1");
    }

    Ok(Report {
        implementation: IMPLEMENTATION_LABEL,
        mode: config.mode_name.clone(),
        bytes: data.len(),
        processing: t1 - t0,
        io: t2 - t1,
        resident_kib,
    })
}

/// Runs [`convert_file`] and writes the rendered report line to `out`.
///
/// # Errors
///
/// Returns an error if the conversion fails or the report cannot be written.
pub fn run_convert<P, W>(config: &ConvertConfig, probe: &P, mut out: W) -> Result<Report>
where
    P: MemoryProbe + ?Sized,
    W: Write,
{
    let report = convert_file(config, probe)?;
    writeln!(out, "{}", report.render(config.report))
        .and_then(|()| out.flush())
        .map_err(Error::Report)?;
    Ok(report)
}
