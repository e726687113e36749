//! The converter's one-line timing and memory report.

use std::fmt;
use std::time::Duration;

use crate::config::ReportFormat;
use crate::utils::number::format_general;

/// Value reported in the memory column when resident memory is unknown.
pub const RSS_UNAVAILABLE: i64 = -1;

/// Column names of the CSV report, in output order.
pub const CSV_COLUMNS: [&str; 6] = ["impl", "mode", "bytes", "proc_ms", "io_ms", "VmRSS_KiB"];

/// Measurements of one converter run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// Implementation label (first CSV column)
    pub implementation: &'static str,
    /// Mode label as given on the command line
    pub mode: String,
    /// Number of bytes converted
    pub bytes: usize,
    /// Time spent in the transform
    pub processing: Duration,
    /// Time spent writing the output file
    pub io: Duration,
    /// Resident set size after the run, if it could be read
    pub resident_kib: Option<u64>,
}

impl Report {
    /// Processing time in milliseconds.
    pub fn proc_ms(&self) -> f64 {
        duration_ms(self.processing)
    }

    /// Output write time in milliseconds.
    pub fn io_ms(&self) -> f64 {
        duration_ms(self.io)
    }

    /// Memory column value: KiB, or [`RSS_UNAVAILABLE`].
    pub fn resident_field(&self) -> i64 {
        self.resident_kib
            .and_then(|kib| i64::try_from(kib).ok())
            .unwrap_or(RSS_UNAVAILABLE)
    }

    /// Renders the report in the requested layout, without a trailing newline.
    pub fn render(&self, format: ReportFormat) -> String {
        match format {
            ReportFormat::Csv => self.to_csv(),
            ReportFormat::Text => self.to_text(),
        }
    }

    /// `serial,upper,1048576,5.723,0.364,4448`
    pub fn to_csv(&self) -> String {
        format!(
            "{},{},{},{:.3},{:.3},{}",
            self.implementation,
            self.mode,
            self.bytes,
            self.proc_ms(),
            self.io_ms(),
            self.resident_field()
        )
    }

    /// `[serial] mode=upper bytes=1048576 proc_ms=5.7232 io_ms=0.36393 VmRSS_KiB=4448`
    pub fn to_text(&self) -> String {
        format!(
            "[{}] mode={} bytes={} proc_ms={} io_ms={} VmRSS_KiB={}",
            self.implementation,
            self.mode,
            self.bytes,
            format_general(self.proc_ms()),
            format_general(self.io_ms()),
            self.resident_field()
        )
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_csv())
    }
}

fn duration_ms(duration: Duration) -> f64 {
    duration.as_secs_f64() * 1000.0
}
