//! Command line argument parsing for the serial case converter

use std::path::PathBuf;

use clap::Parser;

use casebench_cli::{parse_filtered, ConvertConfig, KnownFlags, ReportFormat, Result};

const KNOWN_FLAGS: KnownFlags<'static> = KnownFlags {
    with_value: &["--in", "--out", "--mode", "--report"],
    switches: &["-v", "--verbose"],
    terminal: &["-h", "--help", "-V", "--version"],
};

/// Serial ASCII case converter
///
/// Reads a whole file, converts its ASCII letters in place, writes the result
/// and prints a one-line timing and memory report.
#[derive(Parser, Debug)]
#[command(
    name = "case-serial",
    version,
    about = "Convert ASCII letter case and report timings",
    long_about = "Reads --in, upper- or lower-cases its ASCII letters, writes --out and prints \
                  impl,mode,bytes,proc_ms,io_ms,VmRSS_KiB as CSV (or as text with \
                  --report text).",
    args_override_self = true
)]
pub struct CaseSerialOpts {
    /// Input file
    #[arg(long = "in", value_name = "FILE", allow_hyphen_values = true)]
    pub input: Option<PathBuf>,

    /// Output file
    #[arg(long, value_name = "FILE", allow_hyphen_values = true)]
    pub out: Option<PathBuf>,

    /// Conversion mode; anything but `lower` converts to upper case
    #[arg(long, value_name = "upper|lower", allow_hyphen_values = true)]
    pub mode: Option<String>,

    /// Report format; anything but `csv` prints text
    #[arg(long, value_name = "csv|text", allow_hyphen_values = true)]
    pub report: Option<String>,

    /// Log phases and sizes to stderr
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

impl CaseSerialOpts {
    /// Parse command line arguments, ignoring unknown flags
    pub fn parse() -> Result<Self> {
        parse_filtered(std::env::args_os(), &KNOWN_FLAGS)
    }

    /// Build the converter configuration from defaults and the given flags
    pub fn config(&self) -> ConvertConfig {
        let mut config = ConvertConfig::default();
        if let Some(mode) = self.mode.as_deref() {
            config = config.with_mode(mode);
        }
        ConvertConfig {
            input: self.input.clone().unwrap_or(config.input),
            output: self.out.clone().unwrap_or(config.output),
            report: self
                .report
                .as_deref()
                .map_or(config.report, ReportFormat::from_arg),
            verbose: self.verbose,
            ..config
        }
    }
}
