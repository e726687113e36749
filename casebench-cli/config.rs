//! Configuration types and constants for the benchmark binaries.

use std::path::PathBuf;

use casebench_core::case::CaseMode;
use casebench_core::config::GenerationParams;

/// Default output file of the generator.
pub const DEFAULT_GENERATE_OUTPUT: &str = "input.bin";

/// Default input file of the converter.
pub const DEFAULT_CONVERT_INPUT: &str = "input.bin";

/// Default output file of the converter.
pub const DEFAULT_CONVERT_OUTPUT: &str = "out_serial.bin";

/// Implementation label written in the first report column.
pub const IMPLEMENTATION_LABEL: &str = "serial";

/// Mode label reported when `--mode` is not given.
pub const DEFAULT_MODE_NAME: &str = "upper";

/// Layout of the converter's report line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    /// Comma-separated values, times with three decimals
    #[default]
    Csv,
    /// Human-readable `key=value` pairs
    Text,
}

impl ReportFormat {
    /// Interprets a command-line report name.
    ///
    /// Only the exact string `"csv"` selects CSV; anything else selects text.
    pub fn from_arg(value: &str) -> Self {
        if value == "csv" {
            ReportFormat::Csv
        } else {
            ReportFormat::Text
        }
    }
}

/// Configuration for one generator run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateConfig {
    /// Size, alphabetic ratio, alignment and seed of the corpus
    pub params: GenerationParams,
    /// Destination file
    pub output: PathBuf,
    /// Verbose logging
    pub verbose: bool,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            params: GenerationParams::default(),
            output: PathBuf::from(DEFAULT_GENERATE_OUTPUT),
            verbose: false,
        }
    }
}

/// Configuration for one converter run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertConfig {
    /// Source file
    pub input: PathBuf,
    /// Destination file
    pub output: PathBuf,
    /// Conversion direction
    pub mode: CaseMode,
    /// Mode as given on the command line, echoed in the report
    pub mode_name: String,
    /// Report layout
    pub report: ReportFormat,
    /// Verbose logging
    pub verbose: bool,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_CONVERT_INPUT),
            output: PathBuf::from(DEFAULT_CONVERT_OUTPUT),
            mode: CaseMode::Upper,
            mode_name: DEFAULT_MODE_NAME.to_string(),
            report: ReportFormat::Csv,
            verbose: false,
        }
    }
}

impl ConvertConfig {
    /// Selects the conversion direction from a command-line mode name.
    ///
    /// The name is kept verbatim for the report, so `--mode title` converts
    /// to upper case but is reported as `title`.
    pub fn with_mode(mut self, name: &str) -> Self {
        self.mode = CaseMode::from_arg(name);
        self.mode_name = name.to_string();
        self
    }
}
