//! Command line argument parsing for the text generator

use std::path::PathBuf;

use clap::Parser;

use casebench_cli::utils::lenient::{parse_int, parse_size, parse_uint};
use casebench_cli::{parse_filtered, GenerateConfig, KnownFlags, Result};
use casebench_core::config::{
    GenerationParams, DEFAULT_ALIGN, DEFAULT_ALPHA, DEFAULT_MISALIGN, DEFAULT_SEED,
};

const KNOWN_FLAGS: KnownFlags<'static> = KnownFlags {
    with_value: &["--size", "--alpha", "--align", "--misalign", "--seed", "--out"],
    switches: &["-v", "--verbose"],
    terminal: &["-h", "--help", "-V", "--version"],
};

/// Synthetic ASCII text generator
///
/// Fills an aligned buffer with reproducible pseudo-random ASCII text and
/// writes it to a file. Unknown flags are ignored and malformed numbers fall
/// back to defaults.
#[derive(Parser, Debug)]
#[command(
    name = "gen-text",
    version,
    about = "Generate synthetic ASCII text for benchmarks",
    long_about = "Fills a buffer with pseudo-random ASCII text. The buffer is allocated on an \
                  --align boundary and written starting --misalign bytes past it; the content \
                  depends only on --size, --alpha and --seed.",
    args_override_self = true
)]
pub struct GenTextOpts {
    /// Number of bytes to generate; K, M and G multiply by 1024
    #[arg(long, value_name = "BYTES", allow_hyphen_values = true)]
    pub size: Option<String>,

    /// Percentage of letters (clamped to 0-100)
    #[arg(long, value_name = "PERCENT", allow_hyphen_values = true)]
    pub alpha: Option<String>,

    /// Buffer alignment in bytes (power of two)
    #[arg(long, value_name = "BYTES", allow_hyphen_values = true)]
    pub align: Option<String>,

    /// Offset of the first byte past the aligned base (reduced modulo --align)
    #[arg(long, value_name = "BYTES", allow_hyphen_values = true)]
    pub misalign: Option<String>,

    /// Seed of the random engine
    #[arg(long, value_name = "N", allow_hyphen_values = true)]
    pub seed: Option<String>,

    /// Output file
    #[arg(long, value_name = "FILE", allow_hyphen_values = true)]
    pub out: Option<PathBuf>,

    /// Log parameters and timings to stderr
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

impl GenTextOpts {
    /// Parse command line arguments, ignoring unknown flags
    pub fn parse() -> Result<Self> {
        parse_filtered(std::env::args_os(), &KNOWN_FLAGS)
    }

    /// Build the generator configuration from defaults and the given flags
    pub fn config(&self) -> GenerateConfig {
        let defaults = GenerateConfig::default();

        let mut params = GenerationParams::default();
        if let Some(size) = self.size.as_deref() {
            params = params.with_size(parse_size(size));
        }
        params = params
            .with_alpha(
                self.alpha
                    .as_deref()
                    .and_then(parse_int)
                    .unwrap_or(i64::from(DEFAULT_ALPHA)),
            )
            .with_align(to_usize(self.align.as_deref().and_then(parse_uint), DEFAULT_ALIGN))
            .with_misalign(to_usize(
                self.misalign.as_deref().and_then(parse_uint),
                DEFAULT_MISALIGN,
            ))
            .with_seed(self.seed.as_deref().and_then(parse_uint).unwrap_or(DEFAULT_SEED));

        GenerateConfig {
            params,
            output: self.out.clone().unwrap_or(defaults.output),
            verbose: self.verbose,
        }
    }
}

fn to_usize(value: Option<u64>, default: usize) -> usize {
    value.map_or(default, |v| usize::try_from(v).unwrap_or(usize::MAX))
}
