//! Serial ASCII case converter
//!
//! Baseline implementation for the case-conversion benchmarks: one thread,
//! one pass, one report line on stdout.

use std::io;
use std::process;

mod opts;

use opts::CaseSerialOpts;

use casebench_cli::{init_logging, run_convert};
use casebench_core::memory::ProcStatusProbe;

const PROGRAM_NAME: &str = "case-serial";

fn main() {
    let opts = match CaseSerialOpts::parse() {
        Ok(opts) => opts,
        Err(err) => {
            eprintln!("{PROGRAM_NAME}: {err}");
            process::exit(1);
        }
    };

    init_logging(opts.verbose);

    let probe = ProcStatusProbe::default();
    if let Err(err) = run_convert(&opts.config(), &probe, io::stdout().lock()) {
        eprintln!("{PROGRAM_NAME}: {err}");
        process::exit(1);
    }
}
