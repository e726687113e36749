//! Synthetic ASCII text generator
//!
//! Produces the input corpus for the case-conversion benchmarks.

use std::process;

mod opts;

use opts::GenTextOpts;

use casebench_cli::{generate_file, init_logging};

const PROGRAM_NAME: &str = "gen-text";

fn main() {
    let opts = match GenTextOpts::parse() {
        Ok(opts) => opts,
        Err(err) => {
            eprintln!("{PROGRAM_NAME}: {err}");
            process::exit(1);
        }
    };

    init_logging(opts.verbose);

    if let Err(err) = generate_file(&opts.config()) {
        eprintln!("{PROGRAM_NAME}: {err}");
        process::exit(1);
    }
}
