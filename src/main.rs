//! ICONSET CLI entrypoint.
//!
//! Parses args, runs the pipeline, and exits 0 on success or 1 with a single
//! tagged diagnostic line on stderr. For programmatic use, prefer the library
//! API (`iconset::api`).

use std::process::ExitCode;

use clap::Parser;

mod cli;

fn main() -> ExitCode {
    let args = cli::CliArgs::parse();
    match cli::run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", cli::TAG, e);
            ExitCode::FAILURE
        }
    }
}
