//! Command Line Interface (CLI) layer for ICONSET.
//!
//! `args` defines the three flags; `runner` sets up logging, runs the
//! pipeline through `iconset::api`, and prints the summary.
pub mod args;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;

/// Prefix of every line the binary prints.
pub const TAG: &str = "[generate_icon_set]";
