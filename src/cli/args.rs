use clap::Parser;
use std::path::PathBuf;

use iconset::DEFAULT_TARGET;

#[derive(Parser)]
#[command(
    name = "iconset",
    version,
    about = "Generate the square and round icon set from a single source image"
)]
pub struct CliArgs {
    /// Path to source image
    #[arg(long, default_value = "icons/underpar-512.png")]
    pub input: PathBuf,

    /// Output directory
    #[arg(long, default_value = "icons")]
    pub output_dir: PathBuf,

    /// Master target size in px (at least 512)
    #[arg(long, default_value_t = DEFAULT_TARGET)]
    pub target: u32,
}
