use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::types::{CONTAINER_SIZES, DEFAULT_SIZES, DEFAULT_TARGET, IconSizes, MIN_TARGET};

/// Parameters for one icon-set run
#[derive(Debug, Clone)]
pub struct IconSetParams {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    /// Side length of the square master in pixels
    pub target: u32,
    /// Sizes produced on every run; `target` is merged in
    pub default_sizes: Vec<u32>,
    /// Sizes bundled into the `.ico` containers when present in the output set
    pub container_sizes: Vec<u32>,
    /// Multiplexer used to build the containers
    pub packager: String,
}

impl Default for IconSetParams {
    fn default() -> Self {
        Self {
            input: PathBuf::from("icons/underpar-512.png"),
            output_dir: PathBuf::from("icons"),
            target: DEFAULT_TARGET,
            default_sizes: DEFAULT_SIZES.to_vec(),
            container_sizes: CONTAINER_SIZES.to_vec(),
            packager: "ffmpeg".to_string(),
        }
    }
}

impl IconSetParams {
    pub fn validate(&self) -> Result<()> {
        if self.target < MIN_TARGET {
            return Err(Error::Config {
                target: self.target,
                minimum: MIN_TARGET,
            });
        }
        Ok(())
    }

    pub fn output_sizes(&self) -> IconSizes {
        IconSizes::with_target(&self.default_sizes, self.target)
    }
}
