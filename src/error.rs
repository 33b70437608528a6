//! Crate-level error type and `Result` alias.
//! Every failure in the icon pipeline is fatal: the variants name the stage that
//! stopped the run so the CLI can report a single diagnostic line.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

type BoxedSource = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Input image not found: {}", path.display())]
    InputMissing { path: PathBuf },

    #[error("Unable to read image: {}: {reason}", path.display())]
    Input { path: PathBuf, reason: String },

    #[error("Unsupported channel count: {channels}")]
    UnsupportedChannels { channels: u8 },

    #[error("Target size must be at least {minimum}, got: {target}")]
    Config { target: u32, minimum: u32 },

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: BoxedSource,
    },

    #[error("{program} is required to generate .ico files.")]
    ToolMissing { program: String },

    #[error("Failed to generate ICO file ({}): {message}", output.display())]
    Packaging { output: PathBuf, message: String },

    #[error("Processing error: {0}")]
    Processing(String),
}

impl Error {
    pub fn write<E>(path: impl Into<PathBuf>, source: E) -> Self
    where
        E: Into<BoxedSource>,
    {
        Error::Write {
            path: path.into(),
            source: source.into(),
        }
    }

    pub fn processing<E: std::fmt::Display>(e: E) -> Self {
        Error::Processing(e.to_string())
    }

    /// True for the three ways a source image can be rejected.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Error::InputMissing { .. } | Error::Input { .. } | Error::UnsupportedChannels { .. }
        )
    }
}
