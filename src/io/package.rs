use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::{debug, info};

use crate::error::{Error, Result};

/// Packs PNG files into one multi-resolution container through an external
/// multiplexer (`ffmpeg` by default).
#[derive(Debug, Clone)]
pub struct Packager {
    program: String,
}

impl Default for Packager {
    fn default() -> Self {
        Self::new("ffmpeg")
    }
}

impl Packager {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// One `-i` per input, one `-map` per input index, then the output path.
    pub fn command(&self, output: &Path, inputs: &[PathBuf]) -> Command {
        let mut args: Vec<OsString> = vec!["-y".into()];
        for input in inputs {
            args.push("-i".into());
            args.push(input.into());
        }
        for index in 0..inputs.len() {
            args.push("-map".into());
            args.push(index.to_string().into());
        }
        args.push(output.into());

        let mut cmd = Command::new(&self.program);
        cmd.args(args);
        cmd
    }

    /// Builds `output` from `inputs`. Returns `Ok(false)` without running
    /// anything when `inputs` is empty.
    pub fn package(&self, output: &Path, inputs: &[PathBuf]) -> Result<bool> {
        if inputs.is_empty() {
            debug!("No inputs for {:?}; skipping", output);
            return Ok(false);
        }

        info!("Packaging {} images into {:?}", inputs.len(), output);
        let result = self.command(output, inputs).output();
        let out = match result {
            Ok(out) => out,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(Error::ToolMissing {
                    program: self.program.clone(),
                });
            }
            Err(e) => {
                return Err(Error::Packaging {
                    output: output.to_path_buf(),
                    message: e.to_string(),
                });
            }
        };

        if !out.status.success() {
            let message = String::from_utf8_lossy(&out.stderr).trim().to_string();
            return Err(Error::Packaging {
                output: output.to_path_buf(),
                message,
            });
        }
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_maps_every_input() {
        let packager = Packager::default();
        let inputs = vec![PathBuf::from("a.png"), PathBuf::from("b.png")];
        let cmd = packager.command(Path::new("out.ico"), &inputs);
        assert_eq!(cmd.get_program(), "ffmpeg");
        let args: Vec<_> = cmd.get_args().map(|a| a.to_string_lossy().into_owned()).collect();
        assert_eq!(
            args,
            ["-y", "-i", "a.png", "-i", "b.png", "-map", "0", "-map", "1", "out.ico"]
        );
    }

    #[test]
    fn empty_input_list_is_skipped() {
        let packager = Packager::new("iconset-no-such-tool-for-tests");
        let built = packager.package(Path::new("out.ico"), &[]).unwrap();
        assert!(!built);
    }

    #[test]
    fn absent_tool_is_reported() {
        let packager = Packager::new("iconset-no-such-tool-for-tests");
        let err = packager
            .package(Path::new("out.ico"), &[PathBuf::from("a.png")])
            .unwrap_err();
        assert!(matches!(err, Error::ToolMissing { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn failing_tool_is_a_packaging_error() {
        let packager = Packager::new("false");
        let err = packager
            .package(Path::new("out.ico"), &[PathBuf::from("a.png")])
            .unwrap_err();
        assert!(matches!(err, Error::Packaging { .. }));
    }
}
