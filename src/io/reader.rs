use std::path::Path;

use image::{DynamicImage, ImageReader};
use tracing::debug;

use crate::core::processing::normalize::normalize;
use crate::error::{Error, Result};
use crate::types::SquareImage;

/// Decodes `path` at full fidelity, transparency included.
pub fn load_source(path: &Path) -> Result<DynamicImage> {
    if !path.exists() {
        return Err(Error::InputMissing {
            path: path.to_path_buf(),
        });
    }
    let input_error = |reason: String| Error::Input {
        path: path.to_path_buf(),
        reason,
    };

    let reader = ImageReader::open(path)
        .map_err(|e| input_error(e.to_string()))?
        .with_guessed_format()
        .map_err(|e| input_error(e.to_string()))?;
    let image = reader.decode().map_err(|e| input_error(e.to_string()))?;
    debug!(
        "Decoded {:?}: {}x{} {:?}",
        path,
        image.width(),
        image.height(),
        image.color()
    );
    Ok(image)
}

/// Decodes `path` and brings it to square RGBA form.
pub fn load_normalized(path: &Path) -> Result<SquareImage> {
    normalize(load_source(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    #[test]
    fn missing_file_is_an_input_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_source(&dir.path().join("nope.png")).unwrap_err();
        assert!(matches!(err, Error::InputMissing { .. }));
        assert!(err.is_input_error());
    }

    #[test]
    fn undecodable_file_is_an_input_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("garbage.png");
        std::fs::write(&path, b"definitely not an image").unwrap();
        let err = load_source(&path).unwrap_err();
        assert!(matches!(err, Error::Input { .. }));
    }

    #[test]
    fn rgb_png_loads_as_square_rgba() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wide.png");
        RgbImage::from_pixel(30, 20, Rgb([10, 20, 30]))
            .save(&path)
            .unwrap();
        let square = load_normalized(&path).unwrap();
        assert_eq!(square.side(), 20);
        assert_eq!(square.alpha(5, 5), 255);
        assert_eq!(square.color(5, 5), [10, 20, 30]);
    }
}
