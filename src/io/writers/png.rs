use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{ExtendedColorType, ImageEncoder};

use crate::error::{Error, Result};
use crate::types::SquareImage;

/// Writes `image` as a maximally compressed RGBA PNG, creating parent
/// directories as needed.
pub fn write_png(output: &Path, image: &SquareImage) -> Result<()> {
    if let Some(parent) = output.parent() {
        fs::create_dir_all(parent).map_err(|e| Error::write(output, e))?;
    }
    let file = File::create(output).map_err(|e| Error::write(output, e))?;
    let mut writer = BufWriter::new(file);
    let encoder =
        PngEncoder::new_with_quality(&mut writer, CompressionType::Best, FilterType::Adaptive);
    encoder
        .write_image(
            image.as_raw(),
            image.side(),
            image.side(),
            ExtendedColorType::Rgba8,
        )
        .map_err(|e| Error::write(output, e))?;
    writer.flush().map_err(|e| Error::write(output, e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn written_png_decodes_to_same_pixels() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("icon.png");
        let mut data = Vec::new();
        for i in 0..9u8 {
            data.extend_from_slice(&[i, i * 2, i * 3, 255 - i]);
        }
        let image = SquareImage::from_raw(3, data).unwrap();
        write_png(&path, &image).unwrap();

        let decoded = image::open(&path).unwrap().into_rgba8();
        assert_eq!(decoded.as_raw(), image.as_raw());
    }

    #[test]
    fn unwritable_destination_is_a_write_error() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("file");
        std::fs::write(&blocker, b"x").unwrap();
        let image = SquareImage::from_raw(1, vec![0, 0, 0, 0]).unwrap();
        let err = write_png(&blocker.join("icon.png"), &image).unwrap_err();
        assert!(matches!(err, Error::Write { .. }));
    }
}
