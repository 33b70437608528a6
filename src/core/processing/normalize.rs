use image::{DynamicImage, RgbaImage, imageops};
use tracing::debug;

use crate::error::{Error, Result};
use crate::types::SquareImage;

/// Side length and `(left, top)` offsets of the centred square inside a
/// `width`x`height` frame. Offsets round down.
pub fn center_square_region(width: u32, height: u32) -> (u32, u32, u32) {
    let side = width.min(height);
    let left = (width - side) / 2;
    let top = (height - side) / 2;
    (side, left, top)
}

pub fn center_square(image: RgbaImage) -> Result<SquareImage> {
    let (width, height) = image.dimensions();
    let (side, left, top) = center_square_region(width, height);
    let square = if width == height {
        image
    } else {
        debug!(
            "Cropping {}x{} to centred {}x{} at ({}, {})",
            width, height, side, side, left, top
        );
        imageops::crop_imm(&image, left, top, side, side).to_image()
    };
    SquareImage::from_rgba(square)
}

/// Brings a decoded image to square 4-channel form.
///
/// Colour-only images gain a fully opaque alpha channel; anything other than
/// 3 or 4 channels is rejected.
pub fn normalize(image: DynamicImage) -> Result<SquareImage> {
    let channels = image.color().channel_count();
    let rgba = match channels {
        3 | 4 => image.into_rgba8(),
        other => return Err(Error::UnsupportedChannels { channels: other }),
    };
    center_square(rgba)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Rgb, RgbImage, Rgba};

    #[test]
    fn region_is_centred_with_floor_offsets() {
        assert_eq!(center_square_region(10, 10), (10, 0, 0));
        assert_eq!(center_square_region(10, 7), (7, 1, 0));
        assert_eq!(center_square_region(7, 12), (7, 0, 2));
        assert_eq!(center_square_region(5, 2), (2, 1, 0));
    }

    #[test]
    fn rgb_input_gains_opaque_alpha() {
        let rgb = RgbImage::from_pixel(4, 4, Rgb([1, 2, 3]));
        let square = normalize(DynamicImage::ImageRgb8(rgb)).unwrap();
        assert_eq!(square.side(), 4);
        for y in 0..4 {
            for x in 0..4 {
                assert_eq!(square.color(x, y), [1, 2, 3]);
                assert_eq!(square.alpha(x, y), 255);
            }
        }
    }

    #[test]
    fn rgba_input_keeps_transparency() {
        let rgba = RgbaImage::from_pixel(3, 3, Rgba([9, 8, 7, 42]));
        let square = normalize(DynamicImage::ImageRgba8(rgba)).unwrap();
        assert_eq!(square.alpha(1, 1), 42);
        assert_eq!(square.color(1, 1), [9, 8, 7]);
    }

    #[test]
    fn rectangular_input_is_cropped_to_centre() {
        let mut rgba = RgbaImage::new(6, 4);
        for (x, y, p) in rgba.enumerate_pixels_mut() {
            *p = Rgba([x as u8, y as u8, 0, 255]);
        }
        let square = normalize(DynamicImage::ImageRgba8(rgba)).unwrap();
        assert_eq!(square.side(), 4);
        // left offset (6 - 4) / 2 = 1
        assert_eq!(square.color(0, 0), [1, 0, 0]);
        assert_eq!(square.color(3, 3), [4, 3, 0]);
    }

    #[test]
    fn tall_input_is_cropped_vertically() {
        let mut rgba = RgbaImage::new(3, 8);
        for (x, y, p) in rgba.enumerate_pixels_mut() {
            *p = Rgba([x as u8, y as u8, 0, 255]);
        }
        let square = normalize(DynamicImage::ImageRgba8(rgba)).unwrap();
        assert_eq!(square.side(), 3);
        // top offset (8 - 3) / 2 = 2
        assert_eq!(square.color(0, 0), [0, 2, 0]);
    }

    #[test]
    fn grayscale_input_is_rejected() {
        let gray = GrayImage::new(4, 4);
        let err = normalize(DynamicImage::ImageLuma8(gray)).unwrap_err();
        assert!(matches!(err, Error::UnsupportedChannels { channels: 1 }));
        assert!(err.is_input_error());
    }
}
