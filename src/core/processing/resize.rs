use fast_image_resize::{FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer, images::Image};
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::types::SquareImage;

/// Filter for a resize from `from` to `to` pixels per side: Lanczos3 when
/// enlarging, box (area average) when shrinking.
pub fn filter_for(from: u32, to: u32) -> FilterType {
    if to > from {
        FilterType::Lanczos3
    } else {
        FilterType::Box
    }
}

/// Resizes interleaved RGBA data. Every channel, transparency included, is
/// filtered on its own; colour is never premultiplied by alpha.
pub fn resize_rgba(
    data: &[u8],
    original_side: u32,
    target_side: u32,
    filter: FilterType,
) -> Result<Vec<u8>> {
    let resize_options = ResizeOptions::new()
        .resize_alg(ResizeAlg::Convolution(filter))
        .use_alpha(false);
    let mut resizer = Resizer::new();

    let src_image = Image::from_vec_u8(original_side, original_side, data.to_vec(), PixelType::U8x4)
        .map_err(Error::processing)?;
    let mut dst_image = Image::new(target_side, target_side, PixelType::U8x4);
    resizer
        .resize(&src_image, &mut dst_image, &resize_options)
        .map_err(Error::processing)?;

    Ok(dst_image.into_vec())
}

/// Enlarges a normalized square to the master side length.
pub fn upscale(image: &SquareImage, target_side: u32) -> Result<SquareImage> {
    if image.side() == target_side {
        return Ok(image.clone());
    }
    debug!("Upscaling {} -> {} with Lanczos3", image.side(), target_side);
    let data = resize_rgba(
        image.as_raw(),
        image.side(),
        target_side,
        FilterType::Lanczos3,
    )?;
    SquareImage::from_raw(target_side, data)
}

/// Derives one output size from a master. Returns the master unchanged when
/// the sizes match.
pub fn resize_from_master(master: &SquareImage, size: u32) -> Result<SquareImage> {
    let side = master.side();
    if side == size {
        return Ok(master.clone());
    }
    if size > side {
        warn!(
            "Requested size {} is larger than the {} master; enlarging",
            size, side
        );
    }
    let data = resize_rgba(master.as_raw(), side, size, filter_for(side, size))?;
    SquareImage::from_raw(size, data)
}
