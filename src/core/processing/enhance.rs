use tracing::info;

use crate::core::processing::clahe::{CLIP_LIMIT, TILE_GRID, clahe};
use crate::core::processing::lab::{apply_lab_planes, to_lab_planes};
use crate::core::processing::resize::upscale;
use crate::core::processing::sharpen::sharpen;
use crate::error::Result;
use crate::types::SquareImage;

/// Local contrast enhancement restricted to Lab lightness.
pub fn enhance_contrast(image: &mut SquareImage) {
    let mut planes = to_lab_planes(image);
    planes.l = clahe(&planes.l, CLIP_LIMIT, TILE_GRID);
    apply_lab_planes(&planes, image);
}

/// Builds the square master: Lanczos upscale, lightness CLAHE, then a mild
/// unsharp mask. Transparency only goes through the resampler.
pub fn build_master(source: &SquareImage, target: u32) -> Result<SquareImage> {
    info!("Building {}x{} master from {}x{}", target, target, source.side(), source.side());
    let mut master = upscale(source, target)?;
    enhance_contrast(&mut master);
    sharpen(&mut master);
    Ok(master)
}
