use ndarray::Array2;

use crate::types::SquareImage;

pub const BLUR_SIGMA: f32 = 1.1;
pub const IMAGE_WEIGHT: f32 = 1.14;
pub const BLUR_WEIGHT: f32 = -0.14;

/// Normalized 1-D Gaussian kernel; length is `round(6 * sigma + 1)` forced odd.
pub fn gaussian_kernel(sigma: f32) -> Vec<f32> {
    let size = ((sigma * 6.0 + 1.0).round() as usize) | 1;
    let half = (size / 2) as f32;
    let denom = 2.0 * sigma * sigma;
    let mut kernel: Vec<f32> = (0..size)
        .map(|i| {
            let d = i as f32 - half;
            (-(d * d) / denom).exp()
        })
        .collect();
    let sum: f32 = kernel.iter().sum();
    kernel.iter_mut().for_each(|k| *k /= sum);
    kernel
}

/// Mirror index into `0..len` without repeating the edge sample.
#[inline]
fn reflect101(mut i: isize, len: usize) -> usize {
    if len == 1 {
        return 0;
    }
    let last = len as isize - 1;
    loop {
        if i < 0 {
            i = -i;
        } else if i > last {
            i = 2 * last - i;
        } else {
            return i as usize;
        }
    }
}

/// Separable Gaussian blur of one 8-bit plane.
pub fn gaussian_blur(plane: &Array2<u8>, sigma: f32) -> Array2<u8> {
    let (rows, cols) = plane.dim();
    let kernel = gaussian_kernel(sigma);
    let half = (kernel.len() / 2) as isize;

    let mut horizontal = Array2::<f32>::zeros((rows, cols));
    for r in 0..rows {
        for c in 0..cols {
            let mut acc = 0.0;
            for (k, w) in kernel.iter().enumerate() {
                let src = reflect101(c as isize + k as isize - half, cols);
                acc += plane[[r, src]] as f32 * w;
            }
            horizontal[[r, c]] = acc;
        }
    }

    let mut out = Array2::<u8>::zeros((rows, cols));
    for r in 0..rows {
        for c in 0..cols {
            let mut acc = 0.0;
            for (k, w) in kernel.iter().enumerate() {
                let src = reflect101(r as isize + k as isize - half, rows);
                acc += horizontal[[src, c]] * w;
            }
            out[[r, c]] = acc.round().clamp(0.0, 255.0) as u8;
        }
    }
    out
}

/// Unsharp mask on the colour channels: `1.14 * image - 0.14 * blur(image)`.
pub fn sharpen(image: &mut SquareImage) {
    let side = image.side() as usize;
    for channel in 0..3 {
        let plane = Array2::from_shape_fn((side, side), |(r, c)| {
            image.color(c as u32, r as u32)[channel]
        });
        let blurred = gaussian_blur(&plane, BLUR_SIGMA);
        for r in 0..side {
            for c in 0..side {
                let v = IMAGE_WEIGHT * plane[[r, c]] as f32 + BLUR_WEIGHT * blurred[[r, c]] as f32;
                let mut color = image.color(c as u32, r as u32);
                color[channel] = v.round().clamp(0.0, 255.0) as u8;
                image.set_color(c as u32, r as u32, color);
            }
        }
    }
}
