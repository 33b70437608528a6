//! sRGB <-> CIE L*a*b* (D65) on 8-bit planes.
//!
//! Planes use the common 8-bit encoding: `L * 255 / 100`, `a + 128`, `b + 128`.
use ndarray::Array2;

use crate::types::SquareImage;

const XN: f32 = 0.950456;
const ZN: f32 = 1.088754;
const EPSILON: f32 = 0.008856;
const KAPPA: f32 = 903.3;

/// Lightness and opponent-colour planes of an image, indexed `[row, col]`.
pub struct LabPlanes {
    pub l: Array2<u8>,
    pub a: Array2<u8>,
    pub b: Array2<u8>,
}

fn srgb_to_linear(v: f32) -> f32 {
    if v <= 0.04045 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

fn linear_to_srgb(v: f32) -> f32 {
    if v <= 0.003_130_8 {
        v * 12.92
    } else {
        1.055 * v.powf(1.0 / 2.4) - 0.055
    }
}

fn lab_f(t: f32) -> f32 {
    if t > EPSILON {
        t.cbrt()
    } else {
        7.787 * t + 16.0 / 116.0
    }
}

fn lab_f_inv(f: f32) -> f32 {
    let cube = f * f * f;
    if cube > EPSILON {
        cube
    } else {
        (f - 16.0 / 116.0) / 7.787
    }
}

#[inline]
fn saturate(v: f32) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}

fn linear_table() -> [f32; 256] {
    let mut table = [0.0f32; 256];
    for (i, slot) in table.iter_mut().enumerate() {
        *slot = srgb_to_linear(i as f32 / 255.0);
    }
    table
}

pub fn rgb_to_lab(rgb: [u8; 3], table: &[f32; 256]) -> [u8; 3] {
    let r = table[rgb[0] as usize];
    let g = table[rgb[1] as usize];
    let b = table[rgb[2] as usize];

    let x = (0.412_453 * r + 0.357_580 * g + 0.180_423 * b) / XN;
    let y = 0.212_671 * r + 0.715_160 * g + 0.072_169 * b;
    let z = (0.019_334 * r + 0.119_193 * g + 0.950_227 * b) / ZN;

    let fx = lab_f(x);
    let fy = lab_f(y);
    let fz = lab_f(z);

    let l = if y > EPSILON {
        116.0 * fy - 16.0
    } else {
        KAPPA * y
    };
    let a = 500.0 * (fx - fy);
    let bb = 200.0 * (fy - fz);

    [saturate(l * 255.0 / 100.0), saturate(a + 128.0), saturate(bb + 128.0)]
}

pub fn lab_to_rgb(lab: [u8; 3]) -> [u8; 3] {
    let l = lab[0] as f32 * 100.0 / 255.0;
    let a = lab[1] as f32 - 128.0;
    let bb = lab[2] as f32 - 128.0;

    let (y, fy) = if l <= KAPPA * EPSILON {
        let y = l / KAPPA;
        (y, 7.787 * y + 16.0 / 116.0)
    } else {
        let fy = (l + 16.0) / 116.0;
        (fy * fy * fy, fy)
    };
    let x = lab_f_inv(fy + a / 500.0) * XN;
    let z = lab_f_inv(fy - bb / 200.0) * ZN;

    let r = 3.240_479 * x - 1.537_150 * y - 0.498_535 * z;
    let g = -0.969_256 * x + 1.875_991 * y + 0.041_556 * z;
    let b = 0.055_648 * x - 0.204_043 * y + 1.057_311 * z;

    [r, g, b].map(|c| saturate(linear_to_srgb(c.clamp(0.0, 1.0)) * 255.0))
}

/// Splits the colour of `image` into Lab planes. Transparency is ignored.
pub fn to_lab_planes(image: &SquareImage) -> LabPlanes {
    let side = image.side() as usize;
    let table = linear_table();
    let mut planes = LabPlanes {
        l: Array2::zeros((side, side)),
        a: Array2::zeros((side, side)),
        b: Array2::zeros((side, side)),
    };
    for row in 0..side {
        for col in 0..side {
            let [l, a, b] = rgb_to_lab(image.color(col as u32, row as u32), &table);
            planes.l[[row, col]] = l;
            planes.a[[row, col]] = a;
            planes.b[[row, col]] = b;
        }
    }
    planes
}

/// Writes the colour held in `planes` back into `image`, leaving alpha as is.
pub fn apply_lab_planes(planes: &LabPlanes, image: &mut SquareImage) {
    let (rows, cols) = planes.l.dim();
    for row in 0..rows {
        for col in 0..cols {
            let lab = [
                planes.l[[row, col]],
                planes.a[[row, col]],
                planes.b[[row, col]],
            ];
            image.set_color(col as u32, row as u32, lab_to_rgb(lab));
        }
    }
}
