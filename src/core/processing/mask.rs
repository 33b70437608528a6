use ndarray::Array2;

use crate::types::SquareImage;

/// Filled, anti-aliased disc inscribed in a `side`x`side` frame.
///
/// Centre is `(side / 2, side / 2)` and radius `side / 2`, both in whole
/// pixels. Coverage falls off linearly across the one-pixel band around the
/// circle edge.
pub fn circle_mask(side: u32) -> Array2<u8> {
    let n = side as usize;
    let center = (side / 2) as f32;
    let radius = (side / 2) as f32;
    Array2::from_shape_fn((n, n), |(row, col)| {
        let dx = col as f32 - center;
        let dy = row as f32 - center;
        let distance = (dx * dx + dy * dy).sqrt();
        let coverage = (radius + 0.5 - distance).clamp(0.0, 1.0);
        (coverage * 255.0).round() as u8
    })
}

/// Round variant of a master: transparency is multiplied by the disc mask,
/// colour is left untouched.
pub fn round_variant(master: &SquareImage) -> SquareImage {
    let mask = circle_mask(master.side());
    let mut output = master.clone();
    for ((row, col), &m) in mask.indexed_iter() {
        let (x, y) = (col as u32, row as u32);
        let alpha = (output.alpha(x, y) as u16 * m as u16 / 255) as u8;
        output.set_alpha(x, y, alpha);
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn master(side: u32, alpha: u8) -> SquareImage {
        let mut data = Vec::new();
        for i in 0..side * side {
            data.extend_from_slice(&[(i % 251) as u8, 7, 200, alpha]);
        }
        SquareImage::from_raw(side, data).unwrap()
    }

    fn distance(side: u32, x: u32, y: u32) -> f32 {
        let c = (side / 2) as f32;
        ((x as f32 - c).powi(2) + (y as f32 - c).powi(2)).sqrt()
    }

    #[test]
    fn corners_become_transparent_and_centre_keeps_alpha() {
        let side = 64;
        let source = master(side, 180);
        let round = round_variant(&source);
        let radius = (side / 2) as f32;
        for y in 0..side {
            for x in 0..side {
                let d = distance(side, x, y);
                if d >= radius + 0.5 {
                    assert_eq!(round.alpha(x, y), 0, "({x}, {y})");
                } else if d <= radius - 0.5 {
                    assert_eq!(round.alpha(x, y), 180, "({x}, {y})");
                } else {
                    assert!(round.alpha(x, y) <= 180);
                }
            }
        }
    }

    #[test]
    fn colour_is_never_modified() {
        let source = master(32, 255);
        let round = round_variant(&source);
        for y in 0..32 {
            for x in 0..32 {
                assert_eq!(round.color(x, y), source.color(x, y));
            }
        }
    }

    #[test]
    fn edge_band_is_smooth() {
        let mask = circle_mask(128);
        let partial = mask.iter().filter(|&&v| v > 0 && v < 255).count();
        assert!(partial > 0);
        assert_eq!(mask[[64, 64]], 255);
        assert_eq!(mask[[0, 0]], 0);
    }

    #[test]
    fn transparent_pixels_stay_transparent() {
        let source = master(16, 0);
        let round = round_variant(&source);
        assert!((0..16).all(|i| round.alpha(i, i) == 0));
    }
}
