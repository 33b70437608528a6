use ndarray::Array2;
use tracing::debug;

/// Clip limit relative to a uniform histogram.
pub const CLIP_LIMIT: f32 = 1.7;
/// Tiles per side.
pub const TILE_GRID: usize = 8;

const BINS: usize = 256;

/// Clips `hist` at `limit` and spreads the excess evenly over all bins.
fn clip_histogram(hist: &mut [u32; BINS], limit: u32) {
    let mut excess: u32 = 0;
    for bin in hist.iter_mut() {
        if *bin > limit {
            excess += *bin - limit;
            *bin = limit;
        }
    }

    let batch = excess / BINS as u32;
    let mut residual = excess - batch * BINS as u32;
    for bin in hist.iter_mut() {
        *bin += batch;
    }
    if residual > 0 {
        let step = (BINS / residual as usize).max(1);
        let mut i = 0;
        while i < BINS && residual > 0 {
            hist[i] += 1;
            residual -= 1;
            i += step;
        }
    }
}

/// Equalization lookup table for one tile.
fn tile_lut(plane: &Array2<u8>, rows: (usize, usize), cols: (usize, usize), clip: f32) -> [u8; BINS] {
    let mut hist = [0u32; BINS];
    for r in rows.0..rows.1 {
        for c in cols.0..cols.1 {
            hist[plane[[r, c]] as usize] += 1;
        }
    }

    let area = ((rows.1 - rows.0) * (cols.1 - cols.0)).max(1);
    if clip > 0.0 {
        let limit = ((clip * area as f32 / BINS as f32) as u32).max(1);
        clip_histogram(&mut hist, limit);
    }

    let scale = 255.0 / area as f32;
    let mut lut = [0u8; BINS];
    let mut sum: u32 = 0;
    for (value, &count) in lut.iter_mut().zip(hist.iter()) {
        sum += count;
        *value = (sum as f32 * scale).round().clamp(0.0, 255.0) as u8;
    }
    lut
}

/// Contrast-limited adaptive histogram equalization of one 8-bit plane.
///
/// The plane is split into `grid`x`grid` tiles; each pixel is mapped through
/// the bilinear blend of the four nearest tile lookup tables.
pub fn clahe(plane: &Array2<u8>, clip: f32, grid: usize) -> Array2<u8> {
    let (rows, cols) = plane.dim();
    if rows == 0 || cols == 0 {
        return plane.clone();
    }
    let tile_h = rows.div_ceil(grid.clamp(1, rows));
    let tile_w = cols.div_ceil(grid.clamp(1, cols));
    // Recount so no trailing tile is empty.
    let tiles_y = rows.div_ceil(tile_h);
    let tiles_x = cols.div_ceil(tile_w);
    debug!(
        "CLAHE over {}x{} with {}x{} tiles of {}x{}",
        cols, rows, tiles_x, tiles_y, tile_w, tile_h
    );

    let mut luts = Vec::with_capacity(tiles_y * tiles_x);
    for ty in 0..tiles_y {
        for tx in 0..tiles_x {
            let r0 = (ty * tile_h).min(rows);
            let r1 = ((ty + 1) * tile_h).min(rows);
            let c0 = (tx * tile_w).min(cols);
            let c1 = ((tx + 1) * tile_w).min(cols);
            luts.push(tile_lut(plane, (r0, r1), (c0, c1), clip));
        }
    }
    let lut_at = |ty: usize, tx: usize| &luts[ty * tiles_x + tx];

    // Neighbouring tile indices and blend weight along one axis.
    let neighbours = |pos: usize, tile: usize, count: usize| -> (usize, usize, f32) {
        let f = pos as f32 / tile as f32 - 0.5;
        let lo = f.floor();
        let weight = f - lo;
        let lo = lo as isize;
        let first = lo.max(0) as usize;
        let second = ((lo + 1).max(0) as usize).min(count - 1);
        (first.min(count - 1), second, weight)
    };

    let mut out = Array2::<u8>::zeros((rows, cols));
    for r in 0..rows {
        let (ty1, ty2, ya) = neighbours(r, tile_h, tiles_y);
        for c in 0..cols {
            let (tx1, tx2, xa) = neighbours(c, tile_w, tiles_x);
            let v = plane[[r, c]] as usize;
            let top = lut_at(ty1, tx1)[v] as f32 * (1.0 - xa) + lut_at(ty1, tx2)[v] as f32 * xa;
            let bottom = lut_at(ty2, tx1)[v] as f32 * (1.0 - xa) + lut_at(ty2, tx2)[v] as f32 * xa;
            out[[r, c]] = (top * (1.0 - ya) + bottom * ya).round().clamp(0.0, 255.0) as u8;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clipping_preserves_total_count() {
        let mut hist = [0u32; BINS];
        hist[10] = 1000;
        hist[20] = 5;
        clip_histogram(&mut hist, 50);
        assert_eq!(hist.iter().sum::<u32>(), 1005);
        assert!(hist[10] <= 50 + 1000 / BINS as u32 + 1);
    }

    #[test]
    fn uniform_plane_stays_uniform() {
        let plane = Array2::from_elem((32, 32), 90u8);
        let out = clahe(&plane, CLIP_LIMIT, TILE_GRID);
        let first = out[[0, 0]];
        assert!(out.iter().all(|&v| v == first));
    }

    #[test]
    fn gradient_keeps_ordering() {
        let plane = Array2::from_shape_fn((16, 64), |(_, c)| (c * 2) as u8);
        let out = clahe(&plane, CLIP_LIMIT, 1);
        for c in 1..64 {
            assert!(out[[0, c]] >= out[[0, c - 1]]);
        }
    }

    #[test]
    fn low_contrast_plane_is_stretched() {
        let plane = Array2::from_shape_fn((64, 64), |(r, c)| 100 + ((r + c) % 20) as u8);
        let out = clahe(&plane, 40.0, 2);
        let min = *out.iter().min().unwrap();
        let max = *out.iter().max().unwrap();
        assert!(max - min > 19, "range {}..{}", min, max);
    }

    #[test]
    fn output_shape_matches_input() {
        let plane = Array2::from_shape_fn((13, 29), |(r, c)| (r * c) as u8);
        let out = clahe(&plane, CLIP_LIMIT, TILE_GRID);
        assert_eq!(out.dim(), (13, 29));
    }
}
