//! Baseline single-threaded convolution.

use crate::image::{PixelGrid, Sample};
use crate::kernel::Kernel;
use crate::util::math::round_clamp_u8;

/// Convolves every channel of `grid` with `kernel` using zero padding.
///
/// The output has the same dimensions as the input.
pub fn convolve(grid: &PixelGrid, kernel: &Kernel) -> PixelGrid {
    let width = grid.width();
    let mut data = vec![Sample::default(); grid.pixel_count()];
    for (row, out) in data.chunks_exact_mut(width.max(1)).enumerate() {
        convolve_row(grid, kernel, row, out);
    }
    PixelGrid::from_raw(data, width, grid.height())
}

/// Computes output row `row` into `out` (length `width`).
///
/// Shared by the scalar and parallel paths so both accumulate in the same
/// order and produce identical results.
pub(crate) fn convolve_row(grid: &PixelGrid, kernel: &Kernel, row: usize, out: &mut [Sample]) {
    let radius = kernel.radius();
    let width = grid.width();
    for (col, dst) in out.iter_mut().enumerate() {
        let mut acc = [0.0f64; 3];
        for ki in 0..kernel.size() {
            let Some(src_row) = (row + ki).checked_sub(radius).and_then(|y| grid.row(y)) else {
                continue;
            };
            for (kj, &weight) in kernel.row(ki).iter().enumerate() {
                let Some(x) = (col + kj).checked_sub(radius).filter(|&x| x < width) else {
                    continue;
                };
                let [r, g, b] = src_row[x].channels();
                acc[0] += weight * f64::from(r);
                acc[1] += weight * f64::from(g);
                acc[2] += weight * f64::from(b);
            }
        }
        *dst = Sample::from(acc.map(round_clamp_u8));
    }
}

#[cfg(test)]
mod tests {
    use super::convolve;
    use crate::image::{PixelGrid, Sample};
    use crate::kernel::Kernel;

    #[test]
    fn identity_kernel_returns_copy() {
        let grid = PixelGrid::from_rows(vec![
            vec![Sample::from_rgb(1, 2, 3), Sample::from_rgb(4, 5, 6)],
            vec![Sample::from_rgb(7, 8, 9), Sample::from_rgb(10, 11, 12)],
        ])
        .unwrap();
        let identity = Kernel::new(vec![
            vec![0.0, 0.0, 0.0],
            vec![0.0, 1.0, 0.0],
            vec![0.0, 0.0, 0.0],
        ])
        .unwrap();
        assert_eq!(convolve(&grid, &identity), grid);
    }

    #[test]
    fn blur_zero_pads_at_corners() {
        let grid = PixelGrid::filled(3, 3, Sample::grey(160)).unwrap();
        let out = convolve(&grid, &Kernel::blur());
        // Corner sees 4 of 9 taps: 160 * (0.25 + 0.125 + 0.125 + 0.0625) = 90.
        assert_eq!(out.get(0, 0), Some(Sample::grey(90)));
        // Edge sees 6 taps: 160 * 0.75 = 120.
        assert_eq!(out.get(0, 1), Some(Sample::grey(120)));
        assert_eq!(out.get(1, 1), Some(Sample::grey(160)));
    }

    #[test]
    fn shifted_kernel_reads_neighbor() {
        // Weight in the top-left reads the pixel up and to the left.
        let grid = PixelGrid::from_rows(vec![
            vec![Sample::grey(10), Sample::grey(20)],
            vec![Sample::grey(30), Sample::grey(40)],
        ])
        .unwrap();
        let kernel = Kernel::new(vec![
            vec![1.0, 0.0, 0.0],
            vec![0.0, 0.0, 0.0],
            vec![0.0, 0.0, 0.0],
        ])
        .unwrap();
        let out = convolve(&grid, &kernel);
        assert_eq!(out.get(1, 1), Some(Sample::grey(10)));
        assert_eq!(out.get(0, 1), Some(Sample::grey(0)));
    }

    #[test]
    fn empty_grid_stays_empty() {
        let out = convolve(&PixelGrid::empty(), &Kernel::sharpen());
        assert!(out.is_empty());
    }
}
