//! Rayon-parallel convolution (feature-gated).
//!
//! Output rows are independent, so they are computed in parallel with the
//! same per-row routine as the scalar path.

use rayon::prelude::*;

use crate::image::{PixelGrid, Sample};
use crate::kernel::scalar::convolve_row;
use crate::kernel::Kernel;

/// Row-parallel convolution; bit-identical to [`super::scalar::convolve`].
pub fn convolve_par(grid: &PixelGrid, kernel: &Kernel) -> PixelGrid {
    let width = grid.width();
    let mut data = vec![Sample::default(); grid.pixel_count()];
    data.par_chunks_mut(width.max(1))
        .enumerate()
        .for_each(|(row, out)| convolve_row(grid, kernel, row, out));
    PixelGrid::from_raw(data, width, grid.height())
}
