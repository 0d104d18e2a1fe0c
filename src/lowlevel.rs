//! Grid-level building blocks for callers that manage their own images.
//!
//! These functions operate directly on [`PixelGrid`](crate::PixelGrid) values
//! without an [`ImageStore`](crate::ImageStore). Most users should prefer the
//! store methods.

pub use crate::codec::ppm::{decode, encode};
pub use crate::color::{apply_matrix_grid, brighten_grid, greyscale_grid, sepia_grid};
pub use crate::geometry::flip_grid;
pub use crate::histogram::build_histograms;
pub use crate::kernel::scalar::convolve;

#[cfg(feature = "rayon")]
pub use crate::kernel::rayon::convolve_par;
