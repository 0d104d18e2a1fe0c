//! imgproc is a small, non-destructive RGB image workspace.
//!
//! Images live in an [`ImageStore`] under string names. Every operation reads
//! a stored [`PixelGrid`], builds a new grid and stores it under a destination
//! name: brightening, flips, greyscale by component, sepia, blur/sharpen
//! convolution and per-channel histograms. Plain-text PPM is supported
//! natively; other raster formats are available through the `image-io`
//! feature, and convolution can run row-parallel with the `rayon` feature.

pub mod codec;
pub mod color;
pub mod geometry;
pub mod histogram;
pub mod image;
pub mod kernel;
pub mod lowlevel;
pub mod store;
mod trace;
pub mod util;

pub use crate::color::{ColorMatrix, Component};
pub use crate::geometry::FlipAxis;
pub use crate::histogram::{Histogram, HistogramChannel};
pub use crate::image::{Channel, PixelGrid, Sample};
pub use crate::kernel::Kernel;
pub use crate::store::{ImageStore, StoreConfig};
pub use crate::util::{ImgProcError, ImgProcResult};

#[cfg(feature = "image-io")]
pub use crate::image::io;
