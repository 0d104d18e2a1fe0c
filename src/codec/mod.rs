//! Text interchange formats.
//!
//! Only the plain-text `P3` variant of PPM is handled here; compressed raster
//! formats go through the `image-io` bridge.

pub mod ppm;

pub use ppm::{decode, encode, PpmText};
