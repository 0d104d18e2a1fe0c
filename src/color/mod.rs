//! Per-pixel color transforms: brighten, greyscale by component and sepia.
//!
//! The transform for a call is resolved once (a delta or a [`ColorMatrix`])
//! and then mapped over every sample of the source grid into a new grid.

use std::fmt;
use std::str::FromStr;

use crate::image::{Channel, PixelGrid};
use crate::util::ImgProcError;

mod matrix;

pub use matrix::ColorMatrix;

/// Scalar used to greyscale an image.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Component {
    Red,
    Green,
    Blue,
    /// Largest of the three channels.
    Value,
    /// Rec. 709 weighted sum.
    Luma,
    /// Rounded mean of the three channels.
    Intensity,
}

impl Component {
    pub const ALL: [Component; 6] = [
        Component::Red,
        Component::Green,
        Component::Blue,
        Component::Value,
        Component::Luma,
        Component::Intensity,
    ];

    /// Token used in command scripts.
    pub fn as_str(&self) -> &'static str {
        match self {
            Component::Red => "red",
            Component::Green => "green",
            Component::Blue => "blue",
            Component::Value => "value",
            Component::Luma => "luma",
            Component::Intensity => "intensity",
        }
    }

    /// The fixed matrix for this component, or `None` for [`Component::Value`]
    /// whose selector depends on each pixel.
    pub fn matrix(&self) -> Option<ColorMatrix> {
        match self {
            Component::Red => Some(ColorMatrix::RED),
            Component::Green => Some(ColorMatrix::GREEN),
            Component::Blue => Some(ColorMatrix::BLUE),
            Component::Luma => Some(ColorMatrix::LUMA),
            Component::Intensity => Some(ColorMatrix::INTENSITY),
            Component::Value => None,
        }
    }
}

impl FromStr for Component {
    type Err = ImgProcError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        Component::ALL
            .into_iter()
            .find(|component| component.as_str().eq_ignore_ascii_case(token))
            .ok_or_else(|| ImgProcError::InvalidComponentSelector {
                token: token.to_owned(),
            })
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn selector(channel: Channel) -> ColorMatrix {
    match channel {
        Channel::Red => ColorMatrix::RED,
        Channel::Green => ColorMatrix::GREEN,
        Channel::Blue => ColorMatrix::BLUE,
    }
}

/// Adds `delta` to every channel of every pixel, saturating at 0 and 255.
pub fn brighten_grid(grid: &PixelGrid, delta: i32) -> PixelGrid {
    grid.map_samples(|px| px.offset(delta))
}

/// Replaces each pixel with the chosen component replicated to all channels.
pub fn greyscale_grid(grid: &PixelGrid, component: Component) -> PixelGrid {
    match component.matrix() {
        Some(matrix) => apply_matrix_grid(grid, &matrix),
        None => grid.map_samples(|px| selector(px.dominant_channel()).apply(*px)),
    }
}

/// Applies the sepia tone matrix to every pixel.
pub fn sepia_grid(grid: &PixelGrid) -> PixelGrid {
    apply_matrix_grid(grid, &ColorMatrix::SEPIA)
}

/// Applies an arbitrary color matrix to every pixel.
pub fn apply_matrix_grid(grid: &PixelGrid, matrix: &ColorMatrix) -> PixelGrid {
    grid.map_samples(|px| matrix.apply(*px))
}
