//! 3x3 linear recolor matrices.

use crate::image::Sample;
use crate::util::math::round_clamp_u8;

/// Immutable 3x3 matrix mapping `[r, g, b]` to `[r', g', b']`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ColorMatrix {
    rows: [[f64; 3]; 3],
}

impl ColorMatrix {
    /// Copies the red channel into every output channel.
    pub const RED: Self = Self::uniform([1.0, 0.0, 0.0]);
    /// Copies the green channel into every output channel.
    pub const GREEN: Self = Self::uniform([0.0, 1.0, 0.0]);
    /// Copies the blue channel into every output channel.
    pub const BLUE: Self = Self::uniform([0.0, 0.0, 1.0]);
    /// Rec. 709 luma weights.
    pub const LUMA: Self = Self::uniform([0.2126, 0.7152, 0.0722]);
    /// Plain average of the three channels.
    pub const INTENSITY: Self = Self::uniform([1.0 / 3.0, 1.0 / 3.0, 1.0 / 3.0]);
    /// Classic sepia tone.
    pub const SEPIA: Self = Self::new([
        [0.393, 0.769, 0.189],
        [0.349, 0.686, 0.168],
        [0.272, 0.534, 0.131],
    ]);

    pub const fn new(rows: [[f64; 3]; 3]) -> Self {
        Self { rows }
    }

    /// Matrix whose three rows are all `row`, so every output channel is equal.
    pub const fn uniform(row: [f64; 3]) -> Self {
        Self::new([row, row, row])
    }

    pub fn rows(&self) -> &[[f64; 3]; 3] {
        &self.rows
    }

    /// Multiplies the sample by this matrix.
    ///
    /// Each output channel is rounded to the nearest integer and clamped to
    /// [0, 255]. The preset matrices have non-negative coefficients, so only
    /// the upper clamp can trigger for them.
    pub fn apply(&self, sample: Sample) -> Sample {
        let [r, g, b] = sample.channels().map(f64::from);
        let out = self
            .rows
            .map(|[wr, wg, wb]| round_clamp_u8(wr * r + wg * g + wb * b));
        Sample::from(out)
    }
}
