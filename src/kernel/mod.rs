//! Convolution kernels and the engines that apply them.
//!
//! A [`Kernel`] is an odd-sized square weight matrix. Convolution visits every
//! output pixel, weights the neighborhood centred on it and treats positions
//! outside the source as zero. The weighted sum for each channel is rounded
//! to the nearest integer and clamped to [0, 255].

use crate::util::{ImgProcError, ImgProcResult};

pub mod scalar;

#[cfg(feature = "rayon")]
pub mod rayon;

const BLUR_3X3: [f64; 9] = [
    0.0625, 0.125, 0.0625, //
    0.125, 0.25, 0.125, //
    0.0625, 0.125, 0.0625,
];

const SHARPEN_5X5: [f64; 25] = [
    -0.125, -0.125, -0.125, -0.125, -0.125, //
    -0.125, 0.25, 0.25, 0.25, -0.125, //
    -0.125, 0.25, 1.0, 0.25, -0.125, //
    -0.125, 0.25, 0.25, 0.25, -0.125, //
    -0.125, -0.125, -0.125, -0.125, -0.125,
];

/// Immutable odd-sized square weight matrix stored row-major.
#[derive(Clone, Debug, PartialEq)]
pub struct Kernel {
    weights: Vec<f64>,
    size: usize,
}

impl Kernel {
    /// Creates a kernel from nested rows.
    ///
    /// Fails unless the rows form a non-empty square with an odd side.
    pub fn new(rows: Vec<Vec<f64>>) -> ImgProcResult<Self> {
        let size = rows.len();
        let shape_err = |cols: usize| ImgProcError::InvalidKernel { rows: size, cols };
        if size == 0 || size % 2 == 0 {
            return Err(shape_err(rows.first().map_or(0, Vec::len)));
        }
        let mut weights = Vec::with_capacity(size * size);
        for row in rows {
            if row.len() != size {
                return Err(shape_err(row.len()));
            }
            weights.extend(row);
        }
        Ok(Self { weights, size })
    }

    /// Creates a `size x size` kernel from a row-major slice.
    pub fn from_slice(weights: &[f64], size: usize) -> ImgProcResult<Self> {
        if size == 0 || size % 2 == 0 || size.checked_mul(size) != Some(weights.len()) {
            return Err(ImgProcError::InvalidKernel {
                rows: size,
                cols: weights.len().checked_div(size).unwrap_or(0),
            });
        }
        Ok(Self {
            weights: weights.to_vec(),
            size,
        })
    }

    /// 3x3 Gaussian-like blur; weights sum to 1.
    pub fn blur() -> Self {
        Self {
            weights: BLUR_3X3.to_vec(),
            size: 3,
        }
    }

    /// 5x5 sharpen with a dominant centre weight.
    pub fn sharpen() -> Self {
        Self {
            weights: SHARPEN_5X5.to_vec(),
            size: 5,
        }
    }

    /// Side length of the kernel.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Distance from the centre to an edge (`size / 2`).
    pub fn radius(&self) -> usize {
        self.size / 2
    }

    /// Returns row `i` of the weights.
    pub fn row(&self, i: usize) -> &[f64] {
        &self.weights[i * self.size..(i + 1) * self.size]
    }

    /// Sum of all weights.
    pub fn sum(&self) -> f64 {
        self.weights.iter().sum()
    }
}
