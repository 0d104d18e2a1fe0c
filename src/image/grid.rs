//! Owned row-major pixel grid.

use super::Sample;
use crate::util::{ImgProcError, ImgProcResult};

/// Rectangular image stored as a contiguous row-major buffer of samples.
///
/// Width and height are either both non-zero or both zero (the empty grid).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PixelGrid {
    data: Vec<Sample>,
    width: usize,
    height: usize,
}

impl PixelGrid {
    /// Creates a grid from a contiguous row-major buffer.
    pub fn new(data: Vec<Sample>, width: usize, height: usize) -> ImgProcResult<Self> {
        if (width == 0) != (height == 0) {
            return Err(ImgProcError::InvalidDimensions { width, height });
        }
        let needed = width
            .checked_mul(height)
            .ok_or(ImgProcError::InvalidDimensions { width, height })?;
        if data.len() != needed {
            return Err(ImgProcError::InvalidDimensions { width, height });
        }
        Ok(Self::from_raw(data, width, height))
    }

    /// Creates a grid from nested rows; every row must have the same length.
    pub fn from_rows(rows: Vec<Vec<Sample>>) -> ImgProcResult<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if height > 0 && width == 0 {
            return Err(ImgProcError::InvalidDimensions { width, height });
        }
        let mut data = Vec::with_capacity(width * height);
        for (row, samples) in rows.into_iter().enumerate() {
            if samples.len() != width {
                return Err(ImgProcError::RaggedRows {
                    row,
                    expected: width,
                    got: samples.len(),
                });
            }
            data.extend(samples);
        }
        Ok(Self::from_raw(data, width, height))
    }

    /// Creates a grid where every pixel is `sample`.
    pub fn filled(width: usize, height: usize, sample: Sample) -> ImgProcResult<Self> {
        let len = width
            .checked_mul(height)
            .ok_or(ImgProcError::InvalidDimensions { width, height })?;
        Self::new(vec![sample; len], width, height)
    }

    /// The grid with no rows.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Trusted constructor for buffers produced by this crate's transforms.
    pub(crate) fn from_raw(data: Vec<Sample>, width: usize, height: usize) -> Self {
        debug_assert_eq!(data.len(), width * height);
        Self {
            data,
            width,
            height,
        }
    }

    /// Returns the grid width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the grid height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of pixels in the grid.
    pub fn pixel_count(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the row-major sample buffer.
    pub fn samples(&self) -> &[Sample] {
        &self.data
    }

    /// Returns the sample at `(row, col)` if it is within bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<Sample> {
        if row >= self.height || col >= self.width {
            return None;
        }
        self.data.get(row * self.width + col).copied()
    }

    /// Returns row `row` as a slice of length `width`.
    pub fn row(&self, row: usize) -> Option<&[Sample]> {
        if row >= self.height {
            return None;
        }
        let start = row * self.width;
        self.data.get(start..start + self.width)
    }

    /// Iterates over rows from top to bottom.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[Sample]> + DoubleEndedIterator + '_ {
        // An empty buffer yields no chunks, so the `max(1)` only guards the divisor.
        self.data.chunks_exact(self.width.max(1))
    }

    /// Copies the grid into nested rows.
    pub fn to_rows(&self) -> Vec<Vec<Sample>> {
        self.rows().map(<[Sample]>::to_vec).collect()
    }

    /// Builds a new grid of the same size by mapping every sample.
    pub fn map_samples<F>(&self, f: F) -> Self
    where
        F: FnMut(&Sample) -> Sample,
    {
        let data = self.data.iter().map(f).collect();
        Self::from_raw(data, self.width, self.height)
    }

    /// Largest channel value of any pixel, 0 for the empty grid.
    pub fn max_channel_value(&self) -> u8 {
        self.data
            .iter()
            .map(Sample::max_channel)
            .max()
            .unwrap_or(0)
    }

    /// True when every pixel has equal red, green and blue channels.
    pub fn is_greyscale(&self) -> bool {
        self.data.iter().all(Sample::is_grey)
    }
}
