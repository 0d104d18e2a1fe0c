//! Error types for imgproc.

use thiserror::Error;

/// Result alias for imgproc operations.
pub type ImgProcResult<T> = std::result::Result<T, ImgProcError>;

/// Errors that can occur when working with images in a store.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ImgProcError {
    /// The referenced image name is not present in the store.
    #[error("image cannot be found: {name}")]
    NotFound { name: String },
    /// A pixel coordinate lies outside the grid.
    #[error("position ({row}, {col}) not in the image of size {width}x{height}")]
    OutOfBounds {
        row: usize,
        col: usize,
        width: usize,
        height: usize,
    },
    /// A channel value outside [0, 255] was supplied for a sample.
    #[error("not a valid RGB sample: ({red}, {green}, {blue})")]
    InvalidChannelValue { red: i64, green: i64, blue: i64 },
    /// The greyscale component token is not recognized.
    #[error("component does not exist: {token}")]
    InvalidComponentSelector { token: String },
    /// The flip axis token is not recognized.
    #[error("flip axis does not exist: {token}")]
    InvalidFlipAxis { token: String },
    /// Plain-text image data could not be parsed.
    #[error("invalid PPM file: {reason}")]
    MalformedInput { reason: String },
    /// Grid dimensions are inconsistent with each other or with the buffer.
    #[error("invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },
    /// Rows passed to a grid constructor do not share one length.
    #[error("row {row} has {got} samples, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        got: usize,
    },
    /// Convolution kernels must be non-empty, square and odd-sized.
    #[error("invalid kernel shape: {rows}x{cols}")]
    InvalidKernel { rows: usize, cols: usize },
    /// Raster codec or filesystem failure.
    #[error("image I/O error: {reason}")]
    ImageIo { reason: String },
}

impl ImgProcError {
    pub(crate) fn not_found(name: &str) -> Self {
        Self::NotFound {
            name: name.to_owned(),
        }
    }

    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedInput {
            reason: reason.into(),
        }
    }
}
