//! Axis flips.

use std::fmt;
use std::str::FromStr;

use crate::image::PixelGrid;
use crate::util::ImgProcError;

/// Axis to mirror an image across.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FlipAxis {
    /// Reverses row order: the top row becomes the bottom row.
    Vertical,
    /// Reverses the samples within each row.
    Horizontal,
}

impl FromStr for FlipAxis {
    type Err = ImgProcError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        if token.eq_ignore_ascii_case("vertical") {
            Ok(FlipAxis::Vertical)
        } else if token.eq_ignore_ascii_case("horizontal") {
            Ok(FlipAxis::Horizontal)
        } else {
            Err(ImgProcError::InvalidFlipAxis {
                token: token.to_owned(),
            })
        }
    }
}

impl fmt::Display for FlipAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlipAxis::Vertical => f.write_str("vertical"),
            FlipAxis::Horizontal => f.write_str("horizontal"),
        }
    }
}

/// Returns a mirrored copy of `grid`; dimensions are preserved.
pub fn flip_grid(grid: &PixelGrid, axis: FlipAxis) -> PixelGrid {
    let mut data = Vec::with_capacity(grid.pixel_count());
    match axis {
        FlipAxis::Vertical => {
            for row in grid.rows().rev() {
                data.extend_from_slice(row);
            }
        }
        FlipAxis::Horizontal => {
            for row in grid.rows() {
                data.extend(row.iter().rev());
            }
        }
    }
    PixelGrid::from_raw(data, grid.width(), grid.height())
}

#[cfg(test)]
mod tests {
    use super::{flip_grid, FlipAxis};
    use crate::image::{PixelGrid, Sample};

    fn grid() -> PixelGrid {
        let rows = (0..2u8)
            .map(|r| (0..3u8).map(|c| Sample::grey(r * 10 + c)).collect())
            .collect();
        PixelGrid::from_rows(rows).unwrap()
    }

    #[test]
    fn vertical_flip_reverses_rows() {
        let out = flip_grid(&grid(), FlipAxis::Vertical);
        assert_eq!(out.get(0, 0), Some(Sample::grey(10)));
        assert_eq!(out.get(1, 2), Some(Sample::grey(2)));
    }

    #[test]
    fn horizontal_flip_reverses_columns() {
        let out = flip_grid(&grid(), FlipAxis::Horizontal);
        assert_eq!(out.get(0, 0), Some(Sample::grey(2)));
        assert_eq!(out.get(1, 0), Some(Sample::grey(12)));
        assert_eq!((out.width(), out.height()), (3, 2));
    }

    #[test]
    fn axis_parses_tokens() {
        assert_eq!("Vertical".parse::<FlipAxis>(), Ok(FlipAxis::Vertical));
        assert!("diagonal".parse::<FlipAxis>().is_err());
    }
}
