//! Bridge to the `image` crate for compressed raster formats.
//!
//! Available when the `image-io` feature is enabled. The plain-text format is
//! handled by [`crate::codec`]; everything else (PNG, JPEG, BMP) goes through
//! here.

use std::path::Path;

use crate::image::{PixelGrid, Sample};
use crate::util::{ImgProcError, ImgProcResult};

/// Converts a decoded RGB buffer into a pixel grid.
pub fn grid_from_rgb_image(img: &image::RgbImage) -> ImgProcResult<PixelGrid> {
    let width = img.width() as usize;
    let height = img.height() as usize;
    let data = img.pixels().map(|px| Sample::from(px.0)).collect();
    PixelGrid::new(data, width, height)
}

/// Converts any decoded image into a pixel grid, dropping alpha.
pub fn grid_from_dynamic(img: &image::DynamicImage) -> ImgProcResult<PixelGrid> {
    grid_from_rgb_image(&img.to_rgb8())
}

/// Converts a pixel grid into an RGB buffer for encoding.
pub fn grid_to_rgb_image(grid: &PixelGrid) -> ImgProcResult<image::RgbImage> {
    let invalid = || ImgProcError::InvalidDimensions {
        width: grid.width(),
        height: grid.height(),
    };
    let width = u32::try_from(grid.width()).map_err(|_| invalid())?;
    let height = u32::try_from(grid.height()).map_err(|_| invalid())?;
    let raw: Vec<u8> = grid.samples().iter().flat_map(Sample::channels).collect();
    image::RgbImage::from_raw(width, height, raw).ok_or_else(invalid)
}

/// Loads a raster image from disk, with the format detected from its contents.
///
/// The file extension is only a fallback when the leading bytes match no
/// known signature.
pub fn load_raster<P: AsRef<Path>>(path: P) -> ImgProcResult<PixelGrid> {
    let io_err = |reason: String| ImgProcError::ImageIo { reason };
    let img = image::ImageReader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|err| io_err(err.to_string()))?
        .decode()
        .map_err(|err| io_err(err.to_string()))?;
    grid_from_dynamic(&img)
}

/// Saves a grid to disk, with the format inferred from the file extension.
pub fn save_raster<P: AsRef<Path>>(grid: &PixelGrid, path: P) -> ImgProcResult<()> {
    let img = grid_to_rgb_image(grid)?;
    img.save(path).map_err(|err| ImgProcError::ImageIo {
        reason: err.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::{grid_from_rgb_image, grid_to_rgb_image, load_raster};
    use crate::image::{PixelGrid, Sample};
    use crate::ImgProcError;

    #[test]
    fn rgb_image_conversion_preserves_layout() {
        let grid = PixelGrid::from_rows(vec![
            vec![Sample::from_rgb(1, 2, 3), Sample::from_rgb(4, 5, 6)],
            vec![Sample::from_rgb(7, 8, 9), Sample::from_rgb(10, 11, 12)],
        ])
        .unwrap();
        let img = grid_to_rgb_image(&grid).unwrap();
        assert_eq!(img.get_pixel(1, 0).0, [4, 5, 6]);
        assert_eq!(img.get_pixel(0, 1).0, [7, 8, 9]);
        assert_eq!(grid_from_rgb_image(&img).unwrap(), grid);
    }

    #[test]
    fn load_detects_format_from_contents() {
        let grid = PixelGrid::from_rows(vec![vec![
            Sample::from_rgb(200, 10, 30),
            Sample::from_rgb(0, 90, 255),
        ]])
        .unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("snapshot.dat");
        grid_to_rgb_image(&grid)
            .unwrap()
            .save_with_format(&path, image::ImageFormat::Png)
            .unwrap();
        assert_eq!(load_raster(&path).unwrap(), grid);
    }

    #[test]
    fn load_of_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_raster(dir.path().join("missing.png")).unwrap_err();
        assert!(matches!(err, ImgProcError::ImageIo { .. }));
    }
}
