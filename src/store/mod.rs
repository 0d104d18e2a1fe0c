//! Named image workspace.
//!
//! [`ImageStore`] owns every grid under a case-sensitive name. Operations read
//! a source grid, build a complete result and only then insert it under the
//! destination name, so a failed call leaves the store untouched and writing
//! back to the source name is a plain replacement.

use std::collections::HashMap;

use crate::codec::ppm;
use crate::color::{self, Component};
use crate::geometry::{self, FlipAxis};
use crate::histogram::{self, Histogram};
use crate::image::{PixelGrid, Sample};
use crate::kernel::{self, Kernel};
use crate::trace::{trace_event, trace_span};
use crate::util::{ImgProcError, ImgProcResult};

/// Store-wide execution options.
#[derive(Clone, Copy, Debug, Default)]
pub struct StoreConfig {
    /// Run convolution row-parallel (requires the `rayon` feature, otherwise
    /// ignored).
    pub parallel: bool,
}

/// Mapping from image name to pixel grid.
#[derive(Clone, Debug, Default)]
pub struct ImageStore {
    images: HashMap<String, PixelGrid>,
    cfg: StoreConfig,
}

impl ImageStore {
    /// Creates an empty store with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the store configuration.
    pub fn with_config(mut self, cfg: StoreConfig) -> Self {
        self.cfg = cfg;
        self
    }

    pub fn config(&self) -> &StoreConfig {
        &self.cfg
    }

    /// Inserts `grid` under `name`, replacing any previous entry.
    pub fn load(&mut self, name: impl Into<String>, grid: PixelGrid) {
        self.images.insert(name.into(), grid);
    }

    /// Returns the grid stored under `name`.
    pub fn get(&self, name: &str) -> ImgProcResult<&PixelGrid> {
        self.images
            .get(name)
            .ok_or_else(|| ImgProcError::not_found(name))
    }

    /// Removes and returns the grid stored under `name`.
    pub fn remove(&mut self, name: &str) -> ImgProcResult<PixelGrid> {
        self.images
            .remove(name)
            .ok_or_else(|| ImgProcError::not_found(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.images.contains_key(name)
    }

    /// Stored names in unspecified order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.images.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Width of the named image; 0 for an image without rows.
    pub fn width(&self, name: &str) -> ImgProcResult<usize> {
        Ok(self.get(name)?.width())
    }

    /// Height of the named image.
    pub fn height(&self, name: &str) -> ImgProcResult<usize> {
        Ok(self.get(name)?.height())
    }

    /// Returns the sample at `(row, col)` of the named image.
    pub fn pixel_at(&self, row: usize, col: usize, name: &str) -> ImgProcResult<Sample> {
        let grid = self.get(name)?;
        grid.get(row, col).ok_or(ImgProcError::OutOfBounds {
            row,
            col,
            width: grid.width(),
            height: grid.height(),
        })
    }

    /// Adds `delta` to every channel, saturating at 0 and 255.
    pub fn brighten(&mut self, delta: i32, name: &str, new_name: &str) -> ImgProcResult<()> {
        let src = self.get(name)?;
        let _span =
            trace_span!("brighten", delta = delta, width = src.width(), height = src.height())
                .entered();
        let out = color::brighten_grid(src, delta);
        trace_event!("brightened", delta = delta, pixels = out.pixel_count());
        self.publish(new_name, out);
        Ok(())
    }

    /// Greyscales the image by the chosen component.
    pub fn greyscale(
        &mut self,
        component: Component,
        name: &str,
        new_name: &str,
    ) -> ImgProcResult<()> {
        let src = self.get(name)?;
        let _span = trace_span!(
            "greyscale",
            component = component.as_str(),
            width = src.width(),
            height = src.height()
        )
        .entered();
        let out = color::greyscale_grid(src, component);
        trace_event!(
            "greyscaled",
            component = component.as_str(),
            pixels = out.pixel_count()
        );
        self.publish(new_name, out);
        Ok(())
    }

    /// Applies the sepia tone matrix.
    pub fn sepia(&mut self, name: &str, new_name: &str) -> ImgProcResult<()> {
        let src = self.get(name)?;
        let _span = trace_span!("sepia", width = src.width(), height = src.height()).entered();
        let out = color::sepia_grid(src);
        trace_event!("sepia_toned", pixels = out.pixel_count());
        self.publish(new_name, out);
        Ok(())
    }

    /// Mirrors the image across `axis`.
    pub fn flip(&mut self, axis: FlipAxis, name: &str, new_name: &str) -> ImgProcResult<()> {
        let src = self.get(name)?;
        let _span = trace_span!(
            "flip",
            axis = %axis,
            width = src.width(),
            height = src.height()
        )
        .entered();
        let out = geometry::flip_grid(src, axis);
        trace_event!(
            "flipped",
            vertical = axis == FlipAxis::Vertical,
            pixels = out.pixel_count()
        );
        self.publish(new_name, out);
        Ok(())
    }

    /// Convolves every channel with `kernel`, zero-padding at the borders.
    pub fn convolve(&mut self, kernel: &Kernel, name: &str, new_name: &str) -> ImgProcResult<()> {
        let src = self.get(name)?;
        let _span = trace_span!(
            "convolve",
            kernel = kernel.size(),
            width = src.width(),
            height = src.height(),
            parallel = self.cfg.parallel
        )
        .entered();
        let out = run_convolution(src, kernel, self.cfg.parallel);
        trace_event!("convolved", kernel = kernel.size(), pixels = out.pixel_count());
        self.publish(new_name, out);
        Ok(())
    }

    /// Applies the 3x3 blur kernel.
    pub fn blur(&mut self, name: &str, new_name: &str) -> ImgProcResult<()> {
        self.convolve(&Kernel::blur(), name, new_name)
    }

    /// Applies the 5x5 sharpen kernel.
    pub fn sharpen(&mut self, name: &str, new_name: &str) -> ImgProcResult<()> {
        self.convolve(&Kernel::sharpen(), name, new_name)
    }

    /// Builds the histogram set for the named image.
    pub fn histograms(&self, name: &str) -> ImgProcResult<Vec<Histogram>> {
        let src = self.get(name)?;
        let _span = trace_span!("histograms", width = src.width(), height = src.height()).entered();
        let hists = histogram::build_histograms(src);
        // One table is produced exactly when the image is greyscale.
        trace_event!(
            "histograms_built",
            count = hists.len(),
            greyscale = hists.len() == 1
        );
        Ok(hists)
    }

    /// Renders the named image as plain-text PPM.
    pub fn encode_ppm(&self, name: &str) -> ImgProcResult<String> {
        Ok(ppm::encode(self.get(name)?))
    }

    /// Parses plain-text PPM and stores it under `name`.
    ///
    /// Nothing is stored if parsing fails.
    pub fn load_ppm(&mut self, name: impl Into<String>, text: &str) -> ImgProcResult<()> {
        let grid = ppm::decode(text)?;
        self.load(name, grid);
        Ok(())
    }

    fn publish(&mut self, new_name: &str, grid: PixelGrid) {
        trace_event!("image_stored", width = grid.width(), height = grid.height());
        self.images.insert(new_name.to_owned(), grid);
    }
}

#[cfg(feature = "rayon")]
fn run_convolution(src: &PixelGrid, kernel: &Kernel, parallel: bool) -> PixelGrid {
    if parallel {
        kernel::rayon::convolve_par(src, kernel)
    } else {
        kernel::scalar::convolve(src, kernel)
    }
}

#[cfg(not(feature = "rayon"))]
fn run_convolution(src: &PixelGrid, kernel: &Kernel, _parallel: bool) -> PixelGrid {
    kernel::scalar::convolve(src, kernel)
}

#[cfg(test)]
mod tests {
    use super::ImageStore;
    use crate::image::{PixelGrid, Sample};
    use crate::ImgProcError;

    fn store_with(name: &str, grid: PixelGrid) -> ImageStore {
        let mut store = ImageStore::new();
        store.load(name, grid);
        store
    }

    #[test]
    fn missing_names_report_not_found() {
        let mut store = ImageStore::new();
        let expected = ImgProcError::NotFound {
            name: "ghost".to_owned(),
        };
        assert_eq!(store.get("ghost").unwrap_err(), expected);
        assert_eq!(store.sepia("ghost", "out").unwrap_err(), expected);
        assert!(!store.contains("out"));
    }

    #[test]
    fn pixel_at_checks_bounds() {
        let grid = PixelGrid::filled(2, 1, Sample::grey(5)).unwrap();
        let store = store_with("a", grid);
        assert_eq!(store.pixel_at(0, 1, "a"), Ok(Sample::grey(5)));
        assert_eq!(
            store.pixel_at(1, 0, "a"),
            Err(ImgProcError::OutOfBounds {
                row: 1,
                col: 0,
                width: 2,
                height: 1,
            })
        );
    }

    #[test]
    fn overwriting_source_name_replaces_entry() {
        let grid = PixelGrid::filled(1, 1, Sample::grey(10)).unwrap();
        let mut store = store_with("a", grid);
        store.brighten(5, "a", "a").unwrap();
        assert_eq!(store.pixel_at(0, 0, "a"), Ok(Sample::grey(15)));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn failed_ppm_load_keeps_previous_entry() {
        let grid = PixelGrid::filled(1, 1, Sample::grey(10)).unwrap();
        let mut store = store_with("a", grid.clone());
        assert!(store.load_ppm("a", "P6\n1 1\n255\n").is_err());
        assert_eq!(store.get("a"), Ok(&grid));
    }

    #[test]
    fn histogram_table_count_follows_greyscale() {
        let grey = PixelGrid::filled(2, 2, Sample::grey(7)).unwrap();
        let mut store = store_with("grey", grey);
        assert_eq!(store.histograms("grey").unwrap().len(), 1);

        store.brighten(3, "grey", "still_grey").unwrap();
        assert_eq!(store.histograms("still_grey").unwrap().len(), 1);

        let color = PixelGrid::filled(2, 2, Sample::from_rgb(9, 4, 1)).unwrap();
        store.load("color", color);
        assert_eq!(store.histograms("color").unwrap().len(), 4);
        store.greyscale(crate::Component::Luma, "color", "luma").unwrap();
        assert_eq!(store.histograms("luma").unwrap().len(), 1);
    }
}
