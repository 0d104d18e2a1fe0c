use imgproc::lowlevel::convolve;
use imgproc::{ImageStore, ImgProcError, Kernel, PixelGrid, Sample};

fn uniform_store(width: usize, height: usize, value: u8) -> ImageStore {
    let mut store = ImageStore::new();
    store.load(
        "img",
        PixelGrid::filled(width, height, Sample::grey(value)).unwrap(),
    );
    store
}

#[test]
fn blur_keeps_dimensions_and_zero_pads() {
    let mut store = uniform_store(4, 3, 200);
    store.blur("img", "blurred").unwrap();
    assert_eq!(store.width("blurred"), Ok(4));
    assert_eq!(store.height("blurred"), Ok(3));
    // Corner: 200 * 0.5625 = 112.5, rounded half away from zero.
    assert_eq!(store.pixel_at(0, 0, "blurred"), Ok(Sample::grey(113)));
    // Interior pixels see the whole kernel.
    assert_eq!(store.pixel_at(1, 1, "blurred"), Ok(Sample::grey(200)));
}

#[test]
fn sharpen_rounds_and_clamps() {
    let mut store = uniform_store(3, 3, 100);
    store.sharpen("img", "sharp").unwrap();
    // Centre sees the inner ring and the centre only: 100 * 3 = 300.
    assert_eq!(store.pixel_at(1, 1, "sharp"), Ok(Sample::grey(255)));
    // Corner: 100 * (1 + 3 * 0.25 - 5 * 0.125) = 112.5.
    assert_eq!(store.pixel_at(0, 0, "sharp"), Ok(Sample::grey(113)));
}

#[test]
fn negative_sums_clamp_to_zero() {
    let kernel = Kernel::new(vec![
        vec![0.0, -1.0, 0.0],
        vec![0.0, 0.0, 0.0],
        vec![0.0, 0.0, 0.0],
    ])
    .unwrap();
    let grid = PixelGrid::filled(2, 2, Sample::from_rgb(9, 20, 30)).unwrap();
    let out = convolve(&grid, &kernel);
    assert!(out.samples().iter().all(|px| *px == Sample::grey(0)));
}

#[test]
fn channels_are_convolved_independently() {
    let grid = PixelGrid::from_rows(vec![vec![
        Sample::from_rgb(90, 0, 0),
        Sample::from_rgb(0, 90, 0),
        Sample::from_rgb(0, 0, 90),
    ]])
    .unwrap();
    let kernel = Kernel::new(vec![
        vec![0.0, 0.0, 0.0],
        vec![1.0 / 3.0, 1.0 / 3.0, 1.0 / 3.0],
        vec![0.0, 0.0, 0.0],
    ])
    .unwrap();
    let out = convolve(&grid, &kernel);
    assert_eq!(out.get(0, 0), Some(Sample::from_rgb(30, 30, 0)));
    assert_eq!(out.get(0, 1), Some(Sample::from_rgb(30, 30, 30)));
    assert_eq!(out.get(0, 2), Some(Sample::from_rgb(0, 30, 30)));
}

#[test]
fn larger_kernels_are_supported() {
    let mut weights = vec![0.0; 49];
    weights[24] = 1.0;
    let identity = Kernel::from_slice(&weights, 7).unwrap();
    let mut store = uniform_store(2, 5, 42);
    store.convolve(&identity, "img", "same").unwrap();
    assert_eq!(store.get("same"), store.get("img"));
}

#[test]
fn convolve_missing_image_fails() {
    let mut store = ImageStore::new();
    let err = store.blur("nope", "out").unwrap_err();
    assert_eq!(
        err,
        ImgProcError::NotFound {
            name: "nope".to_owned(),
        }
    );
    assert!(store.is_empty());
}
