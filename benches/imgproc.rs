use criterion::{criterion_group, criterion_main, Criterion};
use imgproc::codec::{decode, encode};
use imgproc::lowlevel::{build_histograms, convolve, greyscale_grid, sepia_grid};
use imgproc::{Component, Kernel, PixelGrid, Sample};
use std::hint::black_box;

fn make_grid(width: usize, height: usize) -> PixelGrid {
    let mut data = Vec::with_capacity(width * height);
    for y in 0..height {
        for x in 0..width {
            let r = ((x * 13) ^ (y * 7) ^ (x * y)) & 0xFF;
            let g = ((x * 5) ^ (y * 11)) & 0xFF;
            let b = (x + y) & 0xFF;
            data.push(Sample::from_rgb(r as u8, g as u8, b as u8));
        }
    }
    PixelGrid::new(data, width, height).unwrap()
}

fn bench_convolution(c: &mut Criterion) {
    let grid = make_grid(256, 256);
    let blur = Kernel::blur();
    let sharpen = Kernel::sharpen();

    c.bench_function("blur_3x3_256", |b| {
        b.iter(|| black_box(convolve(&grid, &blur)));
    });
    c.bench_function("sharpen_5x5_256", |b| {
        b.iter(|| black_box(convolve(&grid, &sharpen)));
    });

    #[cfg(feature = "rayon")]
    c.bench_function("sharpen_5x5_256_par", |b| {
        b.iter(|| black_box(imgproc::lowlevel::convolve_par(&grid, &sharpen)));
    });
}

fn bench_color(c: &mut Criterion) {
    let grid = make_grid(512, 512);

    c.bench_function("greyscale_luma_512", |b| {
        b.iter(|| black_box(greyscale_grid(&grid, Component::Luma)));
    });
    c.bench_function("sepia_512", |b| {
        b.iter(|| black_box(sepia_grid(&grid)));
    });
    c.bench_function("histograms_512", |b| {
        b.iter(|| black_box(build_histograms(&grid)));
    });
}

fn bench_codec(c: &mut Criterion) {
    let grid = make_grid(256, 256);
    let text = encode(&grid);

    c.bench_function("ppm_encode_256", |b| {
        b.iter(|| black_box(encode(&grid)));
    });
    c.bench_function("ppm_decode_256", |b| {
        b.iter(|| black_box(decode(&text).unwrap()));
    });
}

criterion_group!(benches, bench_convolution, bench_color, bench_codec);
criterion_main!(benches);
