use criterion::{criterion_group, criterion_main, Criterion};
use graymap::{locate, GrayImage};
use std::hint::black_box;

fn make_image(width: usize, height: usize) -> GrayImage {
    let mut data = Vec::with_capacity(width * height);
    for y in 0..height {
        for x in 0..width {
            let value = ((x * 13) ^ (y * 7) ^ (x * y)) & 0xFF;
            data.push(value as u8);
        }
    }
    GrayImage::from_raw(data, width, height, 255).unwrap()
}

fn bench_locate(c: &mut Criterion) {
    let img = make_image(512, 512);
    let pattern = img.crop(300, 280, 48, 48).unwrap();

    c.bench_function("locate_48x48_in_512x512", |b| {
        b.iter(|| black_box(locate(&img, &pattern)));
    });

    // Worst case: a pattern absent from the image forces a full scan.
    let absent = GrayImage::from_raw(vec![255; 48 * 48], 48, 48, 255).unwrap();
    c.bench_function("locate_miss_48x48_in_512x512", |b| {
        b.iter(|| black_box(locate(&img, &absent)));
    });
}

fn bench_blur(c: &mut Criterion) {
    let img = make_image(256, 256);

    c.bench_function("blur_3x3_256x256", |b| {
        b.iter(|| {
            let mut scratch = img.clone();
            scratch.blur(1, 1).unwrap();
            black_box(scratch);
        });
    });

    c.bench_function("blur_9x9_256x256", |b| {
        b.iter(|| {
            let mut scratch = img.clone();
            scratch.blur(4, 4).unwrap();
            black_box(scratch);
        });
    });
}

criterion_group!(benches, bench_locate, bench_blur);
criterion_main!(benches);
