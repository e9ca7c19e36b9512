use criterion::{criterion_group, criterion_main, Criterion};
use distfield::{
    weighted_distance_transform, Connectivity, CostQueue, FullCompute, GradientCost,
    GradientCostParams, Image, ImageView, ThresholdForeground, TransformParams, UnitCost,
};
use std::hint::black_box;

// Typical capacitive sensor frame.
const WIDTH: usize = 72;
const HEIGHT: usize = 48;

/// Synthetic heatmap with a handful of Gaussian-ish contact blobs.
fn make_heatmap(width: usize, height: usize) -> Vec<f32> {
    let blobs = [
        (14.0f32, 10.0f32, 3.0f32),
        (40.0, 25.0, 4.0),
        (45.0, 28.0, 3.5),
        (60.0, 12.0, 2.5),
    ];
    let mut data = Vec::with_capacity(width * height);
    for y in 0..height {
        for x in 0..width {
            let mut v = 0.0f32;
            for &(cx, cy, sigma) in &blobs {
                let dx = x as f32 - cx;
                let dy = y as f32 - cy;
                v += (-(dx * dx + dy * dy) / (2.0 * sigma * sigma)).exp();
            }
            data.push(v.min(1.0));
        }
    }
    data
}

fn bench_transform(c: &mut Criterion) {
    let heatmap = make_heatmap(WIDTH, HEIGHT);
    let view = ImageView::from_slice(&heatmap, WIDTH, HEIGHT).unwrap();
    let foreground = ThresholdForeground::new(view, 0.6).unwrap();

    let mut out = Image::filled(WIDTH, HEIGHT, 0.0f32).unwrap();
    let mut queue = CostQueue::with_capacity(9 * WIDTH * HEIGHT);

    let unit = UnitCost::<f32>::new();
    let gradient = GradientCost::new(view, GradientCostParams::default()).unwrap();

    c.bench_function("wdt_unit_four", |b| {
        b.iter(|| {
            weighted_distance_transform(
                &mut out,
                &foreground,
                &FullCompute,
                &unit,
                &mut queue,
                TransformParams {
                    connectivity: Connectivity::Four,
                    limit: f32::INFINITY,
                },
            );
            black_box(out.as_slice()[0])
        });
    });

    c.bench_function("wdt_unit_eight", |b| {
        b.iter(|| {
            weighted_distance_transform(
                &mut out,
                &foreground,
                &FullCompute,
                &unit,
                &mut queue,
                TransformParams {
                    connectivity: Connectivity::Eight,
                    limit: f32::INFINITY,
                },
            );
            black_box(out.as_slice()[0])
        });
    });

    c.bench_function("wdt_gradient_eight", |b| {
        b.iter(|| {
            weighted_distance_transform(
                &mut out,
                &foreground,
                &FullCompute,
                &gradient,
                &mut queue,
                TransformParams {
                    connectivity: Connectivity::Eight,
                    limit: f32::INFINITY,
                },
            );
            black_box(out.as_slice()[0])
        });
    });

    c.bench_function("wdt_gradient_eight_limited", |b| {
        b.iter(|| {
            weighted_distance_transform(
                &mut out,
                &foreground,
                &FullCompute,
                &gradient,
                &mut queue,
                TransformParams {
                    connectivity: Connectivity::Eight,
                    limit: 12.0,
                },
            );
            black_box(out.as_slice()[0])
        });
    });
}

criterion_group!(benches, bench_transform);
criterion_main!(benches);
