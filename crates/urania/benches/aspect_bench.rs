use criterion::{black_box, criterion_group, criterion_main, Criterion};
use urania::aspects::{AspectCalculator, ChartPoint};

const IDS: [&str; 14] = [
    "sun", "moon", "mercury", "venus", "mars", "jupiter", "saturn", "uranus", "neptune", "pluto",
    "rahu", "ketu", "vertex", "pars_fortuna",
];

fn bench_calculate_aspects(c: &mut Criterion) {
    let calculator = AspectCalculator::new();

    c.bench_function("calculate_aspects", |b| {
        b.iter(|| {
            calculator.calculate_aspects(
                black_box(100.0),
                black_box(102.0),
                black_box(Some(1.0)),
                black_box(Some(13.0)),
            )
        })
    });
}

fn bench_compute_aspects(c: &mut Criterion) {
    let calculator = AspectCalculator::new();
    let points: Vec<ChartPoint> = IDS
        .iter()
        .copied()
        .enumerate()
        .map(|(i, id)| ChartPoint {
            id,
            longitude: (i as f64) * 27.3,
            speed: if i < 12 { Some(1.0 - i as f64 * 0.1) } else { None },
        })
        .collect();

    c.bench_function("compute_aspects_14_points", |b| {
        b.iter(|| calculator.compute_aspects(black_box(&points)))
    });
}

criterion_group!(benches, bench_calculate_aspects, bench_compute_aspects);
criterion_main!(benches);
