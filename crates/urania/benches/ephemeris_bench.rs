use chrono::{TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use urania::chart::{ChartEngine, ChartRequest, EngineSettings};
use urania::ephemeris::{Ayanamsa, Body, FixtureEphemeris, CHART_BODIES};

fn fixture() -> FixtureEphemeris {
    CHART_BODIES
        .iter()
        .filter(|body| **body != Body::Ketu)
        .enumerate()
        .fold(FixtureEphemeris::new(200.0, 80.0), |fixture, (i, body)| {
            fixture.with_body(*body, i as f64 * 31.7, 1.0 - i as f64 * 0.15)
        })
}

fn bench_ayanamsa_offset(c: &mut Criterion) {
    c.bench_function("ayanamsa_offset", |b| {
        b.iter(|| Ayanamsa::Lahiri.offset_deg(black_box(2_447_907.104_166_7)))
    });
}

fn bench_full_chart(c: &mut Criterion) {
    let engine = ChartEngine::new(fixture(), EngineSettings::default());
    let request = ChartRequest::new(1990, 1, 15, 55.75, 37.62).with_time(14, 30);
    let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();

    c.bench_function("full_chart_fixture", |b| {
        b.iter(|| engine.compute_at(black_box(&request), now))
    });
}

criterion_group!(benches, bench_ayanamsa_offset, bench_full_chart);
criterion_main!(benches);
