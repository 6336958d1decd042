use criterion::{black_box, criterion_group, criterion_main, Criterion};
use urania::aspects::AspectCalculator;
use urania::ephemeris::ReferenceEphemeris;

fn bench_calculate_aspect(c: &mut Criterion) {
    let calculator = AspectCalculator::new();

    c.bench_function("calculate_aspect", |b| {
        b.iter(|| calculator.calculate_aspect(black_box(100.0), black_box(192.0)))
    });
}

fn bench_calculate_aspects(c: &mut Criterion) {
    let calculator = AspectCalculator::new();
    let planets = ReferenceEphemeris::new().calculate_planetary_positions(2453047.74653);

    c.bench_function("calculate_aspects_ten_bodies", |b| {
        b.iter(|| calculator.calculate_aspects(black_box(&planets)))
    });
}

criterion_group!(benches, bench_calculate_aspect, bench_calculate_aspects);
criterion_main!(benches);
