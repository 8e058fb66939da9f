//! Benchmarks for steak doneness inference

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fuzzy_mamdani::steak::SteakDoneness;
use fuzzy_mamdani::Inputs;

fn compute_benchmark(c: &mut Criterion) {
    let steak = SteakDoneness::new().expect("valid steak configuration");
    let cases = [("rare", (1., 52., 3.)), ("mixed", (2.7, 66., 11.)), ("clipped", (6., 90., 20.))];

    let mut group = c.benchmark_group("compute");

    for (name, (thickness, temperature, frying_time)) in cases {
        let mut inputs = Inputs::new();

        inputs.add(steak.thickness, thickness);
        inputs.add(steak.temperature, temperature);
        inputs.add(steak.frying_time, frying_time);

        group.bench_with_input(BenchmarkId::new("steak", name), &inputs, |b, inputs| {
            b.iter(|| steak.engine.compute(black_box(inputs)))
        });
    }

    group.finish();
}

fn build_benchmark(c: &mut Criterion) {
    c.bench_function("build_steak_engine", |b| b.iter(SteakDoneness::new));
}

criterion_group!(benches, compute_benchmark, build_benchmark);
criterion_main!(benches);
