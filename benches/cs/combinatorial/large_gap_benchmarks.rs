use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use lggc::large_gap::{compute_gaps, CodeBuilder, ShapeParameters};

fn bench_build_canonical(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_canonical");
    group.sample_size(10);

    for width in [8, 12, 16] {
        group.throughput(Throughput::Elements(1 << width));
        group.bench_with_input(BenchmarkId::from_parameter(width), &width, |b, &width| {
            b.iter(|| black_box(CodeBuilder::new().build_canonical(black_box(width)).unwrap()));
        });
    }

    group.finish();
}

fn bench_build_from_parameters(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_from_parameters");
    group.sample_size(10);
    group.throughput(Throughput::Elements(1 << 16));

    // Component codes are cached after the first iteration.
    let mut builder = CodeBuilder::new();
    for params in [
        ShapeParameters::new(14, 2, 3, 1),
        ShapeParameters::new(8, 8, 129, 127),
    ] {
        group.bench_function(params.to_string(), |b| {
            b.iter(|| black_box(builder.build_from_parameters(black_box(params)).unwrap()));
        });
    }

    group.finish();
}

fn bench_compute_gaps(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute_gaps");
    let mut builder = CodeBuilder::new();

    for width in [8, 12, 16] {
        let code = builder.build_canonical(width).unwrap();
        group.throughput(Throughput::Elements(1 << width));
        group.bench_with_input(BenchmarkId::from_parameter(width), &code, |b, code| {
            b.iter(|| black_box(compute_gaps(black_box(code)).unwrap()));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_build_canonical,
    bench_build_from_parameters,
    bench_compute_gaps
);
criterion_main!(benches);
