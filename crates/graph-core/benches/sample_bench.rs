use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use graph_core::sample;

fn bench_sample(c: &mut Criterion) {
    let mut group = c.benchmark_group("sample");
    for &n in &[1_000usize, 10_000usize, 100_000usize] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            let x_max = n as f64;
            b.iter(|| {
                let _ = black_box(sample("sin(x) * x + 1/x", 1.0, x_max, 1.0));
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_sample);
criterion_main!(benches);
