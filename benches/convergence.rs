#[allow(dead_code)]
mod test_functions;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use twiddle::Twiddle;

fn bench_twiddle_sphere(c: &mut Criterion) {
    let mut group = c.benchmark_group("twiddle_sphere");
    group.sample_size(10);

    for dims in [1, 3, 10] {
        let x0 = vec![-300.0; dims];
        group.bench_with_input(BenchmarkId::new("dims", dims), &x0, |b, x0| {
            b.iter(|| {
                Twiddle::minimize()
                    .optimize(|x: &[f64]| test_functions::sphere(x), x0)
                    .unwrap()
            });
        });
    }
    group.finish();
}

fn bench_twiddle_rosenbrock(c: &mut Criterion) {
    let mut group = c.benchmark_group("twiddle_rosenbrock");
    group.sample_size(10);

    for dims in [2, 5] {
        let x0 = vec![-2.0; dims];
        group.bench_with_input(BenchmarkId::new("dims", dims), &x0, |b, x0| {
            b.iter(|| {
                Twiddle::minimize()
                    .optimize(|x: &[f64]| test_functions::rosenbrock(x), x0)
                    .unwrap()
            });
        });
    }
    group.finish();
}

fn bench_step_factor_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("step_factor_sweep");
    group.sample_size(10);
    let x0 = vec![-300.0, 500.0, -3500.0];

    for factor in [0.05, 0.1, 0.3] {
        group.bench_with_input(
            BenchmarkId::new("factor", format!("{factor}")),
            &factor,
            |b, &factor| {
                let optimizer = Twiddle::builder()
                    .minimize()
                    .step_factor(factor)
                    .build()
                    .unwrap();
                b.iter(|| {
                    optimizer
                        .optimize(|x: &[f64]| test_functions::sphere(x), &x0)
                        .unwrap()
                });
            },
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_twiddle_sphere,
    bench_twiddle_rosenbrock,
    bench_step_factor_sweep
);
criterion_main!(benches);
