use criterion::{criterion_group, criterion_main, Criterion};
use incbeta::special::{betainc, betainc_inv};

// ---------------------------------------------------------------------------
// Forward: I_x(a, b)
// ---------------------------------------------------------------------------

fn forward(c: &mut Criterion) {
    let mut g = c.benchmark_group("betainc");

    g.bench_function("small_shapes", |b| {
        b.iter(|| betainc(std::hint::black_box(2.0_f64), 1.0, std::hint::black_box(0.5)))
    });

    g.bench_function("large_shapes", |b| {
        b.iter(|| betainc(std::hint::black_box(1001.0_f64), 1001.0, std::hint::black_box(0.49)))
    });

    g.bench_function("f32", |b| {
        b.iter(|| betainc(std::hint::black_box(2.0_f32), 3.0, std::hint::black_box(0.5)))
    });

    g.finish();
}

// ---------------------------------------------------------------------------
// Inverse
// ---------------------------------------------------------------------------

fn inverse(c: &mut Criterion) {
    let mut g = c.benchmark_group("betainc_inv");

    g.bench_function("median", |b| {
        b.iter(|| betainc_inv(std::hint::black_box(2.0_f64), 1.0, std::hint::black_box(0.5)))
    });

    g.bench_function("upper_tail", |b| {
        b.iter(|| betainc_inv(std::hint::black_box(10.0_f64), 100.0, std::hint::black_box(0.999)))
    });

    g.bench_function("posterior_1001", |b| {
        b.iter(|| betainc_inv(std::hint::black_box(1001.0_f64), 1001.0, std::hint::black_box(0.5)))
    });

    g.finish();
}

// ---------------------------------------------------------------------------
// Thompson step over a handful of arms
// ---------------------------------------------------------------------------

fn thompson(c: &mut Criterion) {
    use incbeta::bandit::{select, Arm, Weighting};
    use rand_xoshiro::rand_core::SeedableRng;

    let mut arms = [Arm::new(); 8];
    for (i, arm) in arms.iter_mut().enumerate() {
        for j in 0..(10 * i) {
            arm.record(j % 3 == 0, 5.0 + i as f64);
        }
    }
    let mut rng = rand_xoshiro::Xoshiro256PlusPlus::seed_from_u64(0);

    c.bench_function("thompson_select_8", |b| {
        b.iter(|| select(std::hint::black_box(&arms), Weighting::RuntimeBiased, &mut rng))
    });
}

criterion_group!(benches, forward, inverse, thompson);
criterion_main!(benches);
