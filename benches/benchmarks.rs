use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use zigzag_skeleton::{compress, distance, recompress, select, Compressed, Sample};

/// Multiplicative random walk starting at 10.0, like a price series
fn random_walk(count: u64) -> Vec<Sample> {
    let mut rng = StdRng::seed_from_u64(10);
    let mut value = 10.0_f64;
    (0..count)
        .map(|i| {
            let step: f64 = rng.random_range(-0.02..0.02);
            value += step.max(-0.999) * value;
            Sample::new(i, (value * 100.0).round() / 100.0)
        })
        .collect()
}

fn bench_compress(c: &mut Criterion) {
    let mut group = c.benchmark_group("compress");

    for count in [1_000u64, 10_000, 100_000] {
        let points = random_walk(count);
        group.throughput(Throughput::Elements(count));
        group.bench_function(format!("{count}_points"), |b| {
            b.iter(|| {
                black_box(compress(
                    black_box(points.iter().copied()),
                    &distance::absolute,
                    Compressed::new(),
                ))
            })
        });
    }
    group.finish();
}

fn bench_recompress(c: &mut Criterion) {
    let state = compress(random_walk(100_000), &distance::absolute, Compressed::new());

    let mut group = c.benchmark_group("recompress");
    group.throughput(Throughput::Elements(state.archive.len() as u64));
    group.bench_function("100000_points", |b| {
        b.iter(|| {
            let mut state = state.clone();
            recompress(&distance::percent, Some(&mut state.skeleton), &mut state.archive);
            black_box(state)
        })
    });
    group.finish();
}

fn bench_select(c: &mut Criterion) {
    let state = compress(random_walk(100_000), &distance::absolute, Compressed::new());
    let deviation = state.skeleton.max_magnitude() / 11.0;

    let mut group = c.benchmark_group("select");
    group.bench_function("100000_points", |b| {
        b.iter(|| {
            black_box(select(
                &state.skeleton,
                &state.archive,
                black_box(deviation),
                Sample::key,
            ))
        })
    });
    group.finish();
}

criterion_group!(benches, bench_compress, bench_recompress, bench_select);
criterion_main!(benches);
