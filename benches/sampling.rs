use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use fastdiscrete::{AliasTable, CumulativeSampler, IndexSampler};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

const SIZES: [usize; 5] = [2, 8, 64, 1024, 65536];

fn gen_weights(n: usize) -> Vec<f64> {
    let mut rng = Pcg32::seed_from_u64(777);
    (0..n).map(|_| 0.1 + rng.random::<f64>()).collect()
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");
    for &n in &SIZES {
        let weights = gen_weights(n);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("alias_n={n}"), |b| {
            b.iter(|| black_box(AliasTable::new(black_box(&weights))).unwrap());
        });
        group.bench_function(format!("cumulative_n={n}"), |b| {
            b.iter(|| black_box(CumulativeSampler::new(black_box(&weights))).unwrap());
        });
    }
    group.finish();
}

fn draw_batch<S: IndexSampler>(sampler: &S, rng: &mut Pcg32, draws: usize) -> usize {
    let mut s = 0usize;
    for _ in 0..draws {
        s ^= sampler.sample_index(rng).unwrap_or(0);
    }
    s
}

fn bench_sample(c: &mut Criterion) {
    let mut group = c.benchmark_group("sample");
    const DRAWS_PER_ITER: usize = 1024;

    for &n in &SIZES {
        let weights = gen_weights(n);
        let alias = AliasTable::new(&weights).unwrap();
        let cumulative = CumulativeSampler::new(&weights).unwrap();
        group.throughput(Throughput::Elements(DRAWS_PER_ITER as u64));

        group.bench_function(format!("alias_n={n}"), |b| {
            b.iter_batched_ref(
                || Pcg32::seed_from_u64(999),
                |rng| black_box(draw_batch(&alias, rng, DRAWS_PER_ITER)),
                BatchSize::SmallInput,
            );
        });

        group.bench_function(format!("cumulative_n={n}"), |b| {
            b.iter_batched_ref(
                || Pcg32::seed_from_u64(1001),
                |rng| black_box(draw_batch(&cumulative, rng, DRAWS_PER_ITER)),
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(sampling, bench_build, bench_sample);
criterion_main!(sampling);
