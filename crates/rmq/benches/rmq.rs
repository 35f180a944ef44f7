use bench::apply_large_runtime_config;
use bench::apply_medium_runtime_config;
use bench::apply_small_runtime_config;
use bench::default_rng;
use bench::random_values;
use bench::random_walk;
use criterion::BenchmarkGroup;
use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::criterion_group;
use criterion::criterion_main;
use criterion::measurement::Measurement;
use rand::Rng;
use rmq::FischerHeunRmq;
use rmq::PlusMinusOneRmq;
use rmq::SparseTableRmq;
use rmq::StaticRmq;
use rmq::TableRmq;
use std::hint::black_box;

const SIZES: [usize; 4] = [1_024, 4_096, 16_384, 65_536];
const TABLE_MAX_SIZE: usize = 4_096;

#[derive(Clone, Copy, Debug)]
enum Input {
    Random,
    Walk,
}

impl Input {
    fn label(self) -> &'static str {
        match self {
            Self::Random => "random",
            Self::Walk => "walk",
        }
    }
}

fn apply_runtime_config_for_size<M: Measurement>(group: &mut BenchmarkGroup<'_, M>, size: usize) {
    if size <= 4_096 {
        apply_small_runtime_config(group);
    } else if size <= 16_384 {
        apply_medium_runtime_config(group);
    } else {
        apply_large_runtime_config(group);
    }
}

fn generate_queries<R: Rng + ?Sized>(rng: &mut R, n: usize, q: usize) -> Vec<(usize, usize)> {
    let mut queries = Vec::with_capacity(q);
    for _ in 0..q {
        let l = rng.random_range(0..n);
        let r = rng.random_range(l..n);
        queries.push((l, r));
    }
    queries
}

fn bench_impl<M, R>(
    group: &mut BenchmarkGroup<'_, M>,
    name: &str,
    size: usize,
    values: &[i64],
    queries: &[(usize, usize)],
) where
    M: Measurement,
    R: StaticRmq<i64>,
{
    group.bench_function(BenchmarkId::new(name, size), |bencher| {
        bencher.iter(|| {
            let rmq = R::build(black_box(values)).unwrap();
            let mut acc = 0_usize;
            for &(l, r) in queries {
                acc ^= rmq.argmin_assume_valid(black_box(l), black_box(r));
            }
            black_box(acc);
        })
    });
}

fn bench_rmq(c: &mut Criterion) {
    let mut rng = default_rng();

    for input in [Input::Random, Input::Walk] {
        let mut group = c.benchmark_group(format!("rmq/input/{}", input.label()));

        for &size in &SIZES {
            apply_runtime_config_for_size(&mut group, size);
            let values = match input {
                Input::Random => random_values(&mut rng, size),
                Input::Walk => random_walk(&mut rng, size),
            };
            let queries = generate_queries(&mut rng, size, 4 * size);

            if size <= TABLE_MAX_SIZE {
                bench_impl::<_, TableRmq<i64>>(&mut group, "table", size, &values, &queries);
            }
            bench_impl::<_, SparseTableRmq<i64>>(&mut group, "sparse", size, &values, &queries);
            bench_impl::<_, FischerHeunRmq<i64>>(&mut group, "fischer_heun", size, &values, &queries);
            if let Input::Walk = input {
                bench_impl::<_, PlusMinusOneRmq<i64>>(&mut group, "plus_minus_one", size, &values, &queries);
            }
        }

        group.finish();
    }
}

criterion_group!(benches, bench_rmq);
criterion_main!(benches);
