use bench::apply_large_runtime_config;
use bench::apply_medium_runtime_config;
use bench::apply_small_runtime_config;
use bench::caterpillar_parents;
use bench::default_rng;
use bench::random_parents;
use criterion::BenchmarkGroup;
use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::criterion_group;
use criterion::criterion_main;
use criterion::measurement::Measurement;
use level_ancestor::LevelAncestor;
use level_ancestor::MacroMicroLa;
use level_ancestor::SparseLa;
use level_ancestor::TableLa;
use rand::Rng;
use rooted_tree::Tree;
use std::hint::black_box;

const SIZES: [usize; 3] = [4_096, 65_536, 262_144];
const TABLE_MAX_SIZE: usize = 4_096;

#[derive(Clone, Copy, Debug)]
enum Shape {
    Random,
    Caterpillar,
}

impl Shape {
    fn label(self) -> &'static str {
        match self {
            Self::Random => "random",
            Self::Caterpillar => "caterpillar",
        }
    }
}

fn apply_runtime_config_for_size<M: Measurement>(group: &mut BenchmarkGroup<'_, M>, size: usize) {
    if size <= 4_096 {
        apply_small_runtime_config(group);
    } else if size <= 65_536 {
        apply_medium_runtime_config(group);
    } else {
        apply_large_runtime_config(group);
    }
}

fn generate_queries<R: Rng + ?Sized>(rng: &mut R, tree: &Tree<usize>, q: usize) -> Vec<(usize, usize)> {
    let snapshot = tree.snapshot().unwrap();
    (0..q)
        .map(|_| {
            let v = rng.random_range(0..snapshot.len());
            (v, rng.random_range(0..=snapshot.depth(v)))
        })
        .collect()
}

fn bench_impl<M, L>(
    group: &mut BenchmarkGroup<'_, M>,
    name: &str,
    size: usize,
    tree: &Tree<usize>,
    queries: &[(usize, usize)],
) where
    M: Measurement,
    L: LevelAncestor,
{
    group.bench_function(BenchmarkId::new(name, size), |bencher| {
        bencher.iter(|| {
            let la = L::build(black_box(tree)).unwrap();
            let mut acc = 0_usize;
            for &(v, k) in queries {
                acc ^= la.ancestor_index(black_box(v), black_box(k)).unwrap_or(0);
            }
            black_box(acc);
        })
    });
}

fn bench_level_ancestor(c: &mut Criterion) {
    let mut rng = default_rng();

    for shape in [Shape::Random, Shape::Caterpillar] {
        let mut group = c.benchmark_group(format!("level_ancestor/shape/{}", shape.label()));

        for &size in &SIZES {
            apply_runtime_config_for_size(&mut group, size);
            let parents = match shape {
                Shape::Random => random_parents(&mut rng, size),
                Shape::Caterpillar => caterpillar_parents(&mut rng, size),
            };
            let tree = Tree::from_parents(&parents).unwrap();
            let queries = generate_queries(&mut rng, &tree, 4 * size);

            if size <= TABLE_MAX_SIZE {
                bench_impl::<_, TableLa>(&mut group, "table", size, &tree, &queries);
            }
            bench_impl::<_, SparseLa>(&mut group, "sparse", size, &tree, &queries);
            bench_impl::<_, MacroMicroLa>(&mut group, "macro_micro", size, &tree, &queries);
        }

        group.finish();
    }
}

criterion_group!(benches, bench_level_ancestor);
criterion_main!(benches);
