use cesium_skiplist::{
    RngSource,
    SkipList,
};
use criterion::{
    black_box,
    BatchSize,
    BenchmarkId,
    Criterion,
};
use rand::{
    rngs::SmallRng,
    Rng,
    SeedableRng,
};

const SIZES: [usize; 3] = [1_000, 10_000, 100_000];

fn filled(size: usize) -> SkipList<u64, u64> {
    let mut rng = SmallRng::seed_from_u64(0);
    let mut list = SkipList::new(RngSource::seeded(1), 0.5).unwrap();
    for _ in 0..size {
        let key = rng.gen();
        list.insert(key, key);
    }
    list
}

pub fn insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("SkipList::insert");
    for size in SIZES {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter_batched(
                || filled(size),
                |mut list| {
                    list.insert(black_box(u64::MAX / 2), 0);
                    list
                },
                BatchSize::LargeInput,
            )
        });
    }
    group.finish();
}

pub fn search(c: &mut Criterion) {
    let mut group = c.benchmark_group("SkipList::search");
    for size in SIZES {
        let list = filled(size);
        let mut rng = SmallRng::seed_from_u64(2);
        group.bench_with_input(BenchmarkId::from_parameter(size), &list, |b, list| {
            b.iter(|| list.search(black_box(&rng.gen::<u64>())).is_some())
        });
    }
    group.finish();
}
