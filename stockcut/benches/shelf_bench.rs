use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::prelude::SmallRng;
use rand::{Rng, SeedableRng};
use stockcut::entities::{Component, Instance, Sheet};
use stockcut::shelf::place_instance;

criterion_main!(benches);
criterion_group!(benches, shelf_place_bench);

const N_SHEETS: usize = 20;

/// Random instance with components between 1% and 30% of a standard 2440x1220 sheet
fn create_instance(n_components: usize, rng: &mut impl Rng) -> Instance {
    let sheets = vec![Sheet::new(2440.0, 1220.0, 18.0); N_SHEETS];
    let components = (0..n_components)
        .map(|_| Component::new(rng.random_range(25.0..730.0), rng.random_range(12.0..370.0)))
        .collect();
    Instance::new(sheets, components, 3.0).expect("generated instance should be valid")
}

fn shelf_place_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("shelf_place");
    let mut rng = SmallRng::seed_from_u64(0);
    for n_components in [10, 100, 1_000, 10_000] {
        let instance = create_instance(n_components, &mut rng);
        group.throughput(criterion::Throughput::Elements(n_components as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(n_components),
            &instance,
            |b, instance| b.iter(|| std::hint::black_box(place_instance(instance))),
        );
    }
    group.finish();
}
