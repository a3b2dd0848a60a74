use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sha2::Sha256;
use spmt::{Entry, MerkleTree};

pub fn generate_random_identity() -> Vec<u8> {
    let mut identity = Vec::with_capacity(20);
    for _ in 0..20 {
        identity.push(rand::random());
    }
    identity
}

fn setup_entries(num_entries: usize) -> Vec<Entry> {
    (0..num_entries)
        .map(|index| Entry::new(generate_random_identity(), index as u64))
        .collect()
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("SPMT Build");

    for size in [100, 1_000, 10_000] {
        let entries = setup_entries(size);
        group.bench_function(format!("{} entries", size), |b| {
            b.iter(|| {
                black_box(MerkleTree::<20, 32, Sha256>::build(entries.clone())).unwrap();
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_build);
criterion_main!(benches);
