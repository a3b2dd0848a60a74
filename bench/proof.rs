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

fn setup_tree(num_entries: usize) -> MerkleTree<20, 32, Sha256> {
    let entries = (0..num_entries)
        .map(|index| Entry::new(generate_random_identity(), index as u64))
        .collect();
    MerkleTree::build(entries).unwrap()
}

fn bench_proof_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("SPMT Proof Generation");

    let tree = setup_tree(1_000);
    group.bench_function("1000 entries", |b| {
        b.iter(|| {
            for index in 0..tree.leaf_count() {
                black_box(tree.proof_of_index(index)).unwrap();
            }
        })
    });

    group.finish();
}

fn bench_proof_verification(c: &mut Criterion) {
    let mut group = c.benchmark_group("SPMT Proof Verification");

    let tree = setup_tree(1_000);
    let proofs: Vec<_> = (0..tree.leaf_count())
        .map(|index| tree.proof_of_index(index).unwrap())
        .collect();
    let root = tree.root();

    group.bench_function("1000 entries", |b| {
        b.iter(|| {
            for (index, proof) in proofs.iter().enumerate() {
                assert!(black_box(proof.verify(tree.leaves()[index].hash(), root)));
            }
        })
    });

    group.finish();
}

criterion_group!(benches, bench_proof_generation, bench_proof_verification);
criterion_main!(benches);
