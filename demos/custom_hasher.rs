//! Example of implementing a custom hasher for the sorted-pair Merkle tree
//!
//! This example demonstrates:
//! - Creating a custom hasher implementation
//! - Using it with the tree
//! - Comparing roots against the stock SHA256 hasher

use sha2::{Digest, Sha256};
use spmt::{Entry, Hasher, MerkleTree};

// Custom hasher that uses SHA256 but adds a prefix to the input
#[derive(Clone)]
struct PrefixedSha256;

impl Hasher<32> for PrefixedSha256 {
    fn hash(data: &[u8]) -> [u8; 32] {
        let mut hasher = Sha256::new();
        // Add a custom prefix to the input
        hasher.update(b"custom_prefix:");
        hasher.update(data);
        hasher.finalize().into()
    }
}

fn main() {
    let entries: Vec<Entry> = (0..4)
        .map(|index| Entry::new(vec![index as u8; 20], index))
        .collect();

    // Build a tree with our custom hasher
    let tree = MerkleTree::<20, 32, PrefixedSha256>::build(entries.clone()).unwrap();
    println!("Root hash with custom hasher: {}", tree.root_hex());

    // Compare with standard SHA256
    let standard_tree = MerkleTree::<20, 32, Sha256>::build(entries).unwrap();
    println!("Root hash with standard SHA256: {}", standard_tree.root_hex());

    // Note that the hashes are different due to our custom prefix
    println!("\nThe hashes are different because our custom hasher adds a prefix to the input.");
}
