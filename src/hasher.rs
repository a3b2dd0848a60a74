//! Hashing primitives shared by the tree builder, the proof generator and the verifier.
//!
//! Everything that combines two digests goes through [`combine_sorted`] so the
//! sort order cannot drift between construction and verification.

use sha2::{Digest, Sha256};
use sha3::Keccak256;

/// Simple hash trait required to hash the nodes in the tree
///
/// # Type Parameters
/// * `HASH_SIZE` - The size of the hash digest in bytes
pub trait Hasher<const HASH_SIZE: usize> {
    fn hash(data: &[u8]) -> [u8; HASH_SIZE];
}

impl Hasher<32> for Sha256 {
    fn hash(data: &[u8]) -> [u8; 32] {
        let mut hasher = Sha256::new();
        hasher.update(data);
        hasher.finalize().into()
    }
}

impl Hasher<32> for Keccak256 {
    fn hash(data: &[u8]) -> [u8; 32] {
        let mut hasher = Keccak256::new();
        hasher.update(data);
        hasher.finalize().into()
    }
}

/// Combines two sibling digests in canonical order: `hash(min(a, b) ++ max(a, b))`.
///
/// Equal-width byte arrays compare lexicographically, which is the big-endian
/// unsigned order, so `combine_sorted(a, b) == combine_sorted(b, a)`. This is what
/// lets proofs omit left/right direction bits.
pub fn combine_sorted<const HASH_SIZE: usize, H: Hasher<HASH_SIZE>>(
    a: &[u8; HASH_SIZE],
    b: &[u8; HASH_SIZE],
) -> [u8; HASH_SIZE] {
    let (low, high) = if a <= b { (a, b) } else { (b, a) };
    H::hash([low.as_slice(), high.as_slice()].concat().as_slice())
}
