//! Inclusion proofs: the ordered sibling digests that let a verifier recompute the
//! root from a single leaf digest.
//!
//! Verification is fully independent of the tree that produced the proof. A party
//! holding only the leaf digest, the proof and the expected root (for instance a
//! verifying contract in another trust domain) can check membership, as long as it
//! applies the same sorted-pair and odd-node carry rules as the builder.

use std::marker::PhantomData;

use crate::{combine_sorted, Hasher, TreeError};

/// Recomputes the root from a leaf digest and a sequence of sibling digests, and
/// compares it against the expected root.
///
/// Because siblings are combined in sorted order, no left/right direction
/// information is needed. A mismatch is an ordinary `false`, never an error.
pub fn verify_inclusion_proof<const HASH_SIZE: usize, H: Hasher<HASH_SIZE>>(
    leaf_hash: [u8; HASH_SIZE],
    nodes: &[[u8; HASH_SIZE]],
    expected_root: [u8; HASH_SIZE],
) -> bool {
    nodes
        .iter()
        .fold(leaf_hash, |current, sibling| {
            combine_sorted::<HASH_SIZE, H>(&current, sibling)
        })
        == expected_root
}

/// An inclusion proof for a single leaf.
///
/// Nodes are ordered from the leaf level upwards. Levels where the proven node was
/// the carried-forward odd node contribute no digest, so a proof can be shorter
/// than the tree height minus one.
#[derive(Debug, Clone)]
pub struct Proof<const HASH_SIZE: usize, H: Hasher<HASH_SIZE> + Clone> {
    nodes: Vec<[u8; HASH_SIZE]>,
    _phantom: PhantomData<H>,
}

impl<const HASH_SIZE: usize, H: Hasher<HASH_SIZE> + Clone> Proof<HASH_SIZE, H> {
    /// Creates a new proof from a list of sibling digests.
    pub fn new(nodes: Vec<[u8; HASH_SIZE]>) -> Self {
        Self {
            nodes,
            _phantom: PhantomData,
        }
    }

    /// Returns the sibling digests in the proof.
    pub fn nodes(&self) -> &[[u8; HASH_SIZE]] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Recomputes the root this proof leads to from the given leaf digest.
    pub fn compute_root(&self, leaf_hash: [u8; HASH_SIZE]) -> [u8; HASH_SIZE] {
        self.nodes.iter().fold(leaf_hash, |current, sibling| {
            combine_sorted::<HASH_SIZE, H>(&current, sibling)
        })
    }

    /// Verifies this proof for a leaf digest against an expected root.
    pub fn verify(&self, leaf_hash: [u8; HASH_SIZE], expected_root: [u8; HASH_SIZE]) -> bool {
        self.compute_root(leaf_hash) == expected_root
    }

    /// Renders the proof as `0x`-prefixed hex digests, the transport format handed
    /// to claiming clients.
    pub fn to_hex(&self) -> Vec<String> {
        self.nodes
            .iter()
            .map(|node| format!("0x{}", hex::encode(node)))
            .collect()
    }

    /// Parses a proof from hex digests, with or without `0x` prefixes.
    pub fn from_hex<S: AsRef<str>>(nodes: &[S]) -> Result<Self, TreeError> {
        nodes
            .iter()
            .map(|node| {
                let raw = node.as_ref();
                let raw = raw
                    .strip_prefix("0x")
                    .or_else(|| raw.strip_prefix("0X"))
                    .unwrap_or(raw);
                let bytes = hex::decode(raw)?;
                let got = bytes.len();
                <[u8; HASH_SIZE]>::try_from(bytes).map_err(|_| TreeError::InvalidDigestLength {
                    expected: HASH_SIZE,
                    got,
                })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self::new)
    }

    /// Encodes the proof into a byte vector: a `u16` big-endian node count followed
    /// by the raw digests.
    pub fn encode(&self) -> Vec<u8> {
        let mut encoded = Vec::with_capacity(2 + self.nodes.len() * HASH_SIZE);
        encoded.extend_from_slice(&(self.nodes.len() as u16).to_be_bytes());
        for node in &self.nodes {
            encoded.extend_from_slice(node);
        }
        encoded
    }

    /// Decodes a proof from a byte vector produced by [`Proof::encode`].
    pub fn decode(data: &[u8]) -> Result<Self, TreeError> {
        if data.len() < 2 {
            return Err(TreeError::MalformedProof {
                expected: 2,
                got: data.len(),
            });
        }
        let count = u16::from_be_bytes([data[0], data[1]]) as usize;
        let expected = 2 + count * HASH_SIZE;
        if data.len() != expected {
            return Err(TreeError::MalformedProof {
                expected,
                got: data.len(),
            });
        }
        let mut nodes = Vec::with_capacity(count);
        for chunk in data[2..].chunks_exact(HASH_SIZE) {
            let mut digest = [0u8; HASH_SIZE];
            digest.copy_from_slice(chunk);
            nodes.push(digest);
        }
        Ok(Self::new(nodes))
    }
}
