//! Core sorted-pair Merkle tree implementation

use std::fmt::Display;

use sha3::Keccak256;

use crate::{
    combine_sorted,
    leaf::{Entry, Leaf},
    proof::Proof,
    Hasher, TreeError,
};

/// Layers above this many digests are combined across worker threads.
#[cfg(feature = "multi-thread")]
const PARALLEL_CUTOFF: usize = 2048;

/// The common allowlist deployment: 20-byte addresses hashed with Keccak256.
pub type AllowlistTree = MerkleTree<20, 32, Keccak256>;

/// Sorted-pair Merkle tree over a fixed, ordered set of entries.
///
/// The tree is built once from the complete entry list and is immutable
/// afterwards; changing, adding or removing an entry means rebuilding from
/// scratch, since every index binding would otherwise silently shift. All layers
/// are retained so proofs can be generated for any leaf.
///
/// Sibling digests are combined in canonical sorted order and an unpaired
/// trailing digest is carried forward unchanged to the next layer. Any external
/// verifier must apply the same two rules.
///
/// * `ID_SIZE` - fixed width of the identity value in bytes.
/// * `HASH_SIZE` - size of the hash digest in bytes.
/// * `H` - Hasher that will be used to hash nodes.
#[derive(Debug, Clone)]
pub struct MerkleTree<const ID_SIZE: usize, const HASH_SIZE: usize, H: Hasher<HASH_SIZE> + Clone> {
    leaves: Vec<Leaf<ID_SIZE, HASH_SIZE, H>>,
    layers: Vec<Vec<[u8; HASH_SIZE]>>,
}

impl<const ID_SIZE: usize, const HASH_SIZE: usize, H: Hasher<HASH_SIZE> + Clone>
    MerkleTree<ID_SIZE, HASH_SIZE, H>
{
    /// Builds the tree from the complete, ordered entry list.
    ///
    /// Level 0 holds the leaf digests in input order; each further level combines
    /// adjacent pairs with [`combine_sorted`] until a single digest remains. A
    /// width mismatch in any entry aborts the whole build: a partially encoded
    /// tree would commit to a different set than the caller supplied.
    pub fn build(entries: Vec<Entry>) -> Result<Self, TreeError> {
        if entries.is_empty() {
            return Err(TreeError::EmptyLeaves);
        }
        let leaves = entries
            .into_iter()
            .map(Leaf::<ID_SIZE, HASH_SIZE, H>::new)
            .collect::<Result<Vec<_>, _>>()?;
        let mut layers = vec![leaves.iter().map(|leaf| leaf.hash()).collect::<Vec<_>>()];
        while layers[layers.len() - 1].len() > 1 {
            let next = Self::combine_layer(&layers[layers.len() - 1]);
            layers.push(next);
        }
        Ok(Self { leaves, layers })
    }

    /// Combines one layer into the next: adjacent pairs are hashed in sorted
    /// order, an unpaired trailing digest is carried forward unchanged.
    fn combine_layer(current: &[[u8; HASH_SIZE]]) -> Vec<[u8; HASH_SIZE]> {
        #[cfg(feature = "multi-thread")]
        if current.len() >= PARALLEL_CUTOFF {
            return Self::combine_layer_parallel(current);
        }
        current
            .chunks(2)
            .map(|pair| match pair {
                [left, right] => combine_sorted::<HASH_SIZE, H>(left, right),
                [odd] => *odd,
                _ => unreachable!("chunks(2) yields one or two digests"),
            })
            .collect()
    }

    /// Fork-join combination of one layer: pair ranges are hashed on worker
    /// threads and stitched back together in order. The hash function is
    /// stateless, so the output is byte-identical to the serial path; layers are
    /// still combined strictly bottom-up.
    #[cfg(feature = "multi-thread")]
    fn combine_layer_parallel(current: &[[u8; HASH_SIZE]]) -> Vec<[u8; HASH_SIZE]> {
        let pair_count = current.len().div_ceil(2);
        let workers = std::thread::available_parallelism()
            .map(usize::from)
            .unwrap_or(1)
            .min(pair_count);
        let per_worker = pair_count.div_ceil(workers);
        std::thread::scope(|scope| {
            let handles = (0..workers)
                .map(|worker| {
                    let start = worker * per_worker;
                    let end = pair_count.min(start + per_worker);
                    scope.spawn(move || {
                        (start..end)
                            .map(|pair| match current.get(2 * pair + 1) {
                                Some(right) => {
                                    combine_sorted::<HASH_SIZE, H>(&current[2 * pair], right)
                                }
                                None => current[2 * pair],
                            })
                            .collect::<Vec<_>>()
                    })
                })
                .collect::<Vec<_>>();
            handles
                .into_iter()
                .flat_map(|handle| handle.join().expect("layer worker panicked"))
                .collect()
        })
    }

    /// Root digest of the tree, the published commitment.
    pub fn root(&self) -> [u8; HASH_SIZE] {
        // build never returns a tree whose top layer is not a single digest
        self.layers[self.layers.len() - 1][0]
    }

    /// Root rendered as a `0x`-prefixed hex string.
    pub fn root_hex(&self) -> String {
        format!("0x{}", hex::encode(self.root()))
    }

    /// Number of layers, leaf level included. A single-entry tree has height 1.
    pub fn height(&self) -> usize {
        self.layers.len()
    }

    /// All layers, level 0 (leaf digests) first.
    pub fn layers(&self) -> &[Vec<[u8; HASH_SIZE]>] {
        &self.layers
    }

    /// One layer's digests, or `None` past the root level.
    pub fn layer(&self, level: usize) -> Option<&[[u8; HASH_SIZE]]> {
        self.layers.get(level).map(Vec::as_slice)
    }

    /// The leaves in entry order.
    pub fn leaves(&self) -> &[Leaf<ID_SIZE, HASH_SIZE, H>] {
        &self.leaves
    }

    pub fn leaf_count(&self) -> usize {
        self.leaves.len()
    }

    /// Collects the sibling digests needed to recompute the root from the leaf at
    /// `leaf_index`.
    ///
    /// At each level the sibling is the other half of the pair (`position ^ 1`);
    /// when the node is the carried-forward odd node there is no sibling and the
    /// level contributes nothing, matching the verifier's fold.
    pub fn proof_of_index(&self, leaf_index: usize) -> Result<Proof<HASH_SIZE, H>, TreeError> {
        let len = self.leaf_count();
        if leaf_index >= len {
            return Err(TreeError::LeafIndexOutOfRange {
                index: leaf_index,
                len,
            });
        }
        let mut nodes = Vec::with_capacity(self.height().saturating_sub(1));
        let mut position = leaf_index;
        for layer in &self.layers[..self.layers.len() - 1] {
            let sibling = position ^ 1;
            if let Some(digest) = layer.get(sibling) {
                nodes.push(*digest);
            }
            position /= 2;
        }
        Ok(Proof::new(nodes))
    }

    /// Like [`MerkleTree::proof_of_index`], addressed by leaf digest. The first
    /// matching position in level 0 wins; entries that share a digest are exact
    /// duplicates and verify against either position's proof.
    pub fn proof_of_leaf(
        &self,
        leaf_hash: &[u8; HASH_SIZE],
    ) -> Result<Proof<HASH_SIZE, H>, TreeError> {
        let position = self.layers[0]
            .iter()
            .position(|digest| digest == leaf_hash)
            .ok_or(TreeError::LeafNotFound)?;
        self.proof_of_index(position)
    }
}

impl<const ID_SIZE: usize, const HASH_SIZE: usize, H: Hasher<HASH_SIZE> + Clone> Display
    for MerkleTree<ID_SIZE, HASH_SIZE, H>
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (level, layer) in self.layers.iter().enumerate() {
            writeln!(f, "level {}:", level)?;
            for digest in layer {
                writeln!(f, "  {}", hex::encode(digest))?;
            }
        }
        Ok(())
    }
}
