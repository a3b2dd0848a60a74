use std::{fmt::Display, marker::PhantomData};

use crate::{Hasher, TreeError};

/// Width in bytes of the encoded index word, a big-endian `uint256`.
pub const INDEX_WIDTH: usize = 32;

/// One allowlist entry: an identity value bound to its assigned index.
///
/// Entries are supplied in caller order and never re-sorted here. The index is
/// whatever the caller assigned (typically the entry's position in the list) and is
/// part of the leaf preimage, so two identical identities at different indices hash
/// to different leaves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    identity: Vec<u8>,
    index: u64,
}

impl Entry {
    pub fn new(identity: impl Into<Vec<u8>>, index: u64) -> Self {
        Self {
            identity: identity.into(),
            index,
        }
    }

    /// Parses a hex identity, with or without a `0x` prefix.
    pub fn from_hex(identity: &str, index: u64) -> Result<Self, TreeError> {
        let raw = identity
            .strip_prefix("0x")
            .or_else(|| identity.strip_prefix("0X"))
            .unwrap_or(identity);
        Ok(Self::new(hex::decode(raw)?, index))
    }

    /// Returns the identity bytes of this entry.
    pub fn identity(&self) -> &[u8] {
        &self.identity
    }

    /// Returns the assigned index of this entry.
    pub fn index(&self) -> u64 {
        self.index
    }
}

impl Display for Entry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Entry {{ index: {}, identity: 0x{} }}",
            self.index,
            hex::encode(&self.identity)
        )
    }
}

/// A leaf binds one [`Entry`] to its digest. Leaves are the level-0 row of the tree.
///
/// # Type Parameters
/// * `ID_SIZE` - The fixed width of the identity value in bytes
/// * `HASH_SIZE` - The size of the hash digest in bytes
/// * `H` - The hasher implementation used for this leaf
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leaf<const ID_SIZE: usize, const HASH_SIZE: usize, H: Hasher<HASH_SIZE> + Clone> {
    entry: Entry,
    node_hash: [u8; HASH_SIZE],
    _phantom: PhantomData<H>,
}

impl<const ID_SIZE: usize, const HASH_SIZE: usize, H: Hasher<HASH_SIZE> + Clone>
    Leaf<ID_SIZE, HASH_SIZE, H>
{
    /// Creates a new [`Leaf`]. This function performs a hash.
    pub fn new(entry: Entry) -> Result<Self, TreeError> {
        let node_hash = H::hash(&Self::encode(&entry)?);
        Ok(Self {
            entry,
            node_hash,
            _phantom: PhantomData,
        })
    }

    /// Canonical leaf preimage: the identity bytes followed by the index as a
    /// 32-byte big-endian word. Both sides are fixed-width, so the concatenation
    /// is unambiguous.
    pub fn encode(entry: &Entry) -> Result<Vec<u8>, TreeError> {
        if entry.identity().len() != ID_SIZE {
            return Err(TreeError::InvalidIdentityLength {
                expected: ID_SIZE,
                got: entry.identity().len(),
            });
        }
        let mut encoded = Vec::with_capacity(ID_SIZE + INDEX_WIDTH);
        encoded.extend_from_slice(entry.identity());
        encoded.extend_from_slice(&[0u8; INDEX_WIDTH - 8]);
        encoded.extend_from_slice(&entry.index().to_be_bytes());
        Ok(encoded)
    }

    /// Returns the digest of the leaf. NO HASHING IS DONE HERE.
    pub fn hash(&self) -> [u8; HASH_SIZE] {
        self.node_hash
    }

    /// Returns the entry this leaf was built from.
    pub fn entry(&self) -> &Entry {
        &self.entry
    }

    /// Returns the assigned index of the underlying entry.
    pub fn index(&self) -> u64 {
        self.entry.index()
    }

    /// Returns the identity bytes of the underlying entry.
    pub fn identity(&self) -> &[u8] {
        self.entry.identity()
    }
}

impl<const ID_SIZE: usize, const HASH_SIZE: usize, H: Hasher<HASH_SIZE> + Clone> Display
    for Leaf<ID_SIZE, HASH_SIZE, H>
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Leaf {{ index: {}, hash: {}, identity: 0x{} }}",
            self.index(),
            hex::encode(self.hash().as_slice()),
            hex::encode(self.identity())
        )
    }
}
