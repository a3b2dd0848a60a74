use serde::{Deserialize, Serialize};
use sha3::Keccak256;

use crate::{Entry, Proof, TreeError};

/// One entry of the allowlist as declared in a test vector file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TestEntry {
    pub identity: String,
    pub index: u64,
}

impl TestEntry {
    /// Convert to a regular entry
    pub fn to_entry(&self) -> Result<Entry, TreeError> {
        Entry::from_hex(&self.identity, self.index)
    }
}

/// An expected inclusion proof for one entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TestProof {
    pub index: usize,
    pub leaf: String,
    pub nodes: Vec<String>,
}

impl TestProof {
    /// Get the expected leaf digest as bytes
    pub fn leaf_as_bytes(&self) -> Result<[u8; 32], TreeError> {
        let raw = self.leaf.strip_prefix("0x").unwrap_or(&self.leaf);
        let bytes = hex::decode(raw)?;
        let got = bytes.len();
        bytes
            .try_into()
            .map_err(|_| TreeError::InvalidDigestLength { expected: 32, got })
    }

    /// Convert the expected sibling digests to a proof
    pub fn to_proof(&self) -> Result<Proof<32, Keccak256>, TreeError> {
        Proof::from_hex(&self.nodes)
    }
}

/// A full valid-scenario vector: entries, expected root, expected proofs
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AllowlistVectors {
    pub comment: String,
    pub identity_size: usize,
    pub entries: Vec<TestEntry>,
    pub root: String,
    pub inclusion_proofs: Vec<TestProof>,
}

/// One build that is expected to fail
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorCase {
    pub comment: String,
    pub entries: Vec<TestEntry>,
}

/// A file of builds that are expected to fail
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorVectors {
    pub comment: String,
    pub identity_size: usize,
    pub error_cases: Vec<ErrorCase>,
}
