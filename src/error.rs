//! Error types for the sorted-pair Merkle tree implementation

use std::error::Error;
use std::fmt::Display;

/// Error type for tree operations
#[derive(Debug, PartialEq, Clone)]
pub enum TreeError {
    /// No entries were supplied to build the tree from
    EmptyLeaves,
    /// An entry's identity does not match the configured fixed width
    InvalidIdentityLength { expected: usize, got: usize },
    /// The requested leaf digest is not part of the tree
    LeafNotFound,
    /// The requested leaf index is past the end of the leaf layer
    LeafIndexOutOfRange { index: usize, len: usize },
    /// A serialized digest does not match the configured digest width
    InvalidDigestLength { expected: usize, got: usize },
    /// A serialized proof's framing does not match its contents
    MalformedProof { expected: usize, got: usize },
    /// Hex decoding error
    Hex(hex::FromHexError),
}

impl Display for TreeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TreeError::EmptyLeaves => write!(f, "No entries to build the tree from"),
            TreeError::InvalidIdentityLength { expected, got } => {
                write!(f, "Identity is {} bytes, expected {}", got, expected)
            }
            TreeError::LeafNotFound => write!(f, "Leaf not found in tree"),
            TreeError::LeafIndexOutOfRange { index, len } => {
                write!(f, "Leaf index {} out of range for {} leaves", index, len)
            }
            TreeError::InvalidDigestLength { expected, got } => {
                write!(f, "Digest is {} bytes, expected {}", got, expected)
            }
            TreeError::MalformedProof { expected, got } => {
                write!(f, "Proof encoding is {} bytes, expected {}", got, expected)
            }
            TreeError::Hex(e) => write!(f, "Hex decoding error: {}", e),
        }
    }
}

impl Error for TreeError {}

impl From<hex::FromHexError> for TreeError {
    fn from(e: hex::FromHexError) -> Self {
        TreeError::Hex(e)
    }
}
