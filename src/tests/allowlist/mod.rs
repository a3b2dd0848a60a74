//! JSON-driven allowlist scenario tests
//!
//! Vector files under `testdata/` declare the entry list, the expected root and
//! the expected proof for every entry; the digests were computed with an
//! independent keccak-256 implementation.

mod types;

use std::fs;
use std::path::PathBuf;

use crate::tests::allowlist::types::{AllowlistVectors, ErrorVectors};
use crate::{verify_inclusion_proof, AllowlistTree, TreeError};
use sha3::Keccak256;

fn run_allowlist_vector(vectors: &AllowlistVectors) {
    println!("Running test case: {}", vectors.comment);
    assert_eq!(vectors.identity_size, 20);

    let entries = vectors
        .entries
        .iter()
        .map(|entry| entry.to_entry().unwrap())
        .collect::<Vec<_>>();
    let tree = AllowlistTree::build(entries).unwrap();

    assert_eq!(tree.root_hex(), vectors.root);

    for proof_case in &vectors.inclusion_proofs {
        let leaf_hash = proof_case.leaf_as_bytes().unwrap();
        assert_eq!(tree.leaves()[proof_case.index].hash(), leaf_hash);

        // generated proof must match the declared siblings exactly
        let generated = tree.proof_of_index(proof_case.index).unwrap();
        assert_eq!(generated.to_hex(), proof_case.nodes);

        // and the declared proof must verify standalone, without the tree
        let declared = proof_case.to_proof().unwrap();
        assert!(declared.verify(leaf_hash, tree.root()));
        assert!(verify_inclusion_proof::<32, Keccak256>(
            leaf_hash,
            declared.nodes(),
            tree.root()
        ));
    }
}

fn run_error_vector(vectors: &ErrorVectors) {
    for error_case in &vectors.error_cases {
        println!("Running error test case: {}", error_case.comment);
        let entries = error_case
            .entries
            .iter()
            .map(|entry| entry.to_entry().unwrap())
            .collect::<Vec<_>>();
        let expected_empty = entries.is_empty();
        match AllowlistTree::build(entries).unwrap_err() {
            TreeError::EmptyLeaves => assert!(expected_empty),
            TreeError::InvalidIdentityLength { expected, .. } => assert_eq!(expected, 20),
            err => panic!("unexpected build error: {}", err),
        }
    }
}

#[test]
fn test_allowlist_tree_proofs() {
    let path = PathBuf::from("src/tests/allowlist/testdata/allowlist_tree_proofs.json");
    let json = fs::read_to_string(&path).unwrap();
    let vectors = serde_json::from_str::<AllowlistVectors>(&json).unwrap();
    run_allowlist_vector(&vectors);
}

#[test]
fn test_allowlist_tree_error_cases() {
    let path = PathBuf::from("src/tests/allowlist/testdata/allowlist_tree_error_cases.json");
    let json = fs::read_to_string(&path).unwrap();
    let vectors = serde_json::from_str::<ErrorVectors>(&json).unwrap();
    run_error_vector(&vectors);
}
