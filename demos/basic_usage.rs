//! Basic example of building an allowlist commitment
//!
//! This example demonstrates:
//! - Building a tree from an ordered address list
//! - Getting the root hash
//! - Generating and verifying inclusion proofs

use spmt::{AllowlistTree, Entry};

fn main() {
    // Ordered list of claimable addresses; the position in the list is the
    // assigned index (e.g. a token or ticket number)
    let addresses = [
        "0x5B38Da6a701c568545dCfcB03FcB875f56beddC4",
        "0xAb8483F64d9C6d1EcF9b849Ae677dD3315835cb2",
        "0x4B20993Bc481177ec7E8f571ceCaE8A9e22C02db",
        "0x78731D3Ca6b7E34aC0F824c42a7cC18A495cabaB",
        "0x17F6AD8Ef982297579C203069C1DbfFE4348c372",
    ];

    let entries = addresses
        .iter()
        .enumerate()
        .map(|(index, address)| Entry::from_hex(address, index as u64).unwrap())
        .collect();

    let tree = AllowlistTree::build(entries).unwrap();

    // The root is the short commitment published on-chain
    println!("Allowlist root: {}", tree.root_hex());
    println!("Tree:\n{}", tree);

    // A claiming client is handed the hex proof for its entry
    let proof = tree.proof_of_index(1).unwrap();
    println!("Proof for entry 1: {:?}", proof.to_hex());

    // The verifier only needs the leaf digest, the proof and the root
    let leaf_hash = tree.leaves()[1].hash();
    println!("Proof verification: {}", proof.verify(leaf_hash, tree.root()));
}
