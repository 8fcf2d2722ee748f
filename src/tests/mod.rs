#![cfg(test)]
//! Whole-pipeline checks: every randomly generated table has to produce a full, prefix-free,
//! reproducible and optimal code that round-trips.
mod optimality;

use crate::frequency::FrequencyTable;
use crate::tree::{HuffmanTree, Node};
use alloc::string::String;
use alloc::vec::Vec;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Upper and lower case letters so that case-insensitive ties actually happen
const ALPHABET: &[char] = &[
    'a', 'A', 'b', 'B', 'c', 'C', 'x', 'y', 'Z', 'z', '0', '1', '7', 'é', 'É', 'ß', '世', '界',
];

fn rng(seed: u64) -> SmallRng {
    SmallRng::seed_from_u64(0xDEADBEEF ^ seed)
}

/// Between `min_symbols` and `ALPHABET.len()` distinct symbols with small frequencies, so
/// plenty of them tie.
fn random_frequencies(rng: &mut SmallRng, min_symbols: usize) -> FrequencyTable {
    let symbol_count = rng.gen_range(min_symbols..=ALPHABET.len());
    let mut symbols = ALPHABET.to_vec();
    let mut table = FrequencyTable::new();
    while table.len() < symbol_count {
        let symbol = symbols.swap_remove(rng.gen_range(0..symbols.len()));
        table.insert(symbol, rng.gen_range(1..=12));
    }
    table
}

fn random_text(rng: &mut SmallRng, frequencies: &FrequencyTable) -> String {
    let symbols: Vec<char> = frequencies.iter().map(|(symbol, _)| symbol).collect();
    let len = rng.gen_range(0..200);
    (0..len)
        .map(|_| symbols[rng.gen_range(0..symbols.len())])
        .collect()
}

/// Check the structural invariants of a subtree and return `(leaves, internal nodes)`.
fn check_full_binary(node: &Node) -> (usize, usize) {
    match node {
        Node::Leaf { frequency, .. } => {
            assert!(*frequency > 0);
            (1, 0)
        }
        Node::Internal {
            frequency,
            payload,
            left,
            right,
        } => {
            assert_eq!(*frequency, left.frequency() + right.frequency());
            let mut left_buf = [0u8; 4];
            let mut right_buf = [0u8; 4];
            assert_eq!(
                payload.as_str(),
                alloc::format!(
                    "{}{}",
                    left.payload(&mut left_buf),
                    right.payload(&mut right_buf)
                )
            );
            let (left_leaves, left_internal) = check_full_binary(left);
            let (right_leaves, right_internal) = check_full_binary(right);
            (left_leaves + right_leaves, left_internal + right_internal + 1)
        }
    }
}

fn build(frequencies: &FrequencyTable) -> HuffmanTree {
    HuffmanTree::build(frequencies).unwrap()
}
