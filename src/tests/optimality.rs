use super::{build, random_frequencies, rng};
use crate::frequency::FrequencyTable;
use crate::huffman::CodeTable;
use alloc::vec;
use alloc::vec::Vec;

/// Smallest weighted length over every assignment of code lengths in `1..frequencies.len()`
/// that satisfies the Kraft inequality, which is exactly the set of lengths some prefix code
/// can have.
fn best_prefix_code_length(frequencies: &[u64]) -> u64 {
    let n = frequencies.len();
    let max_len = (n - 1).max(1) as u32;
    let mut lengths = vec![1u32; n];
    let mut best = u64::MAX;
    loop {
        let kraft: u64 = lengths.iter().map(|&l| 1u64 << (max_len - l)).sum();
        if kraft <= 1u64 << max_len {
            let weighted = frequencies
                .iter()
                .zip(&lengths)
                .map(|(&f, &l)| f * u64::from(l))
                .sum();
            best = best.min(weighted);
        }

        // next assignment, odometer style
        let mut idx = 0;
        loop {
            if idx == n {
                return best;
            }
            if lengths[idx] < max_len {
                lengths[idx] += 1;
                break;
            }
            lengths[idx] = 1;
            idx += 1;
        }
    }
}

#[test]
fn classic_example_is_optimal() {
    let pairs = [
        ('A', 5),
        ('B', 9),
        ('C', 12),
        ('D', 13),
        ('E', 16),
        ('F', 45),
    ];
    let frequencies = FrequencyTable::from_pairs(pairs);
    let codes = CodeTable::from_tree(&build(&frequencies));

    assert_eq!(codes.weighted_length(&frequencies), 224);
    assert_eq!(codes.average_length(&frequencies), 2.24);

    let counts: Vec<u64> = pairs.iter().map(|&(_, count)| count).collect();
    assert_eq!(best_prefix_code_length(&counts), 224);
    // a fixed three bit code would need 300
    assert!(codes.weighted_length(&frequencies) < 300);
}

#[test]
fn literal_example_is_optimal() {
    let frequencies = FrequencyTable::from_pairs([('X', 3), ('Y', 1), ('Z', 2)]);
    let codes = CodeTable::from_tree(&build(&frequencies));
    assert_eq!(
        codes.weighted_length(&frequencies),
        best_prefix_code_length(&[3, 1, 2])
    );
}

#[test]
fn random_small_alphabets_are_optimal() {
    for seed in 0..60 {
        let mut rng = rng(seed);
        let mut frequencies = random_frequencies(&mut rng, 2);
        // keep the brute force search small
        let keep: Vec<_> = frequencies.iter().take(6).collect();
        frequencies = FrequencyTable::from_pairs(keep);
        if frequencies.len() < 2 {
            continue;
        }

        let codes = CodeTable::from_tree(&build(&frequencies));
        let counts: Vec<u64> = frequencies.iter().map(|(_, count)| count).collect();
        assert_eq!(
            codes.weighted_length(&frequencies),
            best_prefix_code_length(&counts),
            "seed {seed}"
        );
    }
}
