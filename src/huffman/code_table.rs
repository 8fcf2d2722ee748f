use crate::frequency::FrequencyTable;
use crate::tree::{HuffmanTree, Node};
use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;

/// Code assigned to the only symbol of a one-symbol alphabet. A zero length code could not be
/// told apart on the wire, so the lone symbol gets a single `0` instead.
pub const SINGLE_SYMBOL_CODE: &str = "0";

/// Symbol to code mapping derived from a [`HuffmanTree`].
///
/// Entries keep the order in which the traversal reached the leaves, left subtree first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTable {
    entries: Vec<(char, String)>,
    /// Index into `entries`, by symbol
    lookup: BTreeMap<char, usize>,
}

impl CodeTable {
    /// Walk the tree, appending `0` when descending left and `1` when descending right.
    pub fn from_tree(tree: &HuffmanTree) -> CodeTable {
        let entries = match tree.root() {
            Node::Leaf { symbol, .. } => alloc::vec![(*symbol, String::from(SINGLE_SYMBOL_CODE))],
            root => {
                let mut entries = Vec::new();
                let mut stack = alloc::vec![(root, String::new())];
                while let Some((node, code)) = stack.pop() {
                    match node {
                        Node::Leaf { symbol, .. } => entries.push((*symbol, code)),
                        Node::Internal { left, right, .. } => {
                            let mut right_code = code.clone();
                            right_code.push('1');
                            let mut left_code = code;
                            left_code.push('0');
                            stack.push((&**right, right_code));
                            stack.push((&**left, left_code));
                        }
                    }
                }
                entries
            }
        };

        let lookup = entries
            .iter()
            .enumerate()
            .map(|(idx, (symbol, _))| (*symbol, idx))
            .collect();
        CodeTable { entries, lookup }
    }

    pub fn get(&self, symbol: char) -> Option<&str> {
        self.lookup
            .get(&symbol)
            .map(|&idx| self.entries[idx].1.as_str())
    }

    pub fn contains(&self, symbol: char) -> bool {
        self.lookup.contains_key(&symbol)
    }

    /// `(symbol, code)` pairs in traversal order.
    pub fn iter(&self) -> impl Iterator<Item = (char, &str)> + '_ {
        self.entries
            .iter()
            .map(|(symbol, code)| (*symbol, code.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn max_code_length(&self) -> usize {
        self.entries
            .iter()
            .map(|(_, code)| code.len())
            .max()
            .unwrap_or(0)
    }

    /// Sum of `frequency * code length` over the symbols of `frequencies` that have a code.
    pub fn weighted_length(&self, frequencies: &FrequencyTable) -> u64 {
        frequencies
            .iter()
            .filter_map(|(symbol, count)| {
                let bits = self.get(symbol)?.len() as u64;
                Some(count.saturating_mul(bits))
            })
            .fold(0u64, u64::saturating_add)
    }

    /// Expected code length in bits per symbol under `frequencies`.
    pub fn average_length(&self, frequencies: &FrequencyTable) -> f64 {
        match frequencies.total() {
            Some(total) if total > 0 => self.weighted_length(frequencies) as f64 / total as f64,
            _ => 0.0,
        }
    }
}
