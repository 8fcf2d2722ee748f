//! The Huffman tree and the total order its construction relies on.
//!
//! A tree is full: every internal node has exactly two children, which the [`Node`] enum makes
//! unrepresentable any other way. The merge order is driven by [`compare_nodes`], which sorts by
//! frequency and settles ties with [`tie_break`] on the nodes' payloads.
mod builder;
mod priority_queue;

pub use builder::*;
pub use priority_queue::*;

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use core::cmp::Ordering;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Leaf {
        symbol: char,
        frequency: u64,
    },
    Internal {
        frequency: u64,
        /// The symbols of every leaf below this node, left to right. Only used for ordering
        /// and for labelling the preorder dump.
        payload: String,
        left: Box<Node>,
        right: Box<Node>,
    },
}

impl Node {
    pub fn leaf(symbol: char, frequency: u64) -> Self {
        Node::Leaf { symbol, frequency }
    }

    /// Join two subtrees under a new internal node. `left` is expected to be the one that
    /// ordered first.
    ///
    /// Returns `None` if the combined frequency overflows.
    pub fn merge(left: Node, right: Node) -> Option<Self> {
        let frequency = left.frequency().checked_add(right.frequency())?;
        let mut payload = String::with_capacity(left.payload_len() + right.payload_len());
        left.push_payload(&mut payload);
        right.push_payload(&mut payload);
        Some(Node::Internal {
            frequency,
            payload,
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    pub fn frequency(&self) -> u64 {
        match self {
            Node::Leaf { frequency, .. } => *frequency,
            Node::Internal { frequency, .. } => *frequency,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    /// Left and right child of an internal node, `None` for a leaf.
    pub fn children(&self) -> Option<(&Node, &Node)> {
        match self {
            Node::Leaf { .. } => None,
            Node::Internal { left, right, .. } => Some((left, right)),
        }
    }

    /// The payload as a string slice. Leaves render their symbol into `buf`.
    pub fn payload<'a>(&'a self, buf: &'a mut [u8; 4]) -> &'a str {
        match self {
            Node::Leaf { symbol, .. } => symbol.encode_utf8(buf),
            Node::Internal { payload, .. } => payload,
        }
    }

    fn payload_len(&self) -> usize {
        match self {
            Node::Leaf { symbol, .. } => symbol.len_utf8(),
            Node::Internal { payload, .. } => payload.len(),
        }
    }

    fn push_payload(&self, out: &mut String) {
        match self {
            Node::Leaf { symbol, .. } => out.push(*symbol),
            Node::Internal { payload, .. } => out.push_str(payload),
        }
    }
}

/// The total order used to pick the next two nodes to merge: lower frequency first, then
/// [`tie_break`] on the payloads.
pub fn compare_nodes(a: &Node, b: &Node) -> Ordering {
    a.frequency().cmp(&b.frequency()).then_with(|| {
        let mut buf_a = [0u8; 4];
        let mut buf_b = [0u8; 4];
        tie_break(a.payload(&mut buf_a), b.payload(&mut buf_b))
    })
}

/// Order two payloads of equally frequent nodes.
///
/// Fewer symbols sort first, so a single leaf always precedes a merged group. Payloads with
/// the same number of symbols compare case-insensitively, symbol by symbol. Payloads that only
/// differ in case fall back to plain char order so that the result is still total.
pub fn tie_break(a: &str, b: &str) -> Ordering {
    a.chars()
        .count()
        .cmp(&b.chars().count())
        .then_with(|| {
            a.chars()
                .flat_map(char::to_lowercase)
                .cmp(b.chars().flat_map(char::to_lowercase))
        })
        .then_with(|| a.cmp(b))
}

/// One node of the preorder dump: its label (a symbol, or the combined payload of an internal
/// node) and its frequency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreorderEntry {
    pub label: String,
    pub frequency: u64,
}

/// A built Huffman tree. Immutable once built; share it freely between readers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree {
    root: Node,
}

impl HuffmanTree {
    pub fn root(&self) -> &Node {
        &self.root
    }

    pub fn total_frequency(&self) -> u64 {
        self.root.frequency()
    }

    pub fn symbol_count(&self) -> usize {
        self.leaves().count()
    }

    /// All leaves as `(symbol, depth)`, left to right.
    pub fn leaves(&self) -> impl Iterator<Item = (char, usize)> + '_ {
        self.walk().filter_map(|(node, depth)| match node {
            Node::Leaf { symbol, .. } => Some((*symbol, depth)),
            Node::Internal { .. } => None,
        })
    }

    /// Node, left subtree, right subtree: every node with its label and frequency.
    pub fn preorder(&self) -> Vec<PreorderEntry> {
        self.walk()
            .map(|(node, _)| {
                let mut buf = [0u8; 4];
                PreorderEntry {
                    label: String::from(node.payload(&mut buf)),
                    frequency: node.frequency(),
                }
            })
            .collect()
    }

    /// Depth-first preorder walk yielding each node with its depth.
    pub(crate) fn walk(&self) -> impl Iterator<Item = (&Node, usize)> + '_ {
        let mut stack = alloc::vec![(&self.root, 0usize)];
        core::iter::from_fn(move || {
            let (node, depth) = stack.pop()?;
            if let Some((left, right)) = node.children() {
                stack.push((right, depth + 1));
                stack.push((left, depth + 1));
            }
            Some((node, depth))
        })
    }
}
