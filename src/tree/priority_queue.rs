use super::{compare_nodes, Node};
use alloc::collections::BinaryHeap;
use core::cmp::Ordering;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum PriorityQueueError {
    #[error("Tried to extract a node from an empty priority queue")]
    EmptyStructure,
}

/// Min-priority queue of tree nodes, ordered by [`compare_nodes`].
#[derive(Debug, Default)]
pub struct PriorityQueue {
    heap: BinaryHeap<MinEntry>,
}

/// `BinaryHeap` is a max-heap, so entries order themselves in reverse.
#[derive(Debug)]
struct MinEntry(Node);

impl PartialEq for MinEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for MinEntry {}

impl PartialOrd for MinEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for MinEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_nodes(&other.0, &self.0)
    }
}

impl PriorityQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        PriorityQueue {
            heap: BinaryHeap::with_capacity(capacity),
        }
    }

    pub fn insert(&mut self, node: Node) {
        self.heap.push(MinEntry(node));
    }

    /// Remove and return the node that orders first.
    pub fn extract_min(&mut self) -> Result<Node, PriorityQueueError> {
        self.heap
            .pop()
            .map(|MinEntry(node)| node)
            .ok_or(PriorityQueueError::EmptyStructure)
    }

    /// The node [`extract_min`](Self::extract_min) would return next.
    pub fn peek_min(&self) -> Option<&Node> {
        self.heap.peek().map(|MinEntry(node)| node)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Extend<Node> for PriorityQueue {
    fn extend<I: IntoIterator<Item = Node>>(&mut self, iter: I) {
        self.heap.extend(iter.into_iter().map(MinEntry));
    }
}
