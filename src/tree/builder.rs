use super::{HuffmanTree, Node, PriorityQueue, PriorityQueueError};
use crate::frequency::FrequencyTable;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum TreeBuildError {
    #[error("Can't build a huffman tree without any symbols")]
    EmptyAlphabet,
    #[error("Symbol {symbol:?} has a frequency of zero, every symbol needs a positive frequency")]
    NonPositiveFrequency { symbol: char },
    #[error("Sum of all frequencies does not fit into 64 bits")]
    FrequencyOverflow,
    #[error(transparent)]
    PriorityQueue(#[from] PriorityQueueError),
}

impl HuffmanTree {
    /// Build the tree by repeatedly merging the two nodes that order first until only the root
    /// is left.
    ///
    /// The first extracted node becomes the left child and the second the right child, so
    /// equal tables always produce identical trees.
    pub fn build(frequencies: &FrequencyTable) -> Result<HuffmanTree, TreeBuildError> {
        use TreeBuildError as err;

        if frequencies.is_empty() {
            return Err(err::EmptyAlphabet);
        }
        if frequencies.total().is_none() {
            return Err(err::FrequencyOverflow);
        }

        let mut queue = PriorityQueue::with_capacity(frequencies.len());
        for (symbol, frequency) in frequencies.iter() {
            if frequency == 0 {
                return Err(err::NonPositiveFrequency { symbol });
            }
            queue.insert(Node::leaf(symbol, frequency));
        }

        let root = merge_all(queue)?;
        log_event!(
            debug,
            symbols = frequencies.len(),
            total = root.frequency(),
            "built huffman tree"
        );
        Ok(HuffmanTree { root })
    }

    /// Count the alphanumeric characters of `text` (see [`FrequencyTable::from_text`]) and
    /// build a tree from those counts.
    pub fn from_text(text: &str) -> Result<HuffmanTree, TreeBuildError> {
        HuffmanTree::build(&FrequencyTable::from_text(text))
    }
}

/// Merge the two nodes that order first until one is left and return it. The first extracted
/// node becomes the left child.
pub(crate) fn merge_all(mut queue: PriorityQueue) -> Result<Node, TreeBuildError> {
    while queue.len() > 1 {
        let left = queue.extract_min()?;
        let right = queue.extract_min()?;
        log_event!(
            trace,
            left = left.frequency(),
            right = right.frequency(),
            "merging huffman nodes"
        );
        let merged = Node::merge(left, right).ok_or(TreeBuildError::FrequencyOverflow)?;
        queue.insert(merged);
    }
    Ok(queue.extract_min()?)
}

#[cfg(test)]
mod tests {
    use super::TreeBuildError;
    use crate::frequency::FrequencyTable;
    use crate::tree::{HuffmanTree, Node, PreorderEntry};
    use alloc::string::String;
    use alloc::vec::Vec;

    fn shape(node: &Node) -> String {
        match node.children() {
            None => {
                let mut buf = [0u8; 4];
                String::from(node.payload(&mut buf))
            }
            Some((left, right)) => alloc::format!("({} {})", shape(left), shape(right)),
        }
    }

    #[test]
    fn empty_alphabet() {
        assert_eq!(
            HuffmanTree::build(&FrequencyTable::new()),
            Err(TreeBuildError::EmptyAlphabet)
        );
        assert_eq!(
            HuffmanTree::from_text("?!  ."),
            Err(TreeBuildError::EmptyAlphabet)
        );
    }

    #[test]
    fn zero_frequency_is_rejected() {
        let table = FrequencyTable::from_pairs([('a', 3), ('b', 0)]);
        assert_eq!(
            HuffmanTree::build(&table),
            Err(TreeBuildError::NonPositiveFrequency { symbol: 'b' })
        );
    }

    #[test]
    fn overflowing_frequencies() {
        let table = FrequencyTable::from_pairs([('a', u64::MAX), ('b', 1)]);
        assert_eq!(
            HuffmanTree::build(&table),
            Err(TreeBuildError::FrequencyOverflow)
        );
    }

    #[test]
    fn single_symbol_is_a_leaf_root() {
        let tree = HuffmanTree::build(&FrequencyTable::from_pairs([('A', 7)])).unwrap();
        assert_eq!(*tree.root(), Node::leaf('A', 7));
        assert_eq!(tree.symbol_count(), 1);
        assert_eq!(tree.total_frequency(), 7);
    }

    #[test]
    fn classic_example_shape() {
        let table = FrequencyTable::from_pairs([
            ('A', 5),
            ('B', 9),
            ('C', 12),
            ('D', 13),
            ('E', 16),
            ('F', 45),
        ]);
        let tree = HuffmanTree::build(&table).unwrap();
        assert_eq!(shape(tree.root()), "(F ((C D) ((A B) E)))");
        assert_eq!(tree.total_frequency(), 100);
    }

    #[test]
    fn leaves_are_merged_before_equally_frequent_groups() {
        let table = FrequencyTable::from_pairs([('A', 2), ('B', 1), ('C', 1), ('D', 2)]);
        let tree = HuffmanTree::build(&table).unwrap();
        assert_eq!(shape(tree.root()), "((B C) (A D))");
    }

    #[test]
    fn preorder_lists_every_node() {
        let table = FrequencyTable::from_pairs([('X', 3), ('Y', 1), ('Z', 2)]);
        let tree = HuffmanTree::build(&table).unwrap();
        let entry = |label: &str, frequency| PreorderEntry {
            label: String::from(label),
            frequency,
        };
        assert_eq!(
            tree.preorder(),
            [
                entry("XYZ", 6),
                entry("X", 3),
                entry("YZ", 3),
                entry("Y", 1),
                entry("Z", 2),
            ]
        );
        assert_eq!(
            tree.leaves().collect::<Vec<_>>(),
            [('X', 1), ('Y', 2), ('Z', 2)]
        );
    }
}
