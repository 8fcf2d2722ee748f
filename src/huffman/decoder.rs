use crate::tree::{HuffmanTree, Node};
use alloc::string::String;
use core::iter::Enumerate;
use core::str::Chars;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum DecodeError {
    #[error("Found {bit:?} at position {position}, only '0' and '1' are valid bits")]
    MalformedBit { bit: char, position: usize },
    #[error("Input ended in the middle of a code, {dangling_bits} bits were left over")]
    TruncatedCode { dangling_bits: usize },
}

/// Decodes by walking the tree: `0` descends left, `1` descends right, and every leaf reached
/// emits its symbol and restarts at the root.
pub struct HuffmanDecoder<'tree> {
    tree: &'tree HuffmanTree,
}

impl<'t> HuffmanDecoder<'t> {
    pub fn new(tree: &'t HuffmanTree) -> HuffmanDecoder<'t> {
        HuffmanDecoder { tree }
    }

    /// Decode the whole bit string. Fails if any code is malformed or left unfinished.
    pub fn decode(&self, bits: &str) -> Result<String, DecodeError> {
        let decoded: Result<String, DecodeError> = self.symbols(bits).collect();
        if let Err(_err) = &decoded {
            log_event!(debug, error = %_err, "failed to decode bit string");
        }
        decoded
    }

    /// Lazily decode `bits` one symbol at a time. The iterator stops after the first error.
    pub fn symbols<'b>(&self, bits: &'b str) -> Symbols<'t, 'b> {
        Symbols {
            root: self.tree.root(),
            bits: bits.chars().enumerate(),
            finished: false,
        }
    }
}

/// Iterator returned by [`HuffmanDecoder::symbols`].
pub struct Symbols<'tree, 'bits> {
    root: &'tree Node,
    bits: Enumerate<Chars<'bits>>,
    finished: bool,
}

impl Symbols<'_, '_> {
    fn fail(&mut self, err: DecodeError) -> Option<Result<char, DecodeError>> {
        self.finished = true;
        Some(Err(err))
    }
}

impl Iterator for Symbols<'_, '_> {
    type Item = Result<char, DecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let mut cursor = self.root;
        let mut dangling_bits = 0;
        loop {
            let Some((position, bit)) = self.bits.next() else {
                self.finished = true;
                if dangling_bits == 0 {
                    return None;
                }
                return Some(Err(DecodeError::TruncatedCode { dangling_bits }));
            };
            let go_right = match bit {
                '0' => false,
                '1' => true,
                _ => return self.fail(DecodeError::MalformedBit { bit, position }),
            };

            match cursor {
                // Only reachable when the whole tree is a single leaf: every bit is one symbol
                Node::Leaf { symbol, .. } => return Some(Ok(*symbol)),
                Node::Internal { left, right, .. } => {
                    let next: &Node = if go_right { right } else { left };
                    if let Node::Leaf { symbol, .. } = next {
                        return Some(Ok(*symbol));
                    }
                    cursor = next;
                    dangling_bits += 1;
                }
            }
        }
    }
}
