/// Huffman coding is a method of encoding where symbols are assigned a code,
/// and more commonly used symbols get shorter codes, and less commonly
/// used symbols get longer codes. Codes are prefix free, meaning no code
/// is the beginning of another code.
mod code_table;
mod decoder;
mod encoder;
pub use code_table::*;
pub use decoder::*;
pub use encoder::*;

use crate::frequency::FrequencyTable;
use crate::tree::{HuffmanTree, PreorderEntry, TreeBuildError};
use crate::HuffmanError;
use alloc::string::String;
use alloc::vec::Vec;

/// A built tree together with the code table derived from it.
///
/// Both halves are immutable, so one `HuffmanCode` can serve any number of concurrent
/// encode and decode calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanCode {
    tree: HuffmanTree,
    codes: CodeTable,
}

impl HuffmanCode {
    pub fn new(tree: HuffmanTree) -> Self {
        let codes = CodeTable::from_tree(&tree);
        HuffmanCode { tree, codes }
    }

    pub fn from_frequencies(frequencies: &FrequencyTable) -> Result<Self, TreeBuildError> {
        HuffmanTree::build(frequencies).map(HuffmanCode::new)
    }

    /// Build the code from the alphanumeric characters of `sample`, folded to upper case.
    pub fn from_text(sample: &str) -> Result<Self, TreeBuildError> {
        HuffmanTree::from_text(sample).map(HuffmanCode::new)
    }

    pub fn tree(&self) -> &HuffmanTree {
        &self.tree
    }

    pub fn codes(&self) -> &CodeTable {
        &self.codes
    }

    pub fn preorder(&self) -> Vec<PreorderEntry> {
        self.tree.preorder()
    }

    pub fn encoder(&self) -> HuffmanEncoder<'_> {
        HuffmanEncoder::new(&self.codes)
    }

    pub fn decoder(&self) -> HuffmanDecoder<'_> {
        HuffmanDecoder::new(&self.tree)
    }

    pub fn encode(&self, text: &str) -> Result<String, EncodeError> {
        self.encoder().encode(text)
    }

    pub fn decode(&self, bits: &str) -> Result<String, DecodeError> {
        self.decoder().decode(bits)
    }
}

/// Build a code from the characters of `data`, then check that encoding and decoding gives the
/// same text back. Panics if it does not.
#[cfg(any(test, feature = "fuzz_exports"))]
pub fn round_trip(data: &[u8]) {
    let text = String::from_utf8_lossy(data);
    if text.is_empty() {
        return;
    }
    let frequencies: FrequencyTable = text
        .chars()
        .fold(FrequencyTable::new(), |mut table, symbol| {
            let count = table.get(symbol).unwrap_or(0);
            table.insert(symbol, count + 1);
            table
        });

    let code = HuffmanCode::from_frequencies(&frequencies).unwrap();
    assert_eq!(code.codes().len(), frequencies.len());
    let bits = code.encode(&text).unwrap();
    assert_eq!(code.codes().weighted_length(&frequencies), bits.len() as u64);
    let decoded = code.decode(&bits).unwrap();
    assert_eq!(decoded, text);
}

/// Encode `text` with a code built from `frequencies` and decode it again.
pub fn encode_decode(frequencies: &FrequencyTable, text: &str) -> Result<String, HuffmanError> {
    let code = HuffmanCode::from_frequencies(frequencies)?;
    let bits = code.encode(text)?;
    Ok(code.decode(&bits)?)
}
