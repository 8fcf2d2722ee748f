//! Deterministic Huffman coding over character alphabets.
//!
//! A [`FrequencyTable`] is turned into a [`HuffmanTree`] by the classic two-minimum greedy merge.
//! Ties between equal frequencies are broken by [`tree::tie_break`], so the same table always
//! yields the same tree and the same codes. Codes and encoded payloads are strings over
//! `'0'`/`'1'`; nothing here packs bits into bytes.
//!
//! ```
//! use huffcode::{FrequencyTable, HuffmanCode};
//!
//! let frequencies = FrequencyTable::from_pairs([('X', 3), ('Y', 1), ('Z', 2)]);
//! let code = HuffmanCode::from_frequencies(&frequencies)?;
//! assert_eq!(code.codes().get('X'), Some("0"));
//!
//! let bits = code.encode("XYZ")?;
//! assert_eq!(bits, "01011");
//! assert_eq!(code.decode(&bits)?, "XYZ");
//! # Ok::<(), huffcode::HuffmanError>(())
//! ```
#![no_std]
#![deny(trivial_casts, trivial_numeric_casts, rust_2018_idioms)]

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

macro_rules! log_event {
    ($level:ident, $($x:tt)*) => {
        #[cfg(feature = "log")]
        tracing::$level!($($x)*);
    }
}

pub mod frequency;
pub mod huffman;
pub mod tree;
mod tests;

pub use frequency::{normalize_text, FrequencyTable};
pub use huffman::{
    CodeTable, DecodeError, EncodeError, HuffmanCode, HuffmanDecoder, HuffmanEncoder,
};
pub use tree::{HuffmanTree, Node, PreorderEntry, TreeBuildError};

/// Every way the engine can fail, for callers that don't care which stage did.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum HuffmanError {
    #[error(transparent)]
    TreeBuild(#[from] TreeBuildError),
    #[error(transparent)]
    Encode(#[from] EncodeError),
    #[error(transparent)]
    Decode(#[from] DecodeError),
}
