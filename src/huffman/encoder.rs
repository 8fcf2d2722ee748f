use super::CodeTable;
use alloc::string::String;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum EncodeError {
    #[error("Symbol {symbol:?} at position {position} has no code in the code table")]
    UnknownSymbol { symbol: char, position: usize },
}

/// Turns text into a string of `0`/`1` by concatenating the code of every symbol.
///
/// No case folding happens here: text has to use the same symbols the table was built from,
/// see [`crate::normalize_text`].
pub struct HuffmanEncoder<'table> {
    table: &'table CodeTable,
}

impl<'t> HuffmanEncoder<'t> {
    pub fn new(table: &'t CodeTable) -> HuffmanEncoder<'t> {
        HuffmanEncoder { table }
    }

    pub fn encode(&self, text: &str) -> Result<String, EncodeError> {
        let mut bits = String::with_capacity(text.len());
        self.encode_into(text, &mut bits)?;
        Ok(bits)
    }

    /// Append the encoding of `text` to `bits`. On error `bits` keeps whatever was written
    /// before the unknown symbol.
    pub fn encode_into(&self, text: &str, bits: &mut String) -> Result<(), EncodeError> {
        for (position, symbol) in text.chars().enumerate() {
            let code = self
                .table
                .get(symbol)
                .ok_or(EncodeError::UnknownSymbol { symbol, position })?;
            bits.push_str(code);
        }
        Ok(())
    }
}
