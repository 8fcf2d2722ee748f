//! Symbol counts that feed the tree builder.
//!
//! Counting from raw text only looks at alphanumeric characters and folds them to upper case,
//! so `"Aa"` counts as two `A`s. [`normalize_text`] applies the same folding to text that is
//! about to be encoded, which keeps both sides of the code table consistent.

use alloc::collections::BTreeMap;
use alloc::string::String;

/// Mapping from symbol to occurrence count.
///
/// Iteration is ordered by symbol, which keeps everything built on top of it reproducible.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: BTreeMap<char, u64>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from explicit `(symbol, count)` pairs. Later pairs for the same symbol
    /// replace earlier ones.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (char, u64)>) -> Self {
        FrequencyTable {
            counts: pairs.into_iter().collect(),
        }
    }

    /// Count the alphanumeric characters of `text`, case-insensitively.
    pub fn from_text(text: &str) -> Self {
        let mut table = FrequencyTable::new();
        table.add_text(text);
        table
    }

    /// Add the alphanumeric characters of `text` to the existing counts.
    pub fn add_text(&mut self, text: &str) {
        for symbol in text.chars().filter(|c| c.is_alphanumeric()) {
            let count = self.counts.entry(fold_case(symbol)).or_insert(0);
            *count = count.saturating_add(1);
        }
    }

    /// Set the count for a single symbol, returning the previous count if there was one.
    pub fn insert(&mut self, symbol: char, count: u64) -> Option<u64> {
        self.counts.insert(symbol, count)
    }

    pub fn get(&self, symbol: char) -> Option<u64> {
        self.counts.get(&symbol).copied()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts, or `None` if it does not fit in a `u64`.
    pub fn total(&self) -> Option<u64> {
        self.counts
            .values()
            .try_fold(0u64, |acc, &count| acc.checked_add(count))
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, u64)> + '_ {
        self.counts.iter().map(|(&symbol, &count)| (symbol, count))
    }
}

impl FromIterator<(char, u64)> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = (char, u64)>>(iter: I) -> Self {
        FrequencyTable::from_pairs(iter)
    }
}

impl Extend<(char, u64)> for FrequencyTable {
    fn extend<I: IntoIterator<Item = (char, u64)>>(&mut self, iter: I) {
        self.counts.extend(iter);
    }
}

/// Strip everything but alphanumeric characters and fold the rest to upper case, the same
/// way [`FrequencyTable::from_text`] counts them.
pub fn normalize_text(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_alphanumeric())
        .map(fold_case)
        .collect()
}

/// Upper-case a symbol when that maps it to exactly one char. Characters like `ß`, whose upper
/// case form is several chars long, stay as they are so one input char stays one symbol.
fn fold_case(symbol: char) -> char {
    let mut upper = symbol.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(folded), None) => folded,
        _ => symbol,
    }
}
