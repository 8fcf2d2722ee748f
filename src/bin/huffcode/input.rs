//! Reading the input directory and sorting its lines into frequencies, bit strings to decode and
//! text to encode.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use color_eyre::eyre::{Result, WrapErr};
use huffcode::{normalize_text, FrequencyTable};
use tracing::{debug, warn};

/// What a single input line turned out to be.
#[derive(Debug, PartialEq, Eq)]
pub enum Line {
    /// `SYMBOL - COUNT`
    Frequency { symbol: char, count: u64 },
    /// Only `0` and `1`
    Decode(String),
    /// Anything else, already normalized for encoding
    Encode(String),
    /// A frequency line that could not be used
    Invalid(&'static str),
}

/// Classify one line. Blank lines give `None`.
pub fn classify(line: &str) -> Option<Line> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    if line.contains('-') {
        let mut parts = line.split('-');
        let symbol = parts.next().unwrap_or_default().trim();
        let count = parts.next().unwrap_or_default().trim();

        let mut chars = symbol.chars();
        let (Some(symbol), None) = (chars.next(), chars.next()) else {
            return Some(Line::Invalid("symbol has to be exactly one character"));
        };
        if count.is_empty() || !count.bytes().all(|b| b.is_ascii_digit()) {
            return Some(Line::Invalid("count is not a number"));
        }
        return Some(match count.parse() {
            Ok(count) => Line::Frequency { symbol, count },
            Err(_) => Line::Invalid("count does not fit into 64 bits"),
        });
    }

    if line.chars().all(|c| c == '0' || c == '1') {
        return Some(Line::Decode(line.to_owned()));
    }

    Some(Line::Encode(normalize_text(line)))
}

/// Everything collected from the input files.
#[derive(Debug, Default)]
pub struct InputSet {
    pub frequencies: FrequencyTable,
    pub to_encode: Vec<String>,
    pub to_decode: Vec<String>,
}

impl InputSet {
    /// Sort the lines of `contents` into the set. `origin` is only used for log messages.
    pub fn ingest(&mut self, contents: &str, origin: &Path) {
        for (idx, line) in contents.lines().enumerate() {
            match classify(line) {
                None => {}
                Some(Line::Frequency { symbol, count }) => {
                    if let Some(previous) = self.frequencies.insert(symbol, count) {
                        debug!(
                            file = %origin.display(),
                            line = idx + 1,
                            %symbol,
                            previous,
                            count,
                            "frequency redefined"
                        );
                    }
                }
                Some(Line::Decode(bits)) => self.to_decode.push(bits),
                Some(Line::Encode(text)) => {
                    if !text.is_empty() {
                        self.to_encode.push(text)
                    }
                }
                Some(Line::Invalid(reason)) => {
                    warn!(file = %origin.display(), line = idx + 1, reason, "skipping frequency line")
                }
            }
        }
    }
}

/// Every regular file directly inside `dir`, sorted by name so runs are reproducible.
pub fn list_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir).wrap_err_with(|| format!("reading {}", dir.display()))? {
        let entry = entry?;
        if entry.file_type()?.is_file() {
            files.push(entry.path());
        }
    }
    files.sort();
    Ok(files)
}

/// Frequencies from a file of `SYMBOL - COUNT` lines. Every other line is ignored.
pub fn read_frequencies(path: &Path) -> Result<FrequencyTable> {
    let mut set = InputSet::default();
    set.ingest(&read_to_string(fs::File::open(path)?, path)?, path);
    Ok(set.frequencies)
}

/// Frequencies counted from the raw text of a file.
pub fn read_sample(path: &Path) -> Result<FrequencyTable> {
    let text = read_to_string(fs::File::open(path)?, path)?;
    Ok(FrequencyTable::from_text(&text))
}

pub fn read_to_string(mut reader: impl Read, path: &Path) -> Result<String> {
    let mut contents = String::new();
    reader
        .read_to_string(&mut contents)
        .wrap_err_with(|| format!("reading {}", path.display()))?;
    Ok(contents)
}

#[cfg(test)]
mod tests {
    use super::{classify, InputSet, Line};
    use std::path::Path;

    #[test]
    fn frequency_lines() {
        assert_eq!(
            classify("  A - 19 "),
            Some(Line::Frequency {
                symbol: 'A',
                count: 19
            })
        );
        assert_eq!(
            classify("AB - 3"),
            Some(Line::Invalid("symbol has to be exactly one character"))
        );
        assert_eq!(
            classify("C - x"),
            Some(Line::Invalid("count is not a number"))
        );
        assert_eq!(
            classify("C -"),
            Some(Line::Invalid("count is not a number"))
        );
    }

    #[test]
    fn bit_lines_and_text_lines() {
        assert_eq!(classify("0110"), Some(Line::Decode("0110".to_owned())));
        assert_eq!(
            classify("Hello, World 1!"),
            Some(Line::Encode("HELLOWORLD1".to_owned()))
        );
        assert_eq!(classify("   "), None);
        assert_eq!(classify(""), None);
    }

    #[test]
    fn ingest_sorts_lines() {
        let mut set = InputSet::default();
        set.ingest(
            "A - 2\nB - 1\n\n010\nab ba\n??\nB - 3\n",
            Path::new("input.txt"),
        );
        assert_eq!(set.frequencies.get('A'), Some(2));
        assert_eq!(set.frequencies.get('B'), Some(3));
        assert_eq!(set.to_decode, ["010"]);
        assert_eq!(set.to_encode, ["ABBA"]);
    }
}
