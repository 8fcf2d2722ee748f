//! Text formats of the four batch reports.

use std::io::{self, Write};

use huffcode::{CodeTable, PreorderEntry};

pub const CODE_TABLE_FILE: &str = "Character_Code.txt";
pub const PREORDER_FILE: &str = "Preorder.txt";
pub const DECODED_FILE: &str = "Decoded_Strings.txt";
pub const ENCODED_FILE: &str = "Encoded_Binary.txt";

/// `SYMBOL = CODE`, one per line, in traversal order.
pub fn write_code_table<W: Write>(out: &mut W, codes: &CodeTable) -> io::Result<()> {
    for (symbol, code) in codes.iter() {
        writeln!(out, "{symbol} = {code}")?;
    }
    Ok(())
}

/// `LABEL : FREQUENCY`, one per node in preorder.
pub fn write_preorder<W: Write>(out: &mut W, entries: &[PreorderEntry]) -> io::Result<()> {
    for entry in entries {
        writeln!(out, "{} : {}", entry.label, entry.frequency)?;
    }
    Ok(())
}

/// `KEY ---> VALUE` with both columns padded to their widest entry.
pub fn write_aligned<W: Write>(out: &mut W, rows: &[(String, String)]) -> io::Result<()> {
    let key_width = rows.iter().map(|(key, _)| key.chars().count()).max().unwrap_or(0);
    let value_width = rows
        .iter()
        .map(|(_, value)| value.chars().count())
        .max()
        .unwrap_or(0);
    for (key, value) in rows {
        writeln!(out, "{key:<key_width$} ---> {value:<value_width$}")?;
    }
    Ok(())
}

/// Keep the first occurrence of every key, in input order.
pub fn dedup_keys(items: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}
