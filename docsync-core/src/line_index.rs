//! Byte-offset to line-number index
//!
//! Global invariants enforced:
//! - Lines are delimited by `'\n'` only; `'\r'` stays part of line content
//! - Offset of line i+1 = offset of line i + content length + 1
//! - A trailing delimiter yields a final empty line keyed one past end of text

use std::collections::HashMap;

/// Mapping from the byte offset of each line start to that line.
///
/// Built fresh per text and read-only afterwards. Only offsets that are exact
/// line starts resolve; everything else is a miss, which callers treat as
/// line 0 when translating match spans.
#[derive(Debug, Clone)]
pub struct LineIndex {
    entries: HashMap<usize, (usize, String)>,
    line_count: usize,
}

impl LineIndex {
    /// Index `text` by the byte offset of each line's first character.
    pub fn build(text: &str) -> LineIndex {
        let mut entries = HashMap::new();
        let mut offset = 0;
        let mut line_count = 0;

        for (line_num, line) in text.split('\n').enumerate() {
            entries.insert(offset, (line_num, line.to_string()));
            offset += line.len() + 1; // account for the consumed delimiter
            line_count = line_num + 1;
        }

        LineIndex {
            entries,
            line_count,
        }
    }

    /// Look up the line starting exactly at `offset`.
    ///
    /// Returns `(zero-based line number, line content)`; `None` when `offset`
    /// is not a registered line start.
    pub fn line_at(&self, offset: usize) -> Option<(usize, &str)> {
        self.entries
            .get(&offset)
            .map(|(num, text)| (*num, text.as_str()))
    }

    /// Number of lines indexed, counting the degenerate trailing empty line
    /// produced by a trailing delimiter.
    pub fn line_count(&self) -> usize {
        self.line_count
    }
}

#[cfg(test)]
#[path = "line_index/tests.rs"]
mod tests;
