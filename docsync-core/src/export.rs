//! Export rendering of matched blocks
//!
//! Global invariants enforced:
//! - Records render in scan order
//! - Tag substitution rewrites every `docimport` occurrence; text already
//!   tagged `docexport` passes through unchanged
//! - Lines mode joined with `'\n'` reproduces Joined mode byte-for-byte

use crate::matcher::{FunctionRecord, Scanner};
use crate::trace::TraceEvent;

/// Requested shape of the rendered export text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportMode {
    /// The joined text split into individual lines.
    Lines,
    /// One string with blocks separated by blank lines.
    Joined,
}

/// Rendered export text in the shape picked by [`ExportMode`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportText {
    Lines(Vec<String>),
    Joined(String),
}

/// Render records as header-insertable text: each block with its tag flipped
/// to `docexport` and a `;` appended, blocks joined by a blank line.
pub fn render(records: &[FunctionRecord], mode: ExportMode) -> ExportText {
    let mut blocks = Vec::with_capacity(records.len());
    for record in records {
        let mut exported = record.text.replace("docimport", "docexport");
        exported.push(';');
        blocks.push(exported);
    }

    let joined = blocks.join("\n\n");

    match mode {
        ExportMode::Lines => {
            ExportText::Lines(joined.split('\n').map(str::to_string).collect())
        }
        ExportMode::Joined => ExportText::Joined(joined),
    }
}

impl Scanner {
    /// Render this session's records per [`render`].
    pub fn export(&self, mode: ExportMode) -> ExportText {
        self.emit(TraceEvent::ExportRendered {
            records: self.records().len(),
        });
        render(self.records(), mode)
    }

    /// Export text as one joined string.
    pub fn export_joined(&self) -> String {
        match self.export(ExportMode::Joined) {
            ExportText::Joined(text) => text,
            ExportText::Lines(lines) => lines.join("\n"),
        }
    }

    /// Export text as an ordered sequence of lines.
    pub fn export_lines(&self) -> Vec<String> {
        match self.export(ExportMode::Lines) {
            ExportText::Lines(lines) => lines,
            ExportText::Joined(text) => text.split('\n').map(str::to_string).collect(),
        }
    }
}
