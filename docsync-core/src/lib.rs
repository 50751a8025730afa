//! Docsync core library - syncs tagged doc comments from C sources to headers
//!
//! Scans source text for comment blocks tagged `[docimport name]` (or
//! `[docexport name]`) that precede a function signature, renders them as
//! export text for the matching header, and locates the line range in the
//! header that the text should replace.

#![deny(warnings)]

// Global invariants enforced in this crate:
// - Text in, text/data out; no file I/O anywhere in the core
// - Scan, locate, and export are total over strings (no matches is a valid
//   outcome, never an error)
// - Fully synchronous; one session per logical scan
// - Tracing is diagnostic only and never affects results

pub mod export;
pub mod line_index;
pub mod locator;
pub mod matcher;
pub mod trace;

pub use export::{render, ExportMode, ExportText};
pub use line_index::LineIndex;
pub use matcher::{compile_rule, FunctionRecord, RuleError, Scanner};
pub use trace::{LogTrace, TraceEvent, TraceSink};

/// Everything needed to bring a header in sync with its source file.
pub struct SyncPlan {
    /// Blocks matched in the source, in text order.
    pub records: Vec<FunctionRecord>,
    /// Rendered export text (joined form).
    pub export: String,
    /// Half-open line range in the header to replace with `export`.
    pub range: (usize, usize),
}

/// Scan `source` and locate in `header`, using an independent session for
/// each text. Sessions trace through the `log` facade; with no logger
/// installed that is a no-op.
pub fn plan_sync(source: &str, header: &str) -> SyncPlan {
    let mut source_session = Scanner::with_trace(LogTrace);
    source_session.scan(source);
    let export = source_session.export_joined();

    let mut header_session = Scanner::with_trace(LogTrace);
    let range = header_session.locate_insertion_range(header);

    SyncPlan {
        records: source_session.records().to_vec(),
        export,
        range,
    }
}

impl SyncPlan {
    /// Splice the export text into `header` over the insertion range.
    ///
    /// A plan with no matched records leaves the header untouched. Ranges are
    /// clamped to the header's line count, keeping this total over strings.
    pub fn patched_header(&self, header: &str) -> String {
        if self.records.is_empty() {
            return header.to_string();
        }

        let lines: Vec<&str> = header.split('\n').collect();
        let (start, end) = self.range;
        let start = start.min(lines.len());
        let end = end.max(start).min(lines.len());

        let mut out: Vec<&str> = Vec::with_capacity(lines.len());
        out.extend_from_slice(&lines[..start]);
        out.extend(self.export.split('\n'));
        out.extend_from_slice(&lines[end..]);
        out.join("\n")
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
