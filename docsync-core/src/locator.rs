//! Header insertion-point location
//!
//! Global invariants enforced:
//! - Total over strings: every header resolves to some half-open line range
//! - Existing tagged blocks win over the include-guard fallback
//! - `(0, 0)` means "no replacement target; insert at top"

use crate::line_index::LineIndex;
use crate::matcher::Scanner;
use crate::trace::TraceEvent;

impl Scanner {
    /// Locate the half-open line range in `header` to replace with export
    /// text.
    ///
    /// Scans the header through this session. When tagged blocks already
    /// exist, the range covers them exactly: from the line holding the first
    /// match's start to the line starting just past the last match's end.
    /// With no blocks, the range is the zero-width point one line above the
    /// closing `#endif`, or `(0, 0)` when the header has no guard at all.
    pub fn locate_insertion_range(&mut self, header: &str) -> (usize, usize) {
        let num = self.scan(header);

        let index = LineIndex::build(header);
        self.emit(TraceEvent::IndexBuilt {
            lines: index.line_count(),
        });

        if num != 0 {
            // Offsets that are not exact line starts fall back to line 0.
            let line_start = self
                .first_match_start()
                .and_then(|offset| index.line_at(offset))
                .map_or(0, |(line, _)| line);
            let line_end = self
                .last_match_end()
                .and_then(|offset| index.line_at(offset + 1))
                .map_or(0, |(line, _)| line);
            self.emit(TraceEvent::RangeLocated {
                start_line: line_start,
                end_line: line_end,
            });
            return (line_start, line_end);
        }

        self.emit(TraceEvent::FallbackScan);
        let lines: Vec<&str> = header.split('\n').collect();
        for (line_num, line) in lines.iter().enumerate().rev() {
            if line.starts_with("#endif") {
                self.emit(TraceEvent::GuardFound { line: line_num });
                // Insert just above the guard; a guard on line 0 clamps to 0.
                let insert_at = line_num.saturating_sub(1);
                return (insert_at, insert_at);
            }
        }

        self.emit(TraceEvent::GuardMissing);
        (0, 0)
    }
}

#[cfg(test)]
#[path = "locator/tests.rs"]
mod tests;
