//! Tagged doc-block matching over raw source text
//!
//! Global invariants enforced:
//! - Matching is case-sensitive, left-to-right, non-overlapping
//! - Record order equals appearance order in the text
//! - Spans are half-open byte ranges into the scanned text
//! - Malformed blocks fail to match and are skipped, never reported

use crate::trace::{TraceEvent, TraceSink};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use thiserror::Error;

/// The block rule: a tag comment, a doc comment, and a function signature.
///
/// Shape matched (whitespace free-form where `\s` appears):
///
/// ```c
/// /***************
///  [docimport frobnicate]
///  *//**
///  * Frobnicates the widget.
///  ***/
/// int *frobnicate(struct widget *w);
/// ```
const BLOCK_RULE: &str = r"(?xs)
    /\*+                                     # opening comment run /***
    \s+ \[ (?:docimport|docexport) \s+ \w* \] \s+  # the [docimport name] tag line
    \*/ /\*\*                                # token closing the tag, opening the doc
    .*?                                      # free-form doc body, may span lines
    \*+ / \n                                 # doc closer ***/ and its line break
    \w+ \s* \*? \s* (?P<name>\w+) \( .*? \) ;?  # function signature
";

static BLOCK_RE: Lazy<Regex> =
    Lazy::new(|| compile_rule().expect("block rule must compile"));

/// Rule compilation failure. Only possible at startup; scanning itself is
/// total over strings.
#[derive(Debug, Error)]
pub enum RuleError {
    #[error("malformed block rule: {0}")]
    MalformedRule(#[from] regex::Error),
}

/// Compile the block rule, surfacing a malformed pattern as [`RuleError`].
///
/// The CLI calls this once at startup; library users get the same compiled
/// rule through a lazy static afterwards.
pub fn compile_rule() -> Result<Regex, RuleError> {
    Ok(Regex::new(BLOCK_RULE)?)
}

/// One matched tagged-comment-plus-signature block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct FunctionRecord {
    /// Function name captured from the signature line.
    pub name: String,
    /// Half-open byte span of the whole block in the scanned text.
    pub span: (usize, usize),
    /// The complete matched substring.
    pub text: String,
}

/// Stateful scan session over source or header text.
///
/// `first_match_start` is set once per session, from the first match the
/// session ever sees; `last_match_end` is refreshed by any scan that matches.
/// A second `scan` call therefore keeps a stale start if the later text
/// matches earlier. Use a fresh session per text (or call [`Scanner::reset`])
/// unless that carry-over is wanted.
#[derive(Default)]
pub struct Scanner {
    start: Option<usize>,
    end: Option<usize>,
    records: Vec<FunctionRecord>,
    trace: Option<Box<dyn TraceSink>>,
}

impl Scanner {
    pub fn new() -> Scanner {
        Scanner::default()
    }

    /// Attach a diagnostic trace sink. Tracing has no effect on results.
    pub fn with_trace(sink: impl TraceSink + 'static) -> Scanner {
        Scanner {
            trace: Some(Box::new(sink)),
            ..Scanner::default()
        }
    }

    /// Scan `text` for tagged blocks, replacing any previously held records.
    ///
    /// Returns the number of matches found.
    pub fn scan(&mut self, text: &str) -> usize {
        self.emit(TraceEvent::ScanStarted {
            text_len: text.len(),
        });
        self.records.clear();

        let mut last_end = None;
        for caps in BLOCK_RE.captures_iter(text) {
            let Some(whole) = caps.get(0) else { continue };

            if self.start.is_none() {
                // Offset where the matched region of the session begins.
                self.start = Some(whole.start());
            }

            let name = caps.name("name").map_or("", |g| g.as_str());
            self.emit(TraceEvent::MatchFound {
                name,
                span: (whole.start(), whole.end()),
            });

            self.records.push(FunctionRecord {
                name: name.to_string(),
                span: (whole.start(), whole.end()),
                text: whole.as_str().to_string(),
            });
            last_end = Some(whole.end());
        }

        if last_end.is_some() {
            self.end = last_end;
        }

        self.emit(TraceEvent::ScanFinished {
            count: self.records.len(),
        });
        self.records.len()
    }

    /// Matched records from the most recent scan, in text order.
    pub fn records(&self) -> &[FunctionRecord] {
        &self.records
    }

    /// Byte offset where the session's first-ever match starts.
    pub fn first_match_start(&self) -> Option<usize> {
        self.start
    }

    /// Byte offset one past the last match of the most recent matching scan.
    pub fn last_match_end(&self) -> Option<usize> {
        self.end
    }

    /// Clear all session state, making the scanner equivalent to a fresh one.
    pub fn reset(&mut self) {
        self.start = None;
        self.end = None;
        self.records.clear();
    }

    pub(crate) fn emit(&self, event: TraceEvent<'_>) {
        if let Some(sink) = &self.trace {
            sink.event(&event);
        }
    }
}
