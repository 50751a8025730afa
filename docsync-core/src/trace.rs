//! Diagnostic trace events emitted by the scan pipeline
//!
//! Global invariants enforced:
//! - Tracing never affects results; every event is fire-and-forget
//! - Events carry only derived data (names, offsets, counts), never owned state

/// One diagnostic event from a scan, locate, or export step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraceEvent<'a> {
    /// A scan call began on a text of the given byte length.
    ScanStarted { text_len: usize },
    /// A tagged block matched, with the captured function name and byte span.
    MatchFound { name: &'a str, span: (usize, usize) },
    /// A scan call finished with the given match count.
    ScanFinished { count: usize },
    /// A line index was built covering the given number of lines.
    IndexBuilt { lines: usize },
    /// The header locator resolved a replacement range from existing matches.
    RangeLocated { start_line: usize, end_line: usize },
    /// No matches in the header; the reverse `#endif` scan is running.
    FallbackScan,
    /// The fallback found an include-guard closer at this zero-based line.
    GuardFound { line: usize },
    /// The fallback found no `#endif` line anywhere in the header.
    GuardMissing,
    /// Export text was rendered from the given number of records.
    ExportRendered { records: usize },
}

/// Sink for [`TraceEvent`]s.
///
/// Implementations must be side-effect-only: the scanner ignores anything a
/// sink does, and return values are identical with or without one installed.
pub trait TraceSink {
    fn event(&self, event: &TraceEvent<'_>);
}

/// Sink that forwards every event to the `log` facade at debug level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogTrace;

impl TraceSink for LogTrace {
    fn event(&self, event: &TraceEvent<'_>) {
        match event {
            TraceEvent::ScanStarted { text_len } => {
                log::debug!("scan started over {text_len} bytes");
            }
            TraceEvent::MatchFound { name, span } => {
                log::debug!("found function: {name} at {span:?}");
            }
            TraceEvent::ScanFinished { count } => {
                log::debug!("scan finished: {count} match(es)");
            }
            TraceEvent::IndexBuilt { lines } => {
                log::debug!("line index built: {lines} line(s)");
            }
            TraceEvent::RangeLocated { start_line, end_line } => {
                log::debug!("header replacement lines: start={start_line}; end={end_line}");
            }
            TraceEvent::FallbackScan => {
                log::debug!("no matches found, searching for closing #endif");
            }
            TraceEvent::GuardFound { line } => {
                log::debug!("found #endif at line index {line}");
            }
            TraceEvent::GuardMissing => {
                log::debug!("closing #endif not found");
            }
            TraceEvent::ExportRendered { records } => {
                log::debug!("export rendered from {records} record(s)");
            }
        }
    }
}
