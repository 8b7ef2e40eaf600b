//! # JVox Debug Support
//!
//! Correlates runtime errors with linter diagnostics so the screen reader
//! can jump to, and speak, the diagnostic that most likely caused a failed
//! cell execution.
//!
//! Three pieces:
//!
//! - [`DiagnosticsStore`] holds the current diagnostics batch, rebuilt
//!   wholesale on every push and translated into cell-local coordinates.
//! - [`error_line_from_traceback`] digs the failing line number out of an
//!   ANSI-colored traceback.
//! - [`DiagnosticCorrelator`] matches an execution error against the stored
//!   diagnostics by trusted source, cell, line, and message substring.
//!
//! Everything here is a pure lookup over session state; "no match found" is
//! an expected outcome, not an error.

mod correlator;
mod store;
mod traceback;

pub use correlator::{DiagnosticCorrelator, CORRECT_LINE_PHRASE};
pub use store::{DiagnosticsStore, PositionTranslator};
pub use traceback::{error_line_from_traceback, strip_ansi};
