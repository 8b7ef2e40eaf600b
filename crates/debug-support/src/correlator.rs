use jvox_protocol::{
    strip_trailing_parenthetical, CellId, Diagnostic, ExecutionError, LastError,
};

use crate::traceback::error_line_from_traceback;

/// Neutral phrase spoken when no error or diagnostic exists for a line.
pub const CORRECT_LINE_PHRASE: &str = "This line is correct.";

/// Matches a runtime error against stored diagnostics.
///
/// Only diagnostics from one trusted linter are considered; everything else
/// is ignored regardless of content.
#[derive(Debug, Clone)]
pub struct DiagnosticCorrelator {
    trusted_source: String,
}

impl Default for DiagnosticCorrelator {
    fn default() -> Self {
        Self::new("pyflakes")
    }
}

impl DiagnosticCorrelator {
    /// Create a correlator trusting diagnostics from `trusted_source`.
    #[must_use]
    pub fn new(trusted_source: impl Into<String>) -> Self {
        Self {
            trusted_source: trusted_source.into(),
        }
    }

    /// The trusted linter identifier.
    #[must_use]
    pub fn trusted_source(&self) -> &str {
        &self.trusted_source
    }

    /// Find the diagnostic that most likely caused a runtime error.
    ///
    /// A candidate must come from the trusted source, sit in the erroring
    /// cell at exactly `error_line` (0-based; negative means unknown and
    /// never matches), and its message must contain the error message with
    /// any trailing parenthesized suffix stripped. The first match in list
    /// order wins; `None` is a valid outcome, not a failure.
    #[must_use]
    pub fn correlate<'a>(
        &self,
        diagnostics: &'a [Diagnostic],
        cell: &CellId,
        error_line: i64,
        evalue: &str,
    ) -> Option<&'a Diagnostic> {
        let line = usize::try_from(error_line).ok()?;
        let needle = strip_trailing_parenthetical(evalue);

        diagnostics.iter().find(|diagnostic| {
            diagnostic.source == self.trusted_source
                && diagnostic.cell == *cell
                && diagnostic.start_line == line
                && diagnostic.message.contains(needle)
        })
    }

    /// Build the session's last-error record for a failed execution.
    ///
    /// Extracts the 1-based error line from the traceback, correlates on
    /// the 0-based line, and stores `diagnostic: None` when nothing
    /// matches (the degraded, line-only case).
    #[must_use]
    pub fn record_error(
        &self,
        diagnostics: &[Diagnostic],
        cell: &CellId,
        error: &ExecutionError,
    ) -> LastError {
        let line = error_line_from_traceback(&error.traceback);
        let matched = self
            .correlate(diagnostics, cell, line - 1, &error.evalue)
            .cloned();

        if matched.is_none() {
            log::debug!(
                "no diagnostic matched {} at line {line} in cell {cell}",
                error.ename
            );
        }

        LastError {
            etype: error.ename.clone(),
            message: error.evalue.clone(),
            traceback: error.traceback.clone(),
            diagnostic: matched,
        }
    }
}
