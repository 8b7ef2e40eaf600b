use serde::{Deserialize, Serialize};

use crate::diagnostic::{CellId, Diagnostic};

/// Error details from a failed cell execution.
///
/// Field names follow the Jupyter error output shape (`ename`, `evalue`,
/// `traceback`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionError {
    /// Error type name (e.g. `"TypeError"`).
    pub ename: String,

    /// Raw error message.
    pub evalue: String,

    /// Ordered traceback frames, possibly ANSI-colored.
    pub traceback: Vec<String>,
}

/// Result of running a code cell, as delivered on the execution channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionOutcome {
    /// The cell that ran.
    pub cell: CellId,

    /// Whether execution succeeded.
    pub success: bool,

    /// Error details, present when `success` is false.
    #[serde(default)]
    pub error: Option<ExecutionError>,
}

/// The session's "last error" record, overwritten on each failure.
///
/// At most one instance is live at a time; it optionally links to a
/// diagnostic from the current diagnostics set but does not own it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LastError {
    /// Error type name.
    pub etype: String,

    /// Raw error message.
    pub message: String,

    /// Ordered traceback frames.
    pub traceback: Vec<String>,

    /// Best-effort matched diagnostic, if any.
    pub diagnostic: Option<Diagnostic>,
}

impl LastError {
    /// The phrase read aloud for this error: the type name plus the message
    /// with any trailing parenthesized suffix removed.
    #[must_use]
    pub fn spoken_message(&self) -> String {
        format!(
            "{}: {}",
            self.etype,
            strip_trailing_parenthetical(&self.message)
        )
    }
}

/// Strip a trailing parenthesized suffix from an error message.
///
/// `"name 'x' is not defined (line 3)"` becomes `"name 'x' is not defined"`.
/// Messages without such a suffix are returned unchanged.
#[must_use]
pub fn strip_trailing_parenthetical(message: &str) -> &str {
    let trimmed = message.trim_end();
    if !trimmed.ends_with(')') {
        return message;
    }
    let Some(open) = trimmed.rfind('(') else {
        return message;
    };
    let inner = &trimmed[open + 1..trimmed.len() - 1];
    if inner.contains(')') {
        return message;
    }
    trimmed[..open].trim_end()
}
