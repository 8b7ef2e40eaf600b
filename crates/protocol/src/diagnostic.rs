use serde::{Deserialize, Serialize};

/// Opaque identifier of an editing surface ("cell") in a notebook document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CellId(String);

impl CellId {
    /// Create a cell identifier from its backing string.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The backing identifier string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CellId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CellId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Diagnostic severity, numeric on the wire (LSP encoding).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "i32", into = "i32")]
pub enum Severity {
    Error,
    Warning,
    Information,
    Hint,
    /// Severity code outside the LSP range, preserved as-is.
    Other(i32),
}

impl From<i32> for Severity {
    fn from(code: i32) -> Self {
        match code {
            1 => Self::Error,
            2 => Self::Warning,
            3 => Self::Information,
            4 => Self::Hint,
            other => Self::Other(other),
        }
    }
}

impl From<Severity> for i32 {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Error => 1,
            Severity::Warning => 2,
            Severity::Information => 3,
            Severity::Hint => 4,
            Severity::Other(code) => code,
        }
    }
}

/// A diagnostic as delivered on the push channel, positioned in the
/// virtual document coordinate space (spanning all cells).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VirtualDiagnostic {
    /// Reporting linter/LSP server (e.g. `"pyflakes"`).
    pub source: String,

    /// Diagnostic message.
    pub message: String,

    /// Severity code.
    pub severity: Severity,

    /// Start line in the virtual document (0-based).
    pub start_line: usize,

    /// Start column in the virtual document (0-based).
    pub start_col: usize,

    /// End line in the virtual document (0-based).
    pub end_line: usize,

    /// End column in the virtual document (0-based).
    pub end_col: usize,
}

/// A stored diagnostic, translated into the owning cell's local
/// coordinate space.
///
/// Positions are only valid until the next diagnostics push replaces the
/// whole set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Reporting linter/LSP server.
    pub source: String,

    /// Diagnostic message.
    pub message: String,

    /// Owning cell.
    pub cell: CellId,

    /// Severity code.
    pub severity: Severity,

    /// Start line within the cell (0-based).
    pub start_line: usize,

    /// Start column within the cell (0-based).
    pub start_col: usize,

    /// End line within the cell (0-based).
    pub end_line: usize,

    /// End column within the cell (0-based).
    pub end_col: usize,
}
