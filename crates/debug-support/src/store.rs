use jvox_protocol::{CellId, Diagnostic, VirtualDiagnostic};

/// Translates virtual-document positions into a cell's local coordinates.
///
/// Implemented by the editor/IDE binding; a position that falls outside any
/// live cell translates to `None`.
pub trait PositionTranslator {
    /// Map a (line, column) in the virtual document to the owning cell and
    /// the position within it.
    fn virtual_to_cell(&self, line: usize, col: usize) -> Option<(CellId, usize, usize)>;
}

/// The current diagnostics set for the active document.
///
/// A diagnostics push replaces the whole set; there is no incremental
/// merge, no versioning, and stored positions are only valid until the next
/// push.
#[derive(Debug, Default)]
pub struct DiagnosticsStore {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticsStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Discard the current set and rebuild it from a pushed batch.
    ///
    /// Each entry's start position is translated into cell-local
    /// coordinates; entries whose start does not translate belong to no
    /// live cell and are dropped. An entry whose end does not translate
    /// keeps its start position as the end. The swap is all-or-nothing:
    /// the previous set stays intact until the replacement is fully built.
    pub fn replace_batch<T: PositionTranslator>(
        &mut self,
        batch: &[VirtualDiagnostic],
        translator: &T,
    ) {
        let mut rebuilt = Vec::with_capacity(batch.len());

        for pushed in batch {
            let Some((cell, start_line, start_col)) =
                translator.virtual_to_cell(pushed.start_line, pushed.start_col)
            else {
                log::debug!(
                    "dropping diagnostic outside any cell: {:?} at virtual line {}",
                    pushed.source,
                    pushed.start_line
                );
                continue;
            };

            let (end_line, end_col) = translator
                .virtual_to_cell(pushed.end_line, pushed.end_col)
                .map_or((start_line, start_col), |(_, line, col)| (line, col));

            rebuilt.push(Diagnostic {
                source: pushed.source.clone(),
                message: pushed.message.clone(),
                cell,
                severity: pushed.severity,
                start_line,
                start_col,
                end_line,
                end_col,
            });
        }

        log::debug!("diagnostics store rebuilt with {} entries", rebuilt.len());
        self.diagnostics = rebuilt;
    }

    /// The stored diagnostics, in push order.
    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Drop all stored diagnostics.
    pub fn clear(&mut self) {
        self.diagnostics.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }
}
