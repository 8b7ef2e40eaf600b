use jvox_protocol::{ExecutionOutcome, VirtualDiagnostic};

/// Typed messages from the editor host's event channels.
///
/// Producers (the execution-finished handler and the diagnostics push
/// channel) emit these; the session consumes them synchronously, with no
/// dependency on the host's event-bus technology.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JvoxEvent {
    /// A code cell finished running.
    ExecutionFinished(ExecutionOutcome),

    /// The linting backend pushed a fresh diagnostics batch for the
    /// document. Replaces the prior set wholesale.
    DiagnosticsPushed {
        diagnostics: Vec<VirtualDiagnostic>,
    },
}
