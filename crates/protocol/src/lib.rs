//! # JVox Protocol
//!
//! Shared data contracts for the JVox screen-reader clients.
//!
//! The speech backend, the diagnostics channel, and the execution-result
//! channel all speak JSON; the types here pin down those wire shapes so the
//! rest of the workspace never touches raw `serde_json::Value`. Field names
//! follow the backend exactly (`cursor_pos`, `chunk_len`, `new_pos`,
//! `chunk_to_read`, `error_message`, `audio`), so a serialized request can
//! be POSTed as-is.

mod chunk;
mod diagnostic;
mod execution;
mod speech;

pub use chunk::{ChunkRequest, ChunkResponse, NavigationCommand, NO_ADJACENT_CHUNK};
pub use diagnostic::{CellId, Diagnostic, Severity, VirtualDiagnostic};
pub use execution::{
    strip_trailing_parenthetical, ExecutionError, ExecutionOutcome, LastError,
};
pub use speech::{SpeechRequest, SpeechResponse};
