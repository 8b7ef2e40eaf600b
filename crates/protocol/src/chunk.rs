use serde::{Deserialize, Serialize};

/// Sentinel cursor position meaning "no adjacent chunk exists".
///
/// Returned when navigation runs off either end of the statement. Callers
/// must treat it as a no-op, not a failure.
pub const NO_ADJACENT_CHUNK: i64 = -1;

/// Navigation command for chunked reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavigationCommand {
    /// Read the chunk following the one under the cursor.
    Next,
    /// Read the chunk preceding the one under the cursor.
    #[serde(rename = "pre")]
    Previous,
    /// Read the chunk under the cursor, leaving the cursor at its start.
    Current,
    /// Read the chunk under the cursor, then park the cursor just past it.
    ReadThenNext,
}

impl NavigationCommand {
    /// Wire name of the command, as the backend expects it.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Next => "next",
            Self::Previous => "pre",
            Self::Current => "current",
            Self::ReadThenNext => "read_then_next",
        }
    }
}

/// Request for the chunked-reading endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkRequest {
    /// The line of source text to navigate.
    pub statement: String,

    /// Cursor position as a character offset into `statement`.
    pub cursor_pos: usize,

    /// Number of tokens per chunk.
    pub chunk_len: usize,

    /// Navigation command.
    pub command: NavigationCommand,
}

impl ChunkRequest {
    /// Default chunk size in tokens.
    pub const DEFAULT_CHUNK_LEN: usize = 3;

    /// Create a request, clamping the cursor into `[0, statement.len()]`.
    #[must_use]
    pub fn new(
        statement: impl Into<String>,
        cursor_pos: usize,
        chunk_len: usize,
        command: NavigationCommand,
    ) -> Self {
        let statement = statement.into();
        let cursor_pos = cursor_pos.min(statement.len());
        Self {
            statement,
            cursor_pos,
            chunk_len,
            command,
        }
    }
}

/// Response from the chunked-reading endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkResponse {
    /// New cursor position, or [`NO_ADJACENT_CHUNK`].
    pub new_pos: i64,

    /// Spoken rendering of the chunk (what the backend reads aloud).
    #[serde(default)]
    pub chunk_to_read: String,

    /// Raw text of the chunk as it appears in the statement.
    #[serde(default)]
    pub chunk_string: String,

    /// Failure description; empty on success.
    #[serde(default)]
    pub error_message: String,

    /// Base64-encoded MP3 bytes, when the backend synthesized speech.
    #[serde(default)]
    pub audio: Option<String>,
}

impl ChunkResponse {
    /// Backend reported a failure the caller should speak verbatim.
    #[must_use]
    pub fn is_error(&self) -> bool {
        !self.error_message.is_empty()
    }

    /// No adjacent chunk exists; the caller should do nothing.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.new_pos == NO_ADJACENT_CHUNK && !self.is_error()
    }
}
