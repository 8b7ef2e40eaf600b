use thiserror::Error;

/// Result type for chunk navigation.
pub type Result<T> = std::result::Result<T, ChunkError>;

/// Errors that can occur during chunk navigation.
///
/// The display string of each variant is spoken verbatim to the user, so
/// messages are phrased for ears, not logs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChunkError {
    /// The statement has no tokens (empty or all-whitespace line).
    #[error("Empty line.")]
    EmptyStatement,

    /// Chunk length must be a positive token count.
    #[error("Invalid chunk length {0}; must be at least 1.")]
    InvalidChunkLen(usize),
}
