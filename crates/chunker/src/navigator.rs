use jvox_protocol::{ChunkRequest, ChunkResponse, NavigationCommand, NO_ADJACENT_CHUNK};

use crate::error::{ChunkError, Result};
use crate::token::{Token, Tokenizer, WhitespaceTokenizer};

/// Outcome of one navigation step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkStep {
    /// New cursor position, or [`NO_ADJACENT_CHUNK`] when navigation ran
    /// off either end of the statement.
    pub new_pos: i64,

    /// Text of the chunk to read; empty for the sentinel case.
    pub chunk: String,

    /// Span of the chunk in the statement (start, inclusive stop), absent
    /// for the sentinel case.
    pub span: Option<(usize, usize)>,
}

impl ChunkStep {
    fn no_adjacent_chunk() -> Self {
        Self {
            new_pos: NO_ADJACENT_CHUNK,
            chunk: String::new(),
            span: None,
        }
    }

    /// Whether this step is the no-adjacent-chunk no-op.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.new_pos == NO_ADJACENT_CHUNK
    }
}

/// Maps a cursor offset and a navigation command to the chunk to speak and
/// the cursor's next position.
///
/// Pure and deterministic: holds no mutable state, safe to call repeatedly
/// and concurrently for different inputs.
pub struct ChunkNavigator {
    chunk_len: usize,
    tokenizer: Box<dyn Tokenizer>,
}

impl ChunkNavigator {
    /// Create a navigator reading `chunk_len` tokens per step, with the
    /// default whitespace grammar.
    pub fn new(chunk_len: usize) -> Result<Self> {
        Self::with_tokenizer(chunk_len, Box::new(WhitespaceTokenizer))
    }

    /// Create a navigator with a custom token grammar.
    pub fn with_tokenizer(chunk_len: usize, tokenizer: Box<dyn Tokenizer>) -> Result<Self> {
        if chunk_len == 0 {
            return Err(ChunkError::InvalidChunkLen(chunk_len));
        }
        Ok(Self {
            chunk_len,
            tokenizer,
        })
    }

    /// Tokens per chunk.
    #[must_use]
    pub const fn chunk_len(&self) -> usize {
        self.chunk_len
    }

    /// Execute one navigation step.
    ///
    /// A cursor at or past end-of-line is clamped to the last character
    /// position first. A cursor in whitespace belongs to the nearest chunk
    /// starting at or after it (or the last chunk, for trailing space).
    pub fn navigate(
        &self,
        statement: &str,
        cursor_pos: usize,
        command: NavigationCommand,
    ) -> Result<ChunkStep> {
        self.navigate_with_len(statement, cursor_pos, command, self.chunk_len)
    }

    /// Serve a [`ChunkRequest`] the way the speech backend does, folding
    /// navigation errors and the sentinel into the wire response.
    ///
    /// The request's own `chunk_len` takes precedence over the
    /// navigator's; no audio is attached (synthesis is the backend's job).
    #[must_use]
    pub fn respond(&self, request: &ChunkRequest) -> ChunkResponse {
        let result = if request.chunk_len == 0 {
            Err(ChunkError::InvalidChunkLen(0))
        } else {
            self.navigate_with_len(
                &request.statement,
                request.cursor_pos,
                request.command,
                request.chunk_len,
            )
        };

        match result {
            Ok(step) => ChunkResponse {
                new_pos: step.new_pos,
                chunk_to_read: step.chunk.clone(),
                chunk_string: step.chunk,
                error_message: String::new(),
                audio: None,
            },
            Err(error) => ChunkResponse {
                new_pos: NO_ADJACENT_CHUNK,
                chunk_to_read: String::new(),
                chunk_string: String::new(),
                error_message: error.to_string(),
                audio: None,
            },
        }
    }

    fn navigate_with_len(
        &self,
        statement: &str,
        cursor_pos: usize,
        command: NavigationCommand,
        chunk_len: usize,
    ) -> Result<ChunkStep> {
        let tokens = self.tokenizer.tokenize(statement);
        if tokens.is_empty() {
            return Err(ChunkError::EmptyStatement);
        }

        let cursor = clamp_cursor(statement, cursor_pos);
        let spans = partition(&tokens, chunk_len);
        let current = current_chunk_index(&spans, cursor);

        let target = match command {
            NavigationCommand::Current | NavigationCommand::ReadThenNext => current as i64,
            NavigationCommand::Next => current as i64 + 1,
            NavigationCommand::Previous => current as i64 - 1,
        };
        if target < 0 || target >= spans.len() as i64 {
            log::debug!(
                "no chunk adjacent to index {current} for command {}",
                command.as_str()
            );
            return Ok(ChunkStep::no_adjacent_chunk());
        }

        let (start, stop) = spans[target as usize];
        let new_pos = match command {
            NavigationCommand::ReadThenNext => (stop + 1) as i64,
            _ => start as i64,
        };
        Ok(ChunkStep {
            new_pos,
            chunk: statement[start..=stop].to_string(),
            span: Some((start, stop)),
        })
    }

    /// The full partition of `statement` into chunk spans.
    ///
    /// Every span covers exactly `chunk_len` tokens except possibly the
    /// last.
    pub fn chunk_spans(&self, statement: &str) -> Result<Vec<(usize, usize)>> {
        let tokens = self.tokenizer.tokenize(statement);
        if tokens.is_empty() {
            return Err(ChunkError::EmptyStatement);
        }
        Ok(partition(&tokens, self.chunk_len))
    }
}

/// Clamp a cursor at or past end-of-line to the last character position.
fn clamp_cursor(statement: &str, cursor_pos: usize) -> usize {
    if cursor_pos >= statement.len() {
        statement
            .char_indices()
            .next_back()
            .map_or(0, |(idx, _)| idx)
    } else {
        cursor_pos
    }
}

/// Group tokens into runs of `chunk_len`, returning each run's span.
fn partition(tokens: &[Token], chunk_len: usize) -> Vec<(usize, usize)> {
    tokens
        .chunks(chunk_len)
        .map(|run| (run[0].start, run[run.len() - 1].stop))
        .collect()
}

/// Index of the chunk owning the cursor: the first chunk whose span ends at
/// or after it, falling back to the last chunk for trailing positions.
fn current_chunk_index(spans: &[(usize, usize)], cursor: usize) -> usize {
    spans
        .iter()
        .position(|&(_, stop)| cursor <= stop)
        .unwrap_or(spans.len() - 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const STATEMENT: &str = "x = 1 + 2 # comment";

    fn navigator() -> ChunkNavigator {
        ChunkNavigator::new(3).unwrap()
    }

    #[test]
    fn current_chunk_at_line_start() {
        let step = navigator()
            .navigate(STATEMENT, 0, NavigationCommand::Current)
            .unwrap();
        assert_eq!(step.chunk, "x = 1");
        assert_eq!(step.new_pos, 0);
    }

    #[test]
    fn next_chunk_from_line_start() {
        let step = navigator()
            .navigate(STATEMENT, 0, NavigationCommand::Next)
            .unwrap();
        assert_eq!(step.chunk, "+ 2 #");
        assert_eq!(step.new_pos, 6);
    }

    #[test]
    fn next_past_last_chunk_is_sentinel() {
        // Cursor inside "comment", the last chunk.
        let step = navigator()
            .navigate(STATEMENT, 14, NavigationCommand::Next)
            .unwrap();
        assert!(step.is_noop());
        assert_eq!(step.new_pos, NO_ADJACENT_CHUNK);
        assert_eq!(step.chunk, "");
        assert_eq!(step.span, None);
    }

    #[test]
    fn previous_before_first_chunk_is_sentinel() {
        let step = navigator()
            .navigate(STATEMENT, 0, NavigationCommand::Previous)
            .unwrap();
        assert!(step.is_noop());
    }

    #[test]
    fn next_then_previous_round_trips() {
        let nav = navigator();
        let next = nav.navigate(STATEMENT, 0, NavigationCommand::Next).unwrap();
        let back = nav
            .navigate(STATEMENT, next.new_pos as usize, NavigationCommand::Previous)
            .unwrap();
        assert_eq!(back.new_pos, 0);
        assert_eq!(back.chunk, "x = 1");
    }

    #[test]
    fn read_then_next_walks_the_line() {
        let nav = navigator();
        let first = nav
            .navigate(STATEMENT, 0, NavigationCommand::ReadThenNext)
            .unwrap();
        assert_eq!(first.chunk, "x = 1");
        // Cursor parked just past "1"; the next step reads the next chunk.
        assert_eq!(first.new_pos, 5);
        let second = nav
            .navigate(STATEMENT, first.new_pos as usize, NavigationCommand::ReadThenNext)
            .unwrap();
        assert_eq!(second.chunk, "+ 2 #");
        assert_eq!(second.new_pos, 11);
    }

    #[test]
    fn cursor_in_whitespace_belongs_to_following_chunk() {
        // Offset 5 is the space between "1" and "+".
        let step = navigator()
            .navigate(STATEMENT, 5, NavigationCommand::Current)
            .unwrap();
        assert_eq!(step.chunk, "+ 2 #");
        assert_eq!(step.new_pos, 6);
    }

    #[test]
    fn cursor_past_end_is_clamped_to_last_chunk() {
        let step = navigator()
            .navigate(STATEMENT, STATEMENT.len() + 10, NavigationCommand::Current)
            .unwrap();
        assert_eq!(step.chunk, "comment");
    }

    #[test]
    fn trailing_whitespace_cursor_stays_on_last_chunk() {
        let step = navigator()
            .navigate("x = 1   ", 7, NavigationCommand::Current)
            .unwrap();
        assert_eq!(step.chunk, "x = 1");
        assert_eq!(step.new_pos, 0);
    }

    #[test]
    fn empty_statement_is_an_error() {
        let nav = navigator();
        assert_eq!(
            nav.navigate("", 0, NavigationCommand::Current),
            Err(ChunkError::EmptyStatement)
        );
        assert_eq!(
            nav.navigate("    ", 2, NavigationCommand::Next),
            Err(ChunkError::EmptyStatement)
        );
    }

    #[test]
    fn zero_chunk_len_is_rejected() {
        assert!(matches!(
            ChunkNavigator::new(0),
            Err(ChunkError::InvalidChunkLen(0))
        ));
    }

    #[test]
    fn partition_law_all_but_last_are_full() {
        for chunk_len in 1..=4 {
            let nav = ChunkNavigator::new(chunk_len).unwrap();
            let spans = nav.chunk_spans(STATEMENT).unwrap();
            let tokens = WhitespaceTokenizer.tokenize(STATEMENT);
            // Re-count tokens per span against the tokenizer's output.
            let counts: Vec<usize> = spans
                .iter()
                .map(|&(start, stop)| {
                    tokens
                        .iter()
                        .filter(|t| t.start >= start && t.stop <= stop)
                        .count()
                })
                .collect();
            let (last, full) = counts.split_last().unwrap();
            assert!(full.iter().all(|&c| c == chunk_len));
            assert!(*last >= 1 && *last <= chunk_len);
            assert_eq!(counts.iter().sum::<usize>(), tokens.len());
        }
    }

    #[test]
    fn single_chunk_line_has_no_neighbors() {
        let nav = ChunkNavigator::new(10).unwrap();
        let current = nav.navigate("a b c", 2, NavigationCommand::Current).unwrap();
        assert_eq!(current.chunk, "a b c");
        assert!(nav.navigate("a b c", 2, NavigationCommand::Next).unwrap().is_noop());
        assert!(nav
            .navigate("a b c", 2, NavigationCommand::Previous)
            .unwrap()
            .is_noop());
    }

    #[test]
    fn custom_tokenizer_is_honored() {
        struct CommaTokenizer;
        impl Tokenizer for CommaTokenizer {
            fn tokenize(&self, statement: &str) -> Vec<Token> {
                let mut tokens = Vec::new();
                let mut start = 0;
                for (idx, ch) in statement.char_indices() {
                    if ch == ',' {
                        if idx > start {
                            tokens.push(Token {
                                text: statement[start..idx].to_string(),
                                start,
                                stop: idx - 1,
                            });
                        }
                        start = idx + 1;
                    }
                }
                if start < statement.len() {
                    tokens.push(Token {
                        text: statement[start..].to_string(),
                        start,
                        stop: statement.len() - 1,
                    });
                }
                tokens
            }
        }

        let nav = ChunkNavigator::with_tokenizer(1, Box::new(CommaTokenizer)).unwrap();
        let step = nav.navigate("ab,cd,ef", 0, NavigationCommand::Next).unwrap();
        assert_eq!(step.chunk, "cd");
        assert_eq!(step.new_pos, 3);
    }

    #[test]
    fn respond_maps_success_to_wire_response() {
        use jvox_protocol::ChunkRequest;

        let nav = navigator();
        let response = nav.respond(&ChunkRequest::new(
            STATEMENT,
            0,
            3,
            NavigationCommand::Next,
        ));
        assert_eq!(response.new_pos, 6);
        assert_eq!(response.chunk_string, "+ 2 #");
        assert!(!response.is_error());
        assert!(response.audio.is_none());
    }

    #[test]
    fn respond_request_chunk_len_takes_precedence() {
        use jvox_protocol::ChunkRequest;

        let nav = navigator();
        let response = nav.respond(&ChunkRequest::new(
            STATEMENT,
            0,
            2,
            NavigationCommand::Next,
        ));
        assert_eq!(response.chunk_string, "1 +");
    }

    #[test]
    fn respond_folds_errors_into_error_message() {
        use jvox_protocol::ChunkRequest;

        let nav = navigator();
        let response = nav.respond(&ChunkRequest::new("", 0, 3, NavigationCommand::Current));
        assert_eq!(response.new_pos, NO_ADJACENT_CHUNK);
        assert_eq!(response.error_message, "Empty line.");
        assert!(response.is_error());
    }

    #[test]
    fn respond_sentinel_is_noop() {
        use jvox_protocol::ChunkRequest;

        let nav = navigator();
        let response = nav.respond(&ChunkRequest::new(
            "a b",
            0,
            3,
            NavigationCommand::Previous,
        ));
        assert!(response.is_noop());
    }

    #[test]
    fn multibyte_statement_navigation() {
        let nav = navigator();
        let step = nav.navigate("é = π + 1", 0, NavigationCommand::Current).unwrap();
        assert_eq!(step.chunk, "é = π");
        let next = nav.navigate("é = π + 1", 0, NavigationCommand::Next).unwrap();
        assert_eq!(next.chunk, "+ 1");
    }
}
