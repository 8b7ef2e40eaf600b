/// A single token within a statement, with its byte span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Token text.
    pub text: String,

    /// Byte offset of the token's first character.
    pub start: usize,

    /// Byte offset of the token's last byte (inclusive), so `stop + 1` is
    /// always a character boundary.
    pub stop: usize,
}

impl Token {
    /// Check if a cursor offset falls within this token's span.
    #[must_use]
    pub const fn span_contains(&self, pos: usize) -> bool {
        pos >= self.start && pos <= self.stop
    }
}

/// Tokenization grammar for a line of source text.
///
/// The authoritative grammar lives in the speech backend; this seam lets an
/// integration substitute it for the whitespace default when the two must
/// agree exactly.
pub trait Tokenizer: Send + Sync {
    /// Split `statement` into tokens with spans. Whitespace-only input
    /// yields an empty vector.
    fn tokenize(&self, statement: &str) -> Vec<Token>;
}

/// Default grammar: maximal runs of non-whitespace characters.
#[derive(Debug, Clone, Copy, Default)]
pub struct WhitespaceTokenizer;

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, statement: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut run_start: Option<usize> = None;
        let mut run_end = 0;

        for (idx, ch) in statement.char_indices() {
            if ch.is_whitespace() {
                if let Some(start) = run_start.take() {
                    tokens.push(Token {
                        text: statement[start..run_end].to_string(),
                        start,
                        stop: run_end - 1,
                    });
                }
            } else {
                if run_start.is_none() {
                    run_start = Some(idx);
                }
                run_end = idx + ch.len_utf8();
            }
        }

        if let Some(start) = run_start {
            tokens.push(Token {
                text: statement[start..run_end].to_string(),
                start,
                stop: run_end - 1,
            });
        }

        tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn spans(statement: &str) -> Vec<(String, usize, usize)> {
        WhitespaceTokenizer
            .tokenize(statement)
            .into_iter()
            .map(|t| (t.text, t.start, t.stop))
            .collect()
    }

    #[test]
    fn splits_on_whitespace_runs() {
        assert_eq!(
            spans("x = 1"),
            vec![
                ("x".to_string(), 0, 0),
                ("=".to_string(), 2, 2),
                ("1".to_string(), 4, 4),
            ]
        );
    }

    #[test]
    fn handles_leading_and_multiple_spaces() {
        assert_eq!(
            spans("  foo   bar"),
            vec![("foo".to_string(), 2, 4), ("bar".to_string(), 8, 10)]
        );
    }

    #[test]
    fn whitespace_only_yields_nothing() {
        assert!(spans("").is_empty());
        assert!(spans("   \t ").is_empty());
    }

    #[test]
    fn multibyte_token_spans() {
        // "é" occupies bytes 0..2, so its inclusive stop is 1 and the next
        // boundary (stop + 1) is valid for slicing.
        let tokens = WhitespaceTokenizer.tokenize("é = π");
        assert_eq!(tokens[0].text, "é");
        assert_eq!((tokens[0].start, tokens[0].stop), (0, 1));
        assert_eq!(tokens[1].text, "=");
        assert_eq!((tokens[1].start, tokens[1].stop), (3, 3));
        assert_eq!(tokens[2].text, "π");
        assert_eq!((tokens[2].start, tokens[2].stop), (5, 6));
    }

    #[test]
    fn span_contains_is_inclusive() {
        let token = Token {
            text: "abc".to_string(),
            start: 4,
            stop: 6,
        };
        assert!(token.span_contains(4));
        assert!(token.span_contains(6));
        assert!(!token.span_contains(3));
        assert!(!token.span_contains(7));
    }
}
