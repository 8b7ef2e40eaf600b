use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;

static ANSI_ESCAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\x1b\[[0-9;]*m").expect("valid ANSI escape pattern"));

static LINE_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"line (\d+)").expect("valid line number pattern"));

/// Remove ANSI color escape sequences from kernel output.
#[must_use]
pub fn strip_ansi(text: &str) -> Cow<'_, str> {
    ANSI_ESCAPE.replace_all(text, "")
}

/// Extract the failing line number from a traceback.
///
/// Joins the frames, strips ANSI colors, and returns the number of the
/// first `line <N>` occurrence (1-based). Returns `-1` when no such
/// pattern exists, meaning the line is unknown.
#[must_use]
pub fn error_line_from_traceback(traceback: &[String]) -> i64 {
    let joined = traceback.join("\n");
    let clean = strip_ansi(&joined);

    LINE_NUMBER
        .captures(&clean)
        .and_then(|caps| caps[1].parse::<i64>().ok())
        .unwrap_or(-1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn strips_color_codes() {
        let colored = "\u{1b}[0;31mTypeError\u{1b}[0m: bad operand";
        assert_eq!(strip_ansi(colored), "TypeError: bad operand");
    }

    #[test]
    fn finds_first_line_number() {
        let traceback = vec![
            "Traceback (most recent call last)".to_string(),
            "Cell \u{1b}[0;32mIn[2], line 3\u{1b}[0m".to_string(),
            "  File \"x.py\", line 7".to_string(),
        ];
        assert_eq!(error_line_from_traceback(&traceback), 3);
    }

    #[test]
    fn line_number_split_by_color_codes_is_found() {
        // The escape sequence sits between "line" and the digits until
        // stripped.
        let traceback = vec!["Cell In[1], line \u{1b}[1;32m5\u{1b}[0m".to_string()];
        assert_eq!(error_line_from_traceback(&traceback), 5);
    }

    #[test]
    fn missing_line_number_is_unknown() {
        let traceback = vec!["KeyboardInterrupt".to_string()];
        assert_eq!(error_line_from_traceback(&traceback), -1);
        assert_eq!(error_line_from_traceback(&[]), -1);
    }
}
