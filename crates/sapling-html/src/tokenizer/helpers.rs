//! Scanning primitives for the tokenizer.
//!
//! The free functions are pure: they take the buffer and a cursor position
//! and return a new position, never reading past the end of the buffer.
//! The `impl MarkupTokenizer` blocks wrap them around the tokenizer's own
//! cursor.

use super::scanner::MarkupTokenizer;
use super::token::{Token, TokenKind};

/// Characters treated as whitespace by every scan.
pub const WHITESPACE: [char; 4] = [' ', '\r', '\n', '\t'];

// =============================================================================
// Character Classification
// =============================================================================

/// ASCII letter.
#[must_use]
pub const fn is_alpha(c: u8) -> bool {
    c.is_ascii_alphabetic()
}

/// ASCII decimal digit.
#[must_use]
pub const fn is_digit(c: u8) -> bool {
    c.is_ascii_digit()
}

/// Space, carriage return, line feed or tab.
#[must_use]
pub const fn is_space(c: u8) -> bool {
    matches!(c, b' ' | b'\r' | b'\n' | b'\t')
}

/// A character allowed in tag and attribute names: letter, digit or underscore.
#[must_use]
pub const fn is_letter(c: u8) -> bool {
    is_alpha(c) || is_digit(c) || c == b'_'
}

// =============================================================================
// Cursor Primitives
// =============================================================================

/// Whether `input[pos..]` begins with `literal`. Case-sensitive.
#[must_use]
pub fn starts_with(input: &[u8], pos: usize, literal: &[u8]) -> bool {
    input.get(pos..).is_some_and(|rest| rest.starts_with(literal))
}

/// Advance from `pos` while `pred` holds. Returns the first position where it
/// does not, or the end of the buffer.
#[must_use]
pub fn read_while(input: &[u8], pos: usize, pred: impl Fn(u8) -> bool) -> usize {
    let mut end = pos;
    while end < input.len() && pred(input[end]) {
        end += 1;
    }
    end
}

/// Advance from `pos` until `pred` holds. Returns that position, or the end
/// of the buffer.
#[must_use]
pub fn read_until(input: &[u8], pos: usize, pred: impl Fn(u8) -> bool) -> usize {
    read_while(input, pos, |c| !pred(c))
}

/// Position of the next occurrence of `literal` at or after `pos`, or the end
/// of the buffer if there is none.
#[must_use]
pub fn find_literal(input: &[u8], pos: usize, literal: &[u8]) -> usize {
    let mut end = pos;
    while end < input.len() && !starts_with(input, end, literal) {
        end += 1;
    }
    end.min(input.len())
}

/// Skip whitespace starting at `pos`.
#[must_use]
pub fn skip_whitespace(input: &[u8], pos: usize) -> usize {
    read_while(input, pos, is_space)
}

/// Strip leading and trailing whitespace, keeping interior whitespace as is.
#[must_use]
pub fn trim(s: &str) -> &str {
    s.trim_matches(WHITESPACE)
}

// =============================================================================
// Input/Character Helpers
// =============================================================================

impl MarkupTokenizer {
    /// The character under the cursor, or `None` at the end of input.
    pub(super) fn peek(&self) -> Option<u8> {
        self.input.get(self.current_pos).copied()
    }

    pub(super) fn at_end(&self) -> bool {
        self.current_pos >= self.input.len()
    }

    /// Move forward one character. A no-op at the end of input.
    pub(super) fn advance(&mut self) {
        self.advance_by(1);
    }

    pub(super) fn advance_by(&mut self, count: usize) {
        self.current_pos = (self.current_pos + count).min(self.input.len());
    }

    /// Check if the next few characters match the target string exactly.
    pub(super) fn next_few_characters_are(&self, target: &str) -> bool {
        starts_with(&self.input, self.current_pos, target.as_bytes())
    }

    /// Consume the given string from the input.
    /// Caller must have already verified the characters are present.
    pub(super) fn consume_string(&mut self, target: &str) {
        self.advance_by(target.len());
    }

    pub(super) fn skip_whitespace(&mut self) {
        self.current_pos = skip_whitespace(&self.input, self.current_pos);
    }

    /// Consume a maximal run of name characters and return it.
    pub(super) fn consume_name(&mut self) -> String {
        let start = self.current_pos;
        self.current_pos = read_while(&self.input, start, is_letter);
        self.text_between(start, self.current_pos)
    }

    /// Consume up to (not including) the next `stop` character or the end of
    /// input, and return what was consumed.
    pub(super) fn consume_until(&mut self, stop: u8) -> String {
        let start = self.current_pos;
        self.current_pos = read_until(&self.input, start, |c| c == stop);
        self.text_between(start, self.current_pos)
    }

    /// Consume up to (not including) the next occurrence of `literal` or the
    /// end of input, and return what was consumed.
    pub(super) fn consume_until_literal(&mut self, literal: &str) -> String {
        let start = self.current_pos;
        self.current_pos = find_literal(&self.input, start, literal.as_bytes());
        self.text_between(start, self.current_pos)
    }

    fn text_between(&self, start: usize, end: usize) -> String {
        String::from_utf8_lossy(&self.input[start..end]).into_owned()
    }
}

// =============================================================================
// Token Emission Helpers
// =============================================================================

impl MarkupTokenizer {
    /// Append a token to the output stream.
    pub(super) fn emit(&mut self, kind: TokenKind, value: impl Into<String>) {
        self.token_stream.push(Token::new(kind, value));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_characters() {
        assert!(is_alpha(b'q') && is_alpha(b'Q'));
        assert!(!is_alpha(b'1'));
        assert!(is_digit(b'7'));
        assert!(is_letter(b'_') && is_letter(b'9') && is_letter(b'z'));
        assert!(!is_letter(b'-') && !is_letter(b'!'));
        assert!(is_space(b'\r') && is_space(b'\t'));
        assert!(!is_space(0x0C));
    }

    #[test]
    fn cursor_primitives_stop_at_end() {
        let input = b"  ab_1-x";
        assert_eq!(skip_whitespace(input, 0), 2);
        assert_eq!(read_while(input, 2, is_letter), 6);
        assert_eq!(read_until(input, 0, |c| c == b'x'), 7);
        assert_eq!(read_until(input, 0, |c| c == b'?'), input.len());
        assert_eq!(find_literal(b"a-->b", 0, b"-->"), 1);
        assert_eq!(find_literal(b"a--b", 0, b"-->"), 4);
        assert_eq!(find_literal(b"ab", 9, b"-->"), 2);
        assert!(starts_with(input, 2, b"ab"));
        assert!(!starts_with(input, 7, b"xy"));
        assert!(!starts_with(input, 42, b"x"));
    }

    #[test]
    fn trim_keeps_interior_whitespace() {
        assert_eq!(trim("  hello world \r\n"), "hello world");
        assert_eq!(trim("\t"), "");
        assert_eq!(trim("a  b"), "a  b");
    }
}
