use super::helpers::trim;
use super::token::{Token, TokenKind};

/// Literal opening a document type declaration. Matched case-sensitively.
pub const DOCTYPE_OPEN: &str = "<!doctype";
/// Literal opening a comment.
pub const COMMENT_OPEN: &str = "<!--";
/// Literal closing a comment.
pub const COMMENT_CLOSE: &str = "-->";
/// Literal opening an end tag.
pub const END_TAG_OPEN: &str = "</";
/// Literal closing a self-closing tag.
pub const SELF_CLOSE: &str = "/>";

/// Scanner turning a complete buffer into a token stream.
///
/// The buffer is treated as single-byte characters and ends at its length or
/// at the first NUL byte, whichever comes first. All scan state is owned by
/// the tokenizer, so independent tokenizers never interfere.
pub struct MarkupTokenizer {
    pub(super) input: Vec<u8>,
    pub(super) current_pos: usize,
    pub(super) token_stream: Vec<Token>,
}

impl MarkupTokenizer {
    /// Create a new tokenizer for the given input.
    pub fn new(input: impl Into<Vec<u8>>) -> Self {
        let mut input = input.into();
        if let Some(sentinel) = input.iter().position(|&c| c == 0) {
            input.truncate(sentinel);
        }
        Self {
            input,
            current_pos: 0,
            token_stream: Vec::new(),
        }
    }

    /// Consume the tokenizer and return the token stream.
    /// Call this after [`run`](Self::run) to get the tokens for the parser.
    #[must_use]
    pub fn into_tokens(self) -> Vec<Token> {
        self.token_stream
    }

    /// Tokens emitted so far.
    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.token_stream
    }

    /// Scan the whole buffer.
    ///
    /// Each round skips whitespace, then dispatches on what follows: a
    /// doctype, a comment, an end tag, a start tag, or a stray character
    /// which is dropped. Every construct is followed by a trailing text scan,
    /// which is the only place text tokens come from.
    pub fn run(&mut self) {
        while !self.at_end() {
            self.skip_whitespace();

            if self.next_few_characters_are(DOCTYPE_OPEN) {
                self.consume_string(DOCTYPE_OPEN);
                self.tokenize_doctype();
                self.tokenize_trailing_text();
                continue;
            }

            if self.next_few_characters_are(COMMENT_OPEN) {
                self.consume_string(COMMENT_OPEN);
                self.tokenize_comment();
                self.tokenize_trailing_text();
                continue;
            }

            if self.next_few_characters_are(END_TAG_OPEN) {
                self.consume_string(END_TAG_OPEN);
                self.tokenize_tag_close();
                self.tokenize_trailing_text();
                continue;
            }

            if self.peek() == Some(b'<') {
                self.advance();
                self.tokenize_tag_open();
                self.tokenize_trailing_text();
                continue;
            }

            // Stray character outside any construct.
            self.advance();
        }
    }

    /// `<!doctype` has been consumed. Everything up to the next `>` becomes a
    /// single keyword token, embedded whitespace included.
    fn tokenize_doctype(&mut self) {
        self.emit(TokenKind::TagOpenMarker, DOCTYPE_OPEN);
        self.skip_whitespace();

        let keyword = self.consume_until(b'>');
        self.emit(TokenKind::DocumentTypeKeyword, keyword);

        if self.peek() == Some(b'>') {
            self.advance();
            self.emit(TokenKind::TagCloseMarker, ">");
        }
    }

    /// `<!--` has been consumed. An unterminated comment runs to the end of input.
    fn tokenize_comment(&mut self) {
        let body = self.consume_until_literal(COMMENT_CLOSE);
        self.emit(TokenKind::Comment, body);
        if self.next_few_characters_are(COMMENT_CLOSE) {
            self.consume_string(COMMENT_CLOSE);
        }
    }

    /// `</` has been consumed.
    fn tokenize_tag_close(&mut self) {
        self.emit(TokenKind::TagEndMarker, END_TAG_OPEN);
        self.skip_whitespace();

        let name = self.consume_name();
        self.emit(TokenKind::TagName, name);

        self.skip_whitespace();
        if self.peek() == Some(b'>') {
            self.advance();
            self.emit(TokenKind::TagCloseMarker, ">");
        }
    }

    /// `<` has been consumed.
    fn tokenize_tag_open(&mut self) {
        self.emit(TokenKind::TagOpenMarker, "<");
        self.skip_whitespace();

        let name = self.consume_name();
        self.emit(TokenKind::TagName, name);

        while !self.at_end()
            && !self.next_few_characters_are(SELF_CLOSE)
            && self.peek() != Some(b'>')
        {
            self.tokenize_attribute();
        }

        if self.next_few_characters_are(SELF_CLOSE) {
            self.consume_string(SELF_CLOSE);
            self.emit(TokenKind::SelfCloseMarker, SELF_CLOSE);
        }

        if self.peek() == Some(b'>') {
            self.advance();
            self.emit(TokenKind::TagCloseMarker, ">");
        }
    }

    /// One round of the attribute loop: an optional name, then an optional
    /// `="value"`. Values are only recognised in double quotes and are taken
    /// verbatim, with no escapes.
    ///
    /// A round that consumes nothing steps over one character, so stray
    /// punctuation inside a tag is dropped and the loop always terminates.
    fn tokenize_attribute(&mut self) {
        let round_start = self.current_pos;
        self.skip_whitespace();

        let name = self.consume_name();
        if !name.is_empty() {
            self.emit(TokenKind::AttributeName, name);
        }

        self.skip_whitespace();

        if self.peek() == Some(b'=') {
            self.advance();
            self.skip_whitespace();
            if self.peek() == Some(b'"') {
                self.advance();
                let value = self.consume_until(b'"');
                if !value.is_empty() {
                    self.emit(TokenKind::AttributeValue, value);
                }
                // Closing quote.
                self.advance();
            }
        }

        if self.current_pos == round_start {
            self.advance();
        }
    }

    /// After a construct: unless the next thing is `<`, everything up to the
    /// next `<` is one text token, trimmed.
    fn tokenize_trailing_text(&mut self) {
        self.skip_whitespace();
        if self.peek() == Some(b'<') {
            return;
        }

        let text = self.consume_until(b'<');
        let text = trim(&text);
        if !text.is_empty() {
            self.emit(TokenKind::Text, text);
        }
    }
}

/// Tokenize a whole buffer in one call.
#[must_use]
pub fn tokenize(input: impl Into<Vec<u8>>) -> Vec<Token> {
    let mut tokenizer = MarkupTokenizer::new(input);
    tokenizer.run();
    tokenizer.into_tokens()
}
