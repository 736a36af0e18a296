use core::fmt;

use strum_macros::Display;

/// The lexical category of a [`Token`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum TokenKind {
    /// Everything between `<!doctype` and the next `>`, verbatim.
    DocumentTypeKeyword,
    /// `<`, or `<!doctype` when opening a document type declaration.
    TagOpenMarker,
    /// `>`
    TagCloseMarker,
    /// `</`
    TagEndMarker,
    /// `/>`
    SelfCloseMarker,
    /// A run of letters, digits and underscores following `<` or `</`.
    TagName,
    /// A run of letters, digits and underscores inside a start tag.
    AttributeName,
    /// The contents of a double-quoted attribute value, without the quotes.
    AttributeValue,
    /// Comment body between `<!--` and `-->`, untrimmed.
    Comment,
    /// Trimmed character data between constructs.
    Text,
}

/// One lexical unit.
///
/// Tokens carry no tree information; only their order matters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// What was scanned.
    pub kind: TokenKind,
    /// The scanned text. Markers carry their literal spelling.
    pub value: String,
}

impl Token {
    /// Create a token of `kind` holding `value`.
    #[must_use]
    pub fn new(kind: TokenKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }

    /// Returns true if this token is of the given kind.
    #[must_use]
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?})", self.kind, self.value)
    }
}
