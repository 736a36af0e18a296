//! Markup tokenizer and tree builder for sapling.
//!
//! # Scope
//!
//! Parsing is two passes over one fully resident buffer:
//! - **Tokenizer** - a hand-written scanner producing a flat token stream
//!   (doctype, tag markers, names, attributes, comments, text)
//! - **Tree builder** - consumes the tokens and reconstructs nesting, closing
//!   tags by walking the chain of open ancestors
//!
//! Parsing is lenient: malformed input always yields a tree. Unresolved
//! closing tags are reported as [`ParseIssue`]s, and tags without a closing
//! tag stay marked as not closed.
//!
//! # Not Handled
//!
//! - Character entity decoding
//! - CDATA sections and namespaces
//! - Raw text content (scripts, styles)
//! - Encoding detection

/// Tree construction from tokens.
pub mod parser;
/// Tokenizer for converting input into tokens.
pub mod tokenizer;

pub use parser::{MarkupParser, ParseIssue};
pub use sapling_dom::print_tree;
pub use tokenizer::{MarkupTokenizer, Token, TokenKind, tokenize};

use sapling_dom::DomTree;

/// Everything produced by one parse.
#[derive(Debug, Clone)]
pub struct ParsedDocument {
    /// Token stream from the first pass.
    pub tokens: Vec<Token>,
    /// The tree from the second pass.
    pub tree: DomTree,
    /// Issues raised while building the tree.
    pub issues: Vec<ParseIssue>,
}

/// Tokenize and build in one call, keeping every intermediate result.
#[must_use]
pub fn parse_document(input: impl Into<Vec<u8>>) -> ParsedDocument {
    let tokens = tokenize(input);
    let (tree, issues) = MarkupParser::new(tokens.clone()).run_with_issues();
    ParsedDocument {
        tokens,
        tree,
        issues,
    }
}

/// Tokenize and build, returning only the tree.
#[must_use]
pub fn parse(input: impl Into<Vec<u8>>) -> DomTree {
    MarkupParser::new(tokenize(input)).run()
}
