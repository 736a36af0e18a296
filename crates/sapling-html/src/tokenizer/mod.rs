//! Markup tokenizer module.
//!
//! Turns a complete in-memory buffer into a flat sequence of [`Token`]s.
//! The tokenizer is purely lexical: it knows nothing about nesting.

/// Scanning primitives and cursor helpers.
pub mod helpers;
/// The scanner's dispatch loop and per-construct scans.
pub mod scanner;
/// Token types produced by the tokenizer.
pub mod token;

pub use scanner::{MarkupTokenizer, tokenize};
pub use token::{Token, TokenKind};
