//! Common utilities for sapling.
//!
//! This crate provides shared infrastructure used by the tokenizer, the tree
//! builder and the command-line tool:
//! - **Diagnostics** - colored terminal output for advisory parse messages

pub mod diagnostics;
