//! Tree builder module.

/// Token-stream to tree construction.
pub mod builder;

pub use builder::{DOCTYPE_TAG, MarkupParser, ParseIssue};
