//! Reading the input document.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Where the markup comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// A file on disk.
    File(PathBuf),
    /// Markup given directly on the command line.
    Inline(String),
}

/// Error type for document loading.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// Failed to read file
    #[error("failed to read '{}': {source}", .path.display())]
    Read {
        /// The file that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },
    /// Neither a path nor inline markup was given
    #[error("no input: pass a file path or --html '<markup>'")]
    NoInput,
}

impl Source {
    /// Pick the input source from the command line, preferring inline markup.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::NoInput`] when neither is present.
    pub fn from_args(path: Option<&Path>, html: Option<&str>) -> Result<Self, LoadError> {
        match (html, path) {
            (Some(html), _) => Ok(Self::Inline(html.to_string())),
            (None, Some(path)) => Ok(Self::File(path.to_path_buf())),
            (None, None) => Err(LoadError::NoInput),
        }
    }

    /// Read the whole document into memory. Bytes are passed through as is;
    /// no encoding is assumed.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Read`] if the file cannot be read.
    pub fn read(&self) -> Result<Vec<u8>, LoadError> {
        match self {
            Self::File(path) => fs::read(path).map_err(|source| LoadError::Read {
                path: path.clone(),
                source,
            }),
            Self::Inline(html) => Ok(html.as_bytes().to_vec()),
        }
    }
}
