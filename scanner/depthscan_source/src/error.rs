//! Errors produced while reading values.

use std::io;
use std::path::PathBuf;

/// An error raised by a [`crate::NumberSource`].
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// The input file could not be opened.
    #[error("failed to open '{}': {source}", .path.display())]
    Open {
        /// Path that was passed in.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Reading from the underlying reader failed.
    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),

    /// A line did not hold an integer of the requested type.
    #[error("line {line}: cannot parse {text:?} as an integer")]
    Parse {
        /// 1-based line number.
        line: usize,
        /// The line's text after trimming.
        text: String,
    },

    /// A line exceeded the configured maximum length.
    #[error("line {line} exceeds the limit of {max} bytes ({len} bytes read)")]
    LineTooLong {
        /// 1-based line number.
        line: usize,
        /// Bytes of the line read before giving up, without its terminator.
        /// Reading stops just past the limit, so this is a lower bound.
        len: usize,
        /// Configured limit.
        max: usize,
    },
}
