//! Line-oriented integer reader.
//!
//! # Examples
//!
//! ```
//! use depthscan_source::{NumberSource, SourceConfig};
//!
//! let values: Vec<i32> = NumberSource::from_text("199\n200\n\n208\n", SourceConfig::default())
//!     .collect::<Result<_, _>>()?;
//! assert_eq!(values, vec![199, 200, 208]);
//! # Ok::<(), depthscan_source::SourceError>(())
//! ```

use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::marker::PhantomData;
use std::path::Path;
use std::str::FromStr;

use log::{debug, trace};

use crate::error::SourceError;

/// Configuration for a [`NumberSource`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceConfig {
    /// Skip lines that are empty after trimming instead of failing on them
    pub skip_blank_lines: bool,
    /// Strip surrounding whitespace before parsing
    pub trim: bool,
    /// Reject lines longer than this many bytes; at most this many bytes
    /// plus the terminator are buffered per line
    pub max_line_len: Option<usize>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            skip_blank_lines: true,
            trim: true,
            max_line_len: None,
        }
    }
}

/// A lazy, non-restartable sequence of integers read one per line.
///
/// Yields `Result<T, SourceError>`; the first error ends the sequence.
pub struct NumberSource<R, T = i32> {
    reader: R,
    config: SourceConfig,
    /// Reused line buffer
    line: Vec<u8>,
    /// Lines consumed so far, including skipped ones
    lines_read: usize,
    /// Set once the reader is exhausted or has failed
    done: bool,
    _value: PhantomData<fn() -> T>,
}

impl<R: BufRead, T: FromStr> NumberSource<R, T> {
    /// Read values from any buffered reader.
    pub fn from_reader(reader: R, config: SourceConfig) -> Self {
        Self {
            reader,
            config,
            line: Vec::new(),
            lines_read: 0,
            done: false,
            _value: PhantomData,
        }
    }

    /// Number of lines consumed so far.
    pub fn lines_read(&self) -> usize {
        self.lines_read
    }

    fn next_value(&mut self) -> Option<Result<T, SourceError>> {
        loop {
            self.line.clear();
            // With a limit, never buffer more than the line, '\r' and '\n'.
            let read = match self.config.max_line_len {
                Some(max) => {
                    let limit = (max as u64).saturating_add(2);
                    (&mut self.reader)
                        .take(limit)
                        .read_until(b'\n', &mut self.line)
                }
                None => self.reader.read_until(b'\n', &mut self.line),
            };
            match read {
                Ok(0) => {
                    debug!("input exhausted after {} lines", self.lines_read);
                    return None;
                }
                Ok(_) => {}
                Err(e) => return Some(Err(e.into())),
            }
            self.lines_read += 1;

            let raw = self.line.strip_suffix(b"\n").unwrap_or(&self.line[..]);
            let raw = raw.strip_suffix(b"\r").unwrap_or(raw);

            if let Some(max) = self.config.max_line_len {
                if raw.len() > max {
                    return Some(Err(SourceError::LineTooLong {
                        line: self.lines_read,
                        len: raw.len(),
                        max,
                    }));
                }
            }

            let raw = match std::str::from_utf8(raw) {
                Ok(raw) => raw,
                Err(e) => return Some(Err(io::Error::new(io::ErrorKind::InvalidData, e).into())),
            };
            let text = if self.config.trim { raw.trim() } else { raw };
            if text.is_empty() && self.config.skip_blank_lines {
                trace!("skipping blank line {}", self.lines_read);
                continue;
            }

            return Some(text.parse::<T>().map_err(|_| SourceError::Parse {
                line: self.lines_read,
                text: text.to_string(),
            }));
        }
    }
}

impl<T: FromStr> NumberSource<BufReader<File>, T> {
    /// Open `path` and read values from it.
    pub fn from_file(path: impl AsRef<Path>, config: SourceConfig) -> Result<Self, SourceError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| SourceError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("reading values from {}", path.display());
        Ok(Self::from_reader(BufReader::new(file), config))
    }
}

impl<'a, T: FromStr> NumberSource<&'a [u8], T> {
    /// Read values from an in-memory string.
    pub fn from_text(text: &'a str, config: SourceConfig) -> Self {
        Self::from_reader(text.as_bytes(), config)
    }
}

impl<R: BufRead, T: FromStr> Iterator for NumberSource<R, T> {
    type Item = Result<T, SourceError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let item = self.next_value();
        if !matches!(item, Some(Ok(_))) {
            self.done = true;
        }
        item
    }
}
