//! Integer sources for depthscan
//!
//! A [`NumberSource`] turns any buffered reader into a lazy sequence of
//! integers, one per line. It never reads ahead more than one line and
//! cannot be restarted; once it reports an error it stops.

#![warn(missing_docs)]

pub mod error;
pub mod source;

pub use error::SourceError;
pub use source::{NumberSource, SourceConfig};
