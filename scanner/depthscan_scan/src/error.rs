//! Errors that abort a scan.

use depthscan_source::SourceError;
use depthscan_window::WindowError;

/// An error that aborts a scan.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    /// A window could not be built or overflowed while being fed.
    #[error("window of {window}: {source}")]
    Window {
        /// Size of the failing window.
        window: usize,
        /// What went wrong inside it.
        source: WindowError,
    },

    /// The value source failed.
    #[error(transparent)]
    Source(#[from] SourceError),

    /// More increases than a `u64` can count.
    #[error("increase counter overflowed")]
    CounterOverflow,

    /// The scan was started without any window sizes.
    #[error("no window sizes configured")]
    NoWindows,
}
