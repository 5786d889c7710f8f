//! Errors raised by the sliding window.

/// An error that can occur while building or feeding a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum WindowError {
    /// The window was asked to hold zero values.
    #[error("window capacity must be at least 1")]
    InvalidCapacity,

    /// Backing storage for the window could not be reserved.
    #[error("cannot allocate storage for a window of {capacity} values")]
    OutOfMemory {
        /// The capacity that was requested.
        capacity: usize,
    },

    /// The running sum left the range of the element type.
    ///
    /// The window that reported this is poisoned and refuses further values.
    #[error("window sum overflowed while feeding value #{position}")]
    ArithmeticOverflow {
        /// 1-based index of the value whose feed overflowed.
        position: u64,
    },

    /// The window overflowed earlier and its contents are no longer reliable.
    #[error("window was poisoned by an earlier overflow")]
    Poisoned,
}
