//! Sliding window accumulator for depthscan
//!
//! This crate keeps the sum of the most recent `W` values of an unbounded
//! integer stream in constant memory. Values are stored in a fixed-capacity
//! ring buffer allocated once at construction, and every update of the
//! running sum is overflow-checked: an addition that leaves the range of the
//! element type is reported as [`WindowError::ArithmeticOverflow`] instead of
//! wrapping.
//!
//! ```
//! use depthscan_window::SlidingSum;
//!
//! let mut window = SlidingSum::<i32>::new(3)?;
//! for depth in [199, 200, 208, 210] {
//!     window.feed(depth)?;
//! }
//! assert_eq!(window.sum(), 618);
//! assert!(window.is_full());
//! # Ok::<(), depthscan_window::WindowError>(())
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod ring;
pub mod sum;
pub mod value;

// Re-export the main types for convenience
pub use error::WindowError;
pub use ring::FixedRing;
pub use sum::{SlidingSum, WindowReading};
pub use value::WindowValue;
