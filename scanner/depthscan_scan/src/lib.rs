//! Window scans for depthscan
//!
//! This crate is the driver around [`depthscan_window::SlidingSum`]: it pulls
//! values from a source, feeds one accumulator per configured window size
//! and counts how often a full-window sum is larger than the one before it.

#![warn(missing_docs)]

pub mod config;
pub mod counter;
pub mod error;
pub mod scan;

pub use config::ScanConfig;
pub use counter::IncreaseCounter;
pub use error::ScanError;
pub use scan::{count_increases, scan_source, ScanReport, WindowScan};
