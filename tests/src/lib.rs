//! Shared fixtures for the depthscan integration tests.

use depthscan_scan::{scan_source, ScanError, ScanReport};
use depthscan_source::{NumberSource, SourceConfig};

/// The sonar sweep report used throughout the integration tests.
pub const SONAR_REPORT: &str = "199\n200\n208\n210\n200\n207\n240\n269\n260\n263\n";

/// Increases expected from [`SONAR_REPORT`] for windows 1 and 3.
pub const SONAR_INCREASES: [(usize, u64); 2] = [(1, 7), (3, 5)];

/// Scan `text` as an `i32` report with the default source configuration.
pub fn scan_text(text: &str, windows: &[usize]) -> Result<Vec<ScanReport>, ScanError> {
    let source = NumberSource::<_, i32>::from_text(text, SourceConfig::default());
    scan_source(source, windows)
}
