//! Scan configuration and its environment overrides.
//!
//! Recognised variables:
//! - `DEPTHSCAN_WINDOWS`: comma-separated window sizes, e.g. `1,3`
//! - `DEPTHSCAN_SKIP_BLANK`: `1`/`true` or `0`/`false`
//! - `DEPTHSCAN_MAX_LINE_LEN`: maximum line length in bytes

use log::warn;

use depthscan_source::SourceConfig;

/// Comma-separated window sizes.
pub const ENV_WINDOWS: &str = "DEPTHSCAN_WINDOWS";
/// Whether blank lines are skipped.
pub const ENV_SKIP_BLANK: &str = "DEPTHSCAN_SKIP_BLANK";
/// Maximum line length in bytes.
pub const ENV_MAX_LINE_LEN: &str = "DEPTHSCAN_MAX_LINE_LEN";

/// Settings for one scan: which windows to run and how to read input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanConfig {
    /// Window sizes scanned in one pass
    pub windows: Vec<usize>,
    /// How the value source reads lines
    pub source: SourceConfig,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            windows: vec![1, 3],
            source: SourceConfig::default(),
        }
    }
}

impl ScanConfig {
    /// Defaults overridden by the process environment.
    pub fn from_env() -> Self {
        Self::default().with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides looked up through `lookup`. Unparseable values are
    /// logged and ignored.
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(s) = lookup(ENV_WINDOWS) {
            match parse_windows(&s) {
                Some(windows) => self.windows = windows,
                None => warn!("ignoring {ENV_WINDOWS}={s:?}: expected sizes like 1,3"),
            }
        }
        if let Some(s) = lookup(ENV_SKIP_BLANK) {
            match parse_flag(&s) {
                Some(skip) => self.source.skip_blank_lines = skip,
                None => warn!("ignoring {ENV_SKIP_BLANK}={s:?}: expected 0 or 1"),
            }
        }
        if let Some(s) = lookup(ENV_MAX_LINE_LEN) {
            match s.trim().parse::<usize>() {
                Ok(n) => self.source.max_line_len = Some(n),
                Err(_) => warn!("ignoring {ENV_MAX_LINE_LEN}={s:?}: expected a byte count"),
            }
        }
        self
    }
}

fn parse_windows(s: &str) -> Option<Vec<usize>> {
    let windows = s
        .split(',')
        .map(|part| part.trim().parse::<usize>().ok())
        .collect::<Option<Vec<_>>>()?;
    if windows.is_empty() {
        None
    } else {
        Some(windows)
    }
}

fn parse_flag(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Some(true),
        "0" | "false" | "no" => Some(false),
        _ => None,
    }
}
