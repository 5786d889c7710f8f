//! Feeding windows and summarising them.

use log::{debug, info, warn};
use serde::Serialize;

use depthscan_source::SourceError;
use depthscan_window::{SlidingSum, WindowValue};

use crate::counter::IncreaseCounter;
use crate::error::ScanError;

/// Outcome of scanning one window size over a whole input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanReport {
    /// Window size `W`
    pub window: usize,
    /// Values fed into the window
    pub values: u64,
    /// Readings taken while the window was full
    pub full_windows: u64,
    /// Full-window sums larger than the one before them
    pub increases: u64,
    /// Last full-window sum, if the window ever filled
    pub last_sum: Option<i128>,
}

/// One window size together with its increase counter.
#[derive(Debug)]
pub struct WindowScan<T = i32> {
    window: usize,
    sum: SlidingSum<T>,
    counter: IncreaseCounter<T>,
    values: u64,
}

impl<T: WindowValue> WindowScan<T> {
    /// Allocate a window of `window` values.
    ///
    /// # Errors
    ///
    /// [`ScanError::Window`] if the window cannot be built, e.g. for size 0.
    pub fn new(window: usize) -> Result<Self, ScanError> {
        let sum = SlidingSum::new(window).map_err(|source| ScanError::Window { window, source })?;
        Ok(Self {
            window,
            sum,
            counter: IncreaseCounter::new(),
            values: 0,
        })
    }

    /// Feed one value; returns the window sum once the window is full.
    pub fn feed(&mut self, value: T) -> Result<Option<T>, ScanError> {
        let reading = self.sum.feed(value).map_err(|source| ScanError::Window {
            window: self.window,
            source,
        })?;
        self.values += 1;

        if !reading.is_full {
            return Ok(None);
        }
        self.counter.observe(reading.sum)?;
        Ok(Some(reading.sum))
    }

    /// The window size `W`.
    pub fn window(&self) -> usize {
        self.window
    }

    /// Stop scanning and release the window.
    pub fn finish(self) -> ScanReport {
        if self.counter.observations() == 0 {
            warn!(
                "window of {} never filled: only {} values were read",
                self.window, self.values
            );
        }

        let report = ScanReport {
            window: self.window,
            values: self.values,
            full_windows: self.counter.observations(),
            increases: self.counter.increases(),
            last_sum: self.counter.last().map(WindowValue::to_i128),
        };
        self.sum.destroy();
        report
    }
}

/// Scan a single window size over plain values.
pub fn count_increases<T, I>(values: I, window: usize) -> Result<ScanReport, ScanError>
where
    T: WindowValue,
    I: IntoIterator<Item = T>,
{
    let mut scan = WindowScan::new(window)?;
    for value in values {
        scan.feed(value)?;
    }
    Ok(scan.finish())
}

/// Scan every window size in `windows` during a single pass over `source`.
///
/// Reports come back in the order of `windows`. The first source or window
/// error aborts the whole scan.
pub fn scan_source<T, I>(source: I, windows: &[usize]) -> Result<Vec<ScanReport>, ScanError>
where
    T: WindowValue,
    I: IntoIterator<Item = Result<T, SourceError>>,
{
    if windows.is_empty() {
        return Err(ScanError::NoWindows);
    }

    let mut scans = windows
        .iter()
        .map(|&window| WindowScan::new(window))
        .collect::<Result<Vec<_>, _>>()?;
    debug!("scanning with windows {windows:?}");

    for value in source {
        let value = value?;
        for scan in &mut scans {
            scan.feed(value)?;
        }
    }

    let reports: Vec<ScanReport> = scans.into_iter().map(WindowScan::finish).collect();
    for report in &reports {
        info!(
            "window {}: {} increases over {} full windows ({} values)",
            report.window, report.increases, report.full_windows, report.values
        );
    }
    Ok(reports)
}
