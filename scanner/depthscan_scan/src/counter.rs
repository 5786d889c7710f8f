//! Counting increases between consecutive full-window sums.

use crate::error::ScanError;

/// Counts how often an observation is strictly larger than the previous one.
///
/// The first observation only sets the baseline.
#[derive(Debug, Clone)]
pub struct IncreaseCounter<T> {
    previous: Option<T>,
    increases: u64,
    observations: u64,
}

impl<T: PartialOrd + Copy> IncreaseCounter<T> {
    /// A counter with no baseline yet.
    pub fn new() -> Self {
        Self {
            previous: None,
            increases: 0,
            observations: 0,
        }
    }

    /// Record `value`, returning whether it was an increase.
    pub fn observe(&mut self, value: T) -> Result<bool, ScanError> {
        let increased = matches!(self.previous, Some(prev) if value > prev);
        if increased {
            self.increases = self
                .increases
                .checked_add(1)
                .ok_or(ScanError::CounterOverflow)?;
        }
        self.observations = self
            .observations
            .checked_add(1)
            .ok_or(ScanError::CounterOverflow)?;
        self.previous = Some(value);
        Ok(increased)
    }

    /// Observations strictly larger than the one before them.
    pub fn increases(&self) -> u64 {
        self.increases
    }

    /// Observations recorded, including the baseline.
    pub fn observations(&self) -> u64 {
        self.observations
    }

    /// The most recent observation.
    pub fn last(&self) -> Option<T> {
        self.previous
    }
}

impl<T: PartialOrd + Copy> Default for IncreaseCounter<T> {
    fn default() -> Self {
        Self::new()
    }
}
