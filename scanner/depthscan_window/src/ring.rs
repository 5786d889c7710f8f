//! Fixed-capacity circular buffer backing the window.
//!
//! The buffer reserves all of its storage up front and never reallocates.
//! While it fills, values are appended behind the cursor; once it is full the
//! cursor always points at the oldest value, which is the next one to be
//! overwritten.

use crate::error::WindowError;

/// A circular buffer holding at most `capacity` values.
#[derive(Debug)]
pub struct FixedRing<T> {
    /// Written slots; grows to `capacity` and then stays there
    slots: Vec<T>,
    /// Maximum number of resident values
    capacity: usize,
    /// Slot written by the next push
    cursor: usize,
}

impl<T: Copy> FixedRing<T> {
    /// Reserve storage for exactly `capacity` values.
    ///
    /// Fails with [`WindowError::InvalidCapacity`] for a zero capacity and
    /// with [`WindowError::OutOfMemory`] when the reservation is refused.
    pub fn with_capacity(capacity: usize) -> Result<Self, WindowError> {
        if capacity == 0 {
            return Err(WindowError::InvalidCapacity);
        }

        let mut slots = Vec::new();
        slots
            .try_reserve_exact(capacity)
            .map_err(|_| WindowError::OutOfMemory { capacity })?;

        Ok(Self {
            slots,
            capacity,
            cursor: 0,
        })
    }

    /// Maximum number of values the ring holds.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of resident values.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether nothing has been pushed yet.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Whether every slot has been written at least once.
    pub fn is_full(&self) -> bool {
        self.slots.len() == self.capacity
    }

    /// Index of the slot the next push writes to.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The value the next push evicts, if the ring is full.
    pub fn oldest(&self) -> Option<T> {
        if self.is_full() {
            Some(self.slots[self.cursor])
        } else {
            None
        }
    }

    /// Write `value` at the cursor and advance it, returning the evicted value.
    pub fn push(&mut self, value: T) -> Option<T> {
        let evicted = if self.is_full() {
            Some(std::mem::replace(&mut self.slots[self.cursor], value))
        } else {
            self.slots.push(value);
            None
        };
        self.cursor = (self.cursor + 1) % self.capacity;
        evicted
    }

    /// Resident values from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        // While filling the cursor equals the length, so `older` is empty.
        let (newer, older) = self.slots.split_at(self.cursor);
        older.iter().chain(newer.iter()).copied()
    }
}
