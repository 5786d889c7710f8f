//! The sliding window accumulator.
//!
//! A [`SlidingSum`] starts out *filling*: every value is appended and added to
//! the running sum. After the `W`-th value it is *full* and stays full; each
//! new value then replaces the oldest resident one. Both phases are O(1).
//!
//! Overflow is fatal to an instance. While filling, the value is already
//! stored when the sum is found to overflow, so stored values and sum
//! disagree afterwards. Rather than roll back, the window is poisoned and
//! every later [`SlidingSum::feed`] returns [`WindowError::Poisoned`].

use log::{debug, error, trace, warn};

use crate::error::WindowError;
use crate::ring::FixedRing;
use crate::value::WindowValue;

/// Sum and occupancy of a window at one point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct WindowReading<T> {
    /// Sum of the resident values
    pub sum: T,
    /// Whether the window has held `W` values at least once
    pub is_full: bool,
}

/// Running sum of the last `W` values fed.
///
/// The accumulator owns its storage exclusively and is intentionally not
/// `Clone`. Storage is released when the value is dropped or passed to
/// [`SlidingSum::destroy`].
#[derive(Debug)]
pub struct SlidingSum<T = i32> {
    ring: FixedRing<T>,
    sum: T,
    fed: u64,
    poisoned: bool,
}

impl<T: WindowValue> SlidingSum<T> {
    /// Create a window over the last `capacity` values.
    pub fn new(capacity: usize) -> Result<Self, WindowError> {
        let ring = FixedRing::with_capacity(capacity)?;
        debug!("allocated sliding window of {capacity} values");
        Ok(Self {
            ring,
            sum: T::default(),
            fed: 0,
            poisoned: false,
        })
    }

    /// Push `value` into the window and return the updated reading.
    ///
    /// # Errors
    ///
    /// [`WindowError::ArithmeticOverflow`] if the new window sum does not fit
    /// in `T`; the window is poisoned from then on and returns
    /// [`WindowError::Poisoned`].
    pub fn feed(&mut self, value: T) -> Result<WindowReading<T>, WindowError> {
        if self.poisoned {
            warn!("refusing value {value}: window is poisoned");
            return Err(WindowError::Poisoned);
        }

        let position = self.fed + 1;
        let evicting = self.ring.oldest();
        let next = match evicting {
            Some(oldest) => self.slide(oldest, value),
            None => {
                self.ring.push(value);
                self.sum.checked_add(value)
            }
        };

        let Some(sum) = next else {
            self.poisoned = true;
            error!(
                "window of {} overflowed at value #{position} ({value})",
                self.ring.capacity()
            );
            return Err(WindowError::ArithmeticOverflow { position });
        };

        if evicting.is_some() {
            self.ring.push(value);
        } else if self.ring.is_full() {
            debug!(
                "window of {} filled after {position} values",
                self.ring.capacity()
            );
        }

        self.sum = sum;
        self.fed = position;
        trace!("fed #{position} = {value}, window sum {sum}");
        Ok(self.query())
    }

    /// Replace `oldest` with `value` in the running sum.
    ///
    /// Subtracting first can overflow even when the final sum fits (and the
    /// same holds for adding first), but if the final sum fits at least one
    /// of the two orders never leaves the range.
    fn slide(&self, oldest: T, value: T) -> Option<T> {
        self.sum
            .checked_sub(oldest)
            .and_then(|rest| rest.checked_add(value))
            .or_else(|| {
                self.sum
                    .checked_add(value)
                    .and_then(|grown| grown.checked_sub(oldest))
            })
    }

    /// Current sum and occupancy.
    pub fn query(&self) -> WindowReading<T> {
        WindowReading {
            sum: self.sum,
            is_full: self.ring.is_full(),
        }
    }

    /// Sum of the resident values.
    pub fn sum(&self) -> T {
        self.sum
    }

    /// Whether `W` values have been fed at least once.
    pub fn is_full(&self) -> bool {
        self.ring.is_full()
    }

    /// The window size `W`.
    pub fn capacity(&self) -> usize {
        self.ring.capacity()
    }

    /// Number of resident values, at most `W`.
    pub fn len(&self) -> usize {
        self.ring.len()
    }

    /// Whether no value has been fed yet.
    pub fn is_empty(&self) -> bool {
        self.ring.is_empty()
    }

    /// Number of values fed successfully.
    pub fn fed(&self) -> u64 {
        self.fed
    }

    /// Whether an overflow has made this window unusable.
    pub fn is_poisoned(&self) -> bool {
        self.poisoned
    }

    /// Resident values from oldest to newest.
    pub fn window(&self) -> impl Iterator<Item = T> + '_ {
        self.ring.iter()
    }

    /// Release the window's storage.
    pub fn destroy(self) {
        debug!(
            "releasing window of {} after {} values",
            self.ring.capacity(),
            self.fed
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn init_test_logger() {
        let _ = env_logger::builder()
            .is_test(true)
            .filter_level(log::LevelFilter::Trace)
            .try_init();
    }

    fn feed_all<T: WindowValue>(
        window: &mut SlidingSum<T>,
        values: &[T],
    ) -> Vec<WindowReading<T>> {
        values
            .iter()
            .map(|&v| window.feed(v).expect("value within range"))
            .collect()
    }

    #[test]
    fn new_window_is_empty_and_filling() {
        let window = SlidingSum::<i32>::new(4).unwrap();
        assert_eq!(
            window.query(),
            WindowReading {
                sum: 0,
                is_full: false
            }
        );
        assert!(window.is_empty());
        assert_eq!(window.capacity(), 4);
        assert_eq!(window.fed(), 0);
    }

    #[test]
    fn zero_capacity_is_invalid() {
        assert_eq!(
            SlidingSum::<i32>::new(0).unwrap_err(),
            WindowError::InvalidCapacity
        );
    }

    #[test]
    fn single_value_window_is_full_after_first_feed() {
        init_test_logger();
        let mut window = SlidingSum::new(1).unwrap();
        let readings = feed_all(&mut window, &[1, 2, 3]);

        let sums: Vec<i32> = readings.iter().map(|r| r.sum).collect();
        assert_eq!(sums, vec![1, 2, 3]);
        assert!(readings.iter().all(|r| r.is_full));
    }

    #[test]
    fn window_of_three_over_sonar_depths() {
        init_test_logger();
        let mut window = SlidingSum::new(3).unwrap();
        let readings = feed_all(&mut window, &[199, 200, 208, 210, 200, 207]);

        let full: Vec<i32> = readings
            .iter()
            .filter(|r| r.is_full)
            .map(|r| r.sum)
            .collect();
        assert_eq!(full, vec![607, 618, 618, 617]);
        assert!(!readings[0].is_full);
        assert!(!readings[1].is_full);
        assert_eq!(window.window().collect::<Vec<_>>(), vec![210, 200, 207]);
    }

    #[test]
    fn short_input_never_fills() {
        let mut window = SlidingSum::new(3).unwrap();
        let reading = window.feed(5).unwrap();
        assert_eq!(
            reading,
            WindowReading {
                sum: 5,
                is_full: false
            }
        );
        assert_eq!(window.query(), reading);
        assert_eq!(window.len(), 1);
    }

    #[test]
    fn full_flag_flips_exactly_once() {
        let mut window = SlidingSum::new(4).unwrap();
        let flags: Vec<bool> = (1..=10)
            .map(|v| window.feed(v).unwrap().is_full)
            .collect();
        assert_eq!(
            flags,
            vec![false, false, false, true, true, true, true, true, true, true]
        );
    }

    #[test]
    fn overflow_is_reported_on_the_offending_feed() {
        init_test_logger();
        let mut window = SlidingSum::<i32>::new(8).unwrap();
        let step = i32::MAX / 4;

        for position in 1..=4 {
            assert!(window.feed(step).is_ok(), "feed #{position} should fit");
        }
        assert_eq!(
            window.feed(step),
            Err(WindowError::ArithmeticOverflow { position: 5 })
        );
        assert!(window.is_poisoned());
        assert_eq!(window.fed(), 4);
    }

    #[test]
    fn poisoned_window_refuses_values() {
        let mut window = SlidingSum::<i8>::new(2).unwrap();
        window.feed(100).unwrap();
        assert_eq!(
            window.feed(100),
            Err(WindowError::ArithmeticOverflow { position: 2 })
        );
        assert_eq!(window.feed(-1), Err(WindowError::Poisoned));
        assert_eq!(window.feed(0), Err(WindowError::Poisoned));
    }

    #[test]
    fn negative_overflow_is_detected() {
        let mut window = SlidingSum::<i16>::new(3).unwrap();
        window.feed(i16::MIN).unwrap();
        assert_eq!(
            window.feed(-1),
            Err(WindowError::ArithmeticOverflow { position: 2 })
        );
    }

    #[test]
    fn signed_extremes_can_replace_each_other() {
        let mut window = SlidingSum::<i8>::new(1).unwrap();
        window.feed(i8::MIN).unwrap();
        assert_eq!(window.feed(i8::MAX).unwrap().sum, i8::MAX);
        assert_eq!(window.feed(i8::MIN).unwrap().sum, i8::MIN);
        assert_eq!(window.window().collect::<Vec<_>>(), vec![i8::MIN]);
    }

    #[test]
    fn window_can_recover_range_after_large_values_leave() {
        let mut window = SlidingSum::<i8>::new(3).unwrap();
        feed_all(&mut window, &[-100, 100, 100]);
        // 100 + 100 does not fit in i8, but the final sum does.
        let reading = window.feed(-100).unwrap();
        assert_eq!(reading.sum, 100);
    }

    #[test]
    fn full_window_overflow_leaves_slots_untouched() {
        let mut window = SlidingSum::<i8>::new(2).unwrap();
        feed_all(&mut window, &[10, 100]);
        assert_eq!(
            window.feed(50),
            Err(WindowError::ArithmeticOverflow { position: 3 })
        );
        assert_eq!(window.window().collect::<Vec<_>>(), vec![10, 100]);
        assert_eq!(window.sum(), 110);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn reading_serializes_with_field_names() {
        let reading = WindowReading {
            sum: 607,
            is_full: true,
        };
        assert_eq!(
            serde_json::to_string(&reading).unwrap(),
            r#"{"sum":607,"is_full":true}"#
        );
    }

    #[test]
    fn destroy_consumes_the_window() {
        let mut window = SlidingSum::<i64>::new(16).unwrap();
        window.feed(1).unwrap();
        window.destroy();
    }
}
