//! Integer types that can be summed inside a window.

use std::fmt::{Debug, Display};

/// A signed integer with overflow-checked addition and subtraction.
///
/// Implemented for every primitive signed integer. The window never wraps or
/// saturates: a `None` from either operation is an overflow.
pub trait WindowValue: Copy + Default + PartialOrd + Debug + Display {
    /// `self + rhs`, or `None` if the result is out of range.
    fn checked_add(self, rhs: Self) -> Option<Self>;

    /// `self - rhs`, or `None` if the result is out of range.
    fn checked_sub(self, rhs: Self) -> Option<Self>;

    /// Lossless widening, used by reports that must not depend on `Self`.
    fn to_i128(self) -> i128;
}

macro_rules! impl_window_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl WindowValue for $ty {
                #[inline]
                fn checked_add(self, rhs: Self) -> Option<Self> {
                    <$ty>::checked_add(self, rhs)
                }

                #[inline]
                fn checked_sub(self, rhs: Self) -> Option<Self> {
                    <$ty>::checked_sub(self, rhs)
                }

                #[inline]
                fn to_i128(self) -> i128 {
                    self as i128
                }
            }
        )*
    };
}

impl_window_value!(i8, i16, i32, i64, i128, isize);
