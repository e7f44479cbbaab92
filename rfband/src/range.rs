//! Closed frequency ranges.

use std::fmt;
use std::ops::Add;

use serde::{Deserialize, Serialize};

use crate::hz::Hz;

/// A closed range of frequencies, `low..=high`.
///
/// `low <= high` is expected but not enforced; inverted and zero-width
/// ranges can be built and simply contain nothing (or a single point).
/// [`Range::EMPTY`] (`0Hz->0Hz`) is what [`Range::intersection`] returns
/// when two ranges share no width.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Range {
    /// Lowest frequency of the range.
    pub low: Hz,
    /// Highest frequency of the range.
    pub high: Hz,
}

impl Range {
    /// The canonical empty range, `0Hz->0Hz`.
    pub const EMPTY: Self = Self::new(Hz::ZERO, Hz::ZERO);

    #[inline]
    pub const fn new(low: Hz, high: Hz) -> Self {
        Self { low, high }
    }

    /// Check if a frequency is within this range (inclusive).
    #[inline]
    pub fn contains_frequency(&self, freq: Hz) -> bool {
        freq >= self.low && freq <= self.high
    }

    /// Shift both edges of the range by `freq`.
    ///
    /// Typically used to move a baseband channel (`-3kHz->3kHz`) to a
    /// carrier frequency. Same as `range + freq`.
    #[inline]
    pub fn shift(&self, freq: Hz) -> Self {
        Self::new(self.low + freq, self.high + freq)
    }

    /// Check if `other` lies entirely within this range.
    #[inline]
    pub fn contains_range(&self, other: &Range) -> bool {
        other.low >= self.low && other.high <= self.high
    }

    /// Check if another range overlaps with this one. Ranges that only touch
    /// at an edge overlap.
    #[inline]
    pub fn overlaps(&self, other: &Range) -> bool {
        self.low <= other.high && self.high >= other.low
    }

    /// Get the intersection with another range.
    ///
    /// Returns [`Range::EMPTY`] unless the overlap has non-zero width, so
    /// ranges that share only a single edge frequency do not intersect.
    ///
    /// # Example
    /// ```
    /// use rfband::{Hz, Range};
    ///
    /// let middle = Range::new(Hz::new(100.0), Hz::new(250.0));
    /// let left = Range::new(Hz::new(0.0), Hz::new(199.0));
    /// assert_eq!(middle.intersection(&left), Range::new(Hz::new(100.0), Hz::new(199.0)));
    ///
    /// let touching = Range::new(Hz::new(250.0), Hz::new(300.0));
    /// assert_eq!(middle.intersection(&touching), Range::EMPTY);
    /// ```
    pub fn intersection(&self, other: &Range) -> Self {
        let low = if other.low > self.low { other.low } else { self.low };
        let high = if other.high < self.high { other.high } else { self.high };

        if low >= high {
            return Self::EMPTY;
        }

        Self::new(low, high)
    }

    /// Get center frequency (perhaps to get the center of a channel to tune to).
    #[inline]
    pub fn center(&self) -> Hz {
        (self.high + self.low) / 2.0
    }

    /// Get the width of the range, `high - low`. Negative for inverted ranges.
    #[inline]
    pub fn width(&self) -> Hz {
        self.high - self.low
    }
}

impl Add<Hz> for Range {
    type Output = Range;

    #[inline]
    fn add(self, rhs: Hz) -> Self::Output {
        self.shift(rhs)
    }
}

impl From<(Hz, Hz)> for Range {
    fn from((low, high): (Hz, Hz)) -> Self {
        Self::new(low, high)
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.low, self.high)
    }
}
