// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Closed interval `[lower, upper]` primitives over primitive integers.
//!
//! A closed interval carries both of its bounds, so it always contains at
//! least one point and two intervals can touch without sharing a point
//! (`[0, 10]` and `[11, 20]`). That adjacency relation is what lets the
//! `set` module coalesce touching intervals into one, and it is decided with
//! checked successor arithmetic so the bounds of the element type need no
//! special casing.

use crate::num::numeric::IntervalNumeric;
use std::{
    cmp::{max, min},
    iter::FusedIterator,
    ops::{BitAnd, BitOr, RangeInclusive},
};

/// The error type for rejected interval constructions.
///
/// Carries the offending bounds so callers can report exactly what was asked
/// for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidIntervalError<T> {
    /// The rejected lower bound.
    pub lower: T,
    /// The rejected upper bound.
    pub upper: T,
}

impl<T> std::fmt::Display for InvalidIntervalError<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Invalid interval: lower bound {} exceeds upper bound {}",
            self.lower, self.upper
        )
    }
}

impl<T> std::error::Error for InvalidIntervalError<T> where T: std::fmt::Debug + std::fmt::Display {}

/// A closed interval `[lower, upper]` defined by two inclusive bounds.
///
/// This struct represents a contiguous set of integers: every `x` with
/// `lower <= x <= upper`. Both bounds belong to the interval, so an interval
/// is never empty; `[10, 10]` contains exactly the point `10`. It supports
/// set-theoretic operations such as intersection and union, as well as
/// geometric queries like overlap and adjacency checks.
///
/// # Invariants
/// `lower` must always be less than or equal to `upper`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClosedInterval<T>
where
    T: IntervalNumeric,
{
    lower: T,
    upper: T,
}

/// An iterator over the integer points contained within a `ClosedInterval`.
///
/// Iteration covers both bounds. This type does not implement
/// `ExactSizeIterator`: an interval over a wide element type can contain more
/// points than `usize` can count (for example `[0, u64::MAX]` on a 64-bit
/// target). `size_hint` is exact whenever the remaining count fits a `usize`.
///
/// # Examples
///
/// ```rust
/// # use spanset_core::interval::ClosedInterval;
///
/// let iv = ClosedInterval::new(1, 4);
/// let points: Vec<_> = iv.iter().collect();
/// assert_eq!(points, vec![1, 2, 3, 4]);
/// ```
pub struct ClosedIntervalIterator<T>
where
    T: IntervalNumeric,
{
    // Front and back cursor, both inclusive. `None` once exhausted.
    remaining: Option<(T, T)>,
}

/// Distance between two bounds measured in `u128`, which is wide enough to
/// hold the result exactly for every primitive integer type.
fn distance<T>(front: T, back: T) -> Option<u128>
where
    T: IntervalNumeric,
{
    if let (Some(front), Some(back)) = (front.to_u128(), back.to_u128()) {
        return Some(back.abs_diff(front));
    }
    if let (Some(front), Some(back)) = (front.to_i128(), back.to_i128()) {
        return Some(back.abs_diff(front));
    }
    None
}

impl<T> Iterator for ClosedIntervalIterator<T>
where
    T: IntervalNumeric,
{
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let (front, back) = self.remaining?;
        // front < back guarantees the successor of front is representable.
        self.remaining = if front < back {
            Some((front + T::one(), back))
        } else {
            None
        };
        Some(front)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let Some((front, back)) = self.remaining else {
            return (0, Some(0));
        };
        let count = distance(front, back).and_then(|d| d.checked_add(1));
        match count.and_then(|c| usize::try_from(c).ok()) {
            Some(count) => (count, Some(count)),
            // More points remain than usize can represent.
            None => (usize::MAX, None),
        }
    }
}

impl<T> DoubleEndedIterator for ClosedIntervalIterator<T>
where
    T: IntervalNumeric,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        let (front, back) = self.remaining?;
        self.remaining = if front < back {
            Some((front, back - T::one()))
        } else {
            None
        };
        Some(back)
    }
}

impl<T> FusedIterator for ClosedIntervalIterator<T> where T: IntervalNumeric {}

impl<T> ClosedInterval<T>
where
    T: IntervalNumeric,
{
    /// Creates a new `ClosedInterval`.
    ///
    /// # Panics
    ///
    /// Panics if `lower > upper`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use spanset_core::interval::ClosedInterval;
    ///
    /// let iv = ClosedInterval::new(0, 10);
    /// assert_eq!(iv.checked_len(), Some(11));
    /// ```
    #[inline]
    pub fn new(lower: T, upper: T) -> Self {
        assert!(
            lower <= upper,
            "Invalid interval: lower must be less than or equal to upper"
        );
        Self { lower, upper }
    }

    /// Creates a new `ClosedInterval` if the inputs are valid.
    ///
    /// Returns `None` if `lower > upper`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use spanset_core::interval::ClosedInterval;
    ///
    /// assert!(ClosedInterval::try_new(0, 10).is_some());
    /// assert!(ClosedInterval::try_new(10, 10).is_some());
    /// assert!(ClosedInterval::try_new(10, 0).is_none());
    /// ```
    #[inline]
    pub fn try_new(lower: T, upper: T) -> Option<Self> {
        if lower <= upper {
            Some(Self { lower, upper })
        } else {
            None
        }
    }

    /// Creates a new `ClosedInterval` without checking invariants in release builds.
    ///
    /// # Safety
    ///
    /// The caller must ensure `lower <= upper`.
    /// This function contains a `debug_assert!` to catch errors during development.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use spanset_core::interval::ClosedInterval;
    ///
    /// let iv = ClosedInterval::new_unchecked(0, 10);
    /// ```
    #[inline]
    pub fn new_unchecked(lower: T, upper: T) -> Self {
        debug_assert!(
            lower <= upper,
            "Invalid interval: lower must be less than or equal to upper"
        );
        Self { lower, upper }
    }

    /// Returns the inclusive lower bound of the interval.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use spanset_core::interval::ClosedInterval;
    ///
    /// let iv = ClosedInterval::new(5, 10);
    /// assert_eq!(iv.lower(), 5);
    /// ```
    #[inline]
    pub const fn lower(&self) -> T {
        self.lower
    }

    /// Returns the inclusive upper bound of the interval.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use spanset_core::interval::ClosedInterval;
    ///
    /// let iv = ClosedInterval::new(5, 10);
    /// assert_eq!(iv.upper(), 10);
    /// ```
    #[inline]
    pub const fn upper(&self) -> T {
        self.upper
    }

    /// Returns `true` if this interval shares at least one point with `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use spanset_core::interval::ClosedInterval;
    ///
    /// let a = ClosedInterval::new(0, 10);
    /// let b = ClosedInterval::new(10, 20); // Shares the point 10
    /// assert!(a.intersects(b));
    ///
    /// let c = ClosedInterval::new(11, 20); // Adjacent, no shared point
    /// assert!(!a.intersects(c));
    /// ```
    #[inline]
    pub fn intersects(&self, other: Self) -> bool {
        self.lower <= other.upper && other.lower <= self.upper
    }

    /// Returns `true` if the intervals touch without sharing a point.
    ///
    /// Two closed intervals are adjacent when one ends directly below the
    /// other's start, with no integer in between: `[0, 10]` and `[11, 20]`.
    /// The check probes the successor of each upper bound with checked
    /// arithmetic, so nothing is adjacent beyond `T::MAX`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use spanset_core::interval::ClosedInterval;
    ///
    /// let a = ClosedInterval::new(0, 10);
    /// assert!(a.adjacent(ClosedInterval::new(11, 20)));
    /// assert!(!a.adjacent(ClosedInterval::new(10, 20))); // Overlaps at 10
    /// assert!(!a.adjacent(ClosedInterval::new(12, 20))); // Gap at 11
    /// ```
    #[inline]
    pub fn adjacent(&self, other: Self) -> bool {
        self.upper.checked_add_val(T::one()) == Some(other.lower)
            || other.upper.checked_add_val(T::one()) == Some(self.lower)
    }

    /// Returns `true` if the intervals are disjoint (neither intersecting nor adjacent).
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use spanset_core::interval::ClosedInterval;
    ///
    /// let a = ClosedInterval::new(0, 10);
    /// assert!(a.disjoint(ClosedInterval::new(15, 20))); // Disjoint
    /// assert!(!a.disjoint(ClosedInterval::new(5, 15))); // Intersects
    /// assert!(!a.disjoint(ClosedInterval::new(11, 15))); // Adjacent
    /// ```
    #[inline]
    pub fn disjoint(&self, other: Self) -> bool {
        !self.intersects_or_adjacent(other)
    }

    /// Returns `true` if the intervals either intersect or are adjacent.
    ///
    /// This is the mergeability test: exactly these pairs combine into a
    /// single contiguous interval. Equivalent to widening `self` by one on
    /// each side and testing for intersection, with the widening clamped at
    /// the numeric bounds of `T`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use spanset_core::interval::ClosedInterval;
    ///
    /// let a = ClosedInterval::new(0, 10);
    /// assert!(a.intersects_or_adjacent(ClosedInterval::new(11, 20))); // Adjacent
    /// assert!(a.intersects_or_adjacent(ClosedInterval::new(5, 15)));  // Intersects
    /// assert!(!a.intersects_or_adjacent(ClosedInterval::new(12, 20))); // Gap
    /// ```
    #[inline]
    pub fn intersects_or_adjacent(&self, other: Self) -> bool {
        self.intersects(other) || self.adjacent(other)
    }

    /// Returns `true` if `value` is contained in the interval `[lower, upper]`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use spanset_core::interval::ClosedInterval;
    ///
    /// let iv = ClosedInterval::new(0, 10);
    /// assert!(iv.contains_point(0));
    /// assert!(iv.contains_point(10));
    /// assert!(!iv.contains_point(11));
    /// ```
    #[inline]
    pub fn contains_point(&self, value: T) -> bool {
        self.lower <= value && value <= self.upper
    }

    /// Returns `true` if `other` is fully contained within `self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use spanset_core::interval::ClosedInterval;
    ///
    /// let a = ClosedInterval::new(0, 10);
    /// let b = ClosedInterval::new(2, 8);
    /// assert!(a.contains_interval(b));
    /// ```
    #[inline]
    pub fn contains_interval(&self, other: Self) -> bool {
        self.lower <= other.lower && other.upper <= self.upper
    }

    /// Returns the number of integer points in the interval.
    ///
    /// Returns `None` if the count is not representable in `T`; a closed
    /// interval spanning the full range of `T` contains `T::MAX - T::MIN + 1`
    /// points, one more than the type can hold.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use spanset_core::interval::ClosedInterval;
    ///
    /// assert_eq!(ClosedInterval::new(10, 19).checked_len(), Some(10));
    /// assert_eq!(ClosedInterval::new(7, 7).checked_len(), Some(1));
    /// assert_eq!(ClosedInterval::<u8>::new(0, 255).checked_len(), None);
    /// ```
    #[inline]
    pub fn checked_len(&self) -> Option<T> {
        self.upper
            .checked_sub_val(self.lower)?
            .checked_add_val(T::one())
    }

    /// Calculates the intersection of two intervals.
    ///
    /// Returns `None` if the intervals have no point in common. Closed
    /// intervals intersecting in a single point yield a one-point interval.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use spanset_core::interval::ClosedInterval;
    ///
    /// let a = ClosedInterval::new(0, 10);
    /// let b = ClosedInterval::new(5, 15);
    /// assert_eq!(a.intersection(b), Some(ClosedInterval::new(5, 10)));
    ///
    /// let c = ClosedInterval::new(10, 20);
    /// assert_eq!(a.intersection(c), Some(ClosedInterval::new(10, 10)));
    /// ```
    #[inline]
    pub fn intersection(&self, other: Self) -> Option<Self> {
        let new_lower = max(self.lower, other.lower);
        let new_upper = min(self.upper, other.upper);

        if new_lower <= new_upper {
            Some(Self::new_unchecked(new_lower, new_upper))
        } else {
            None
        }
    }

    /// Calculates the union of two intervals.
    ///
    /// Returns `Some(union)` spanning from the smaller lower bound to the
    /// larger upper bound if the intervals overlap or are adjacent.
    /// Returns `None` if the intervals are separated by at least one integer;
    /// their union would not be contiguous.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use spanset_core::interval::ClosedInterval;
    ///
    /// let a = ClosedInterval::new(0, 10);
    /// let b = ClosedInterval::new(11, 20);
    /// assert_eq!(a.union(b), Some(ClosedInterval::new(0, 20)));
    ///
    /// let c = ClosedInterval::new(15, 20);
    /// assert_eq!(a.union(c), None);
    /// ```
    #[inline]
    pub fn union(&self, other: Self) -> Option<Self> {
        if self.intersects_or_adjacent(other) {
            Some(Self {
                lower: min(self.lower, other.lower),
                upper: max(self.upper, other.upper),
            })
        } else {
            None
        }
    }

    /// Creates an iterator over the points in the interval.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use spanset_core::interval::ClosedInterval;
    ///
    /// let iv = ClosedInterval::new(1, 3);
    /// let points: Vec<_> = iv.iter().collect();
    /// assert_eq!(points, vec![1, 2, 3]);
    /// ```
    #[inline]
    pub fn iter(&self) -> ClosedIntervalIterator<T> {
        ClosedIntervalIterator {
            remaining: Some((self.lower, self.upper)),
        }
    }
}

impl<T> BitAnd for ClosedInterval<T>
where
    T: IntervalNumeric,
{
    type Output = Option<Self>;

    #[inline]
    fn bitand(self, rhs: Self) -> Self::Output {
        self.intersection(rhs)
    }
}

impl<T> BitOr for ClosedInterval<T>
where
    T: IntervalNumeric,
{
    type Output = Option<Self>;

    #[inline]
    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

impl<T> std::fmt::Debug for ClosedInterval<T>
where
    T: IntervalNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClosedInterval")
            .field("lower", &self.lower)
            .field("upper", &self.upper)
            .finish()
    }
}

impl<T> std::fmt::Display for ClosedInterval<T>
where
    T: IntervalNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.lower, self.upper)
    }
}

impl<T> std::ops::RangeBounds<T> for ClosedInterval<T>
where
    T: IntervalNumeric,
{
    fn start_bound(&self) -> std::ops::Bound<&T> {
        std::ops::Bound::Included(&self.lower)
    }

    fn end_bound(&self) -> std::ops::Bound<&T> {
        std::ops::Bound::Included(&self.upper)
    }
}

impl<T> IntoIterator for ClosedInterval<T>
where
    T: IntervalNumeric,
{
    type Item = T;
    type IntoIter = ClosedIntervalIterator<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for &ClosedInterval<T>
where
    T: IntervalNumeric,
{
    type Item = T;
    type IntoIter = ClosedIntervalIterator<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> TryFrom<RangeInclusive<T>> for ClosedInterval<T>
where
    T: IntervalNumeric,
{
    type Error = InvalidIntervalError<T>;

    /// Converts `lower..=upper` into a `ClosedInterval`, rejecting ranges
    /// whose lower bound exceeds their upper bound (such as `7..=3`).
    fn try_from(range: RangeInclusive<T>) -> Result<Self, Self::Error> {
        let (lower, upper) = range.into_inner();
        Self::try_new(lower, upper).ok_or(InvalidIntervalError { lower, upper })
    }
}

impl<T> From<ClosedInterval<T>> for RangeInclusive<T>
where
    T: IntervalNumeric,
{
    #[inline]
    fn from(iv: ClosedInterval<T>) -> Self {
        iv.lower..=iv.upper
    }
}
