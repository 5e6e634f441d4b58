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

//! An ordered set of integers stored as coalesced closed intervals.
//!
//! `IntervalSet` keeps the minimal interval representation of its contents:
//! the stored intervals are sorted by lower bound, and every overlapping or
//! touching pair has been merged into one. Insertion re-sorts and re-merges
//! the whole sequence, favoring an obviously correct algorithm over
//! amortized cleverness; every operation stays within O(n log n) in the
//! number of stored intervals.
//!
//! The set never exposes a mutation path besides insertion. Reads go through
//! the sorted interval slice or the binary-search membership query.

use crate::interval::ClosedInterval;
use crate::num::numeric::IntervalNumeric;

/// Checks whether the given intervals are sorted by lower bound with every
/// pair disjoint and non-adjacent.
///
/// Returns `true` for empty and single-interval sequences.
#[inline(always)]
fn are_coalesced_and_sorted<T>(intervals: &[ClosedInterval<T>]) -> bool
where
    T: IntervalNumeric,
{
    intervals
        .windows(2)
        .all(|w| w[0].disjoint(w[1]) && w[0].upper() < w[1].lower())
}

/// Lower bound search for the first interval whose upper bound is >= key.
///
/// # Panics
///
/// In debug builds, this function will panic if `intervals` is not coalesced
/// and sorted.
///
/// # Invariants
///
/// - `intervals` must be sorted by lower bound with pairwise disjoint,
///   non-adjacent entries.
#[inline(always)]
fn lower_bound_upper<T>(intervals: &[ClosedInterval<T>], key: T) -> usize
where
    T: IntervalNumeric,
{
    debug_assert!(
        are_coalesced_and_sorted(intervals),
        "called `lower_bound_upper` with intervals that are not coalesced and sorted"
    );

    let mut lo: usize = 0;
    let mut hi: usize = intervals.len();

    while lo < hi {
        let mid = lo + ((hi - lo) >> 1);
        if intervals[mid].upper() < key {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }
    lo
}

/// An ordered set of integers stored as disjoint, non-adjacent closed intervals.
///
/// The set keeps the minimal interval representation of its contents:
/// intervals are sorted ascending by lower bound, no two intervals share a
/// point, and no two intervals touch; at least one excluded integer separates
/// consecutive intervals. [`insert`](IntervalSet::insert) maintains this
/// shape by merging the new interval with everything it overlaps or touches.
///
/// # Invariants
///
/// - Intervals are sorted strictly ascending by lower bound.
/// - No two stored intervals intersect.
/// - No two stored intervals are adjacent.
///
/// # Examples
///
/// ```rust
/// # use spanset_core::interval::ClosedInterval;
/// # use spanset_core::set::IntervalSet;
///
/// let mut set = IntervalSet::new();
/// set.insert(ClosedInterval::new(5, 6));
/// set.insert(ClosedInterval::new(1, 2));
/// set.insert(ClosedInterval::new(3, 4)); // Bridges the two
/// assert_eq!(set.ranges(), &[ClosedInterval::new(1, 6)]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct IntervalSet<T>
where
    T: IntervalNumeric,
{
    intervals: Vec<ClosedInterval<T>>,
}

impl<T> IntervalSet<T>
where
    T: IntervalNumeric,
{
    /// Creates a new, empty `IntervalSet`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use spanset_core::set::IntervalSet;
    ///
    /// let set: IntervalSet<i64> = IntervalSet::new();
    /// assert!(set.is_empty());
    /// ```
    #[inline]
    pub const fn new() -> Self {
        Self {
            intervals: Vec::new(),
        }
    }

    /// Creates a new, empty `IntervalSet` with capacity for at least
    /// `capacity` intervals.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            intervals: Vec::with_capacity(capacity),
        }
    }

    /// Inserts an interval into the set, merging it with every stored
    /// interval it overlaps or touches.
    ///
    /// The stored sequence is re-sorted and re-merged as a whole on every
    /// call, so an insertion costs O(n log n) in the number of stored
    /// intervals. The interval count grows by at most one per call and
    /// shrinks when the new interval bridges existing ones.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use spanset_core::interval::ClosedInterval;
    /// # use spanset_core::set::IntervalSet;
    ///
    /// let mut set = IntervalSet::new();
    /// set.insert(ClosedInterval::new(5, 6));
    /// set.insert(ClosedInterval::new(3, 4)); // Touches [5, 6]
    /// assert_eq!(set.ranges(), &[ClosedInterval::new(3, 6)]);
    ///
    /// set.insert(ClosedInterval::new(10, 10)); // Separate
    /// assert_eq!(set.len(), 2);
    /// ```
    pub fn insert(&mut self, interval: ClosedInterval<T>) {
        self.intervals.push(interval);
        self.intervals.sort_unstable_by_key(|iv| iv.lower());
        self.coalesce();
    }

    /// Merges every overlapping or adjacent pair in the sorted sequence with
    /// a single left-to-right pass. Sorting by lower bound guarantees each
    /// interval can only merge into the most recently emitted one, whose
    /// upper bound never shrinks.
    fn coalesce(&mut self) {
        let mut merged: Vec<ClosedInterval<T>> = Vec::with_capacity(self.intervals.len());
        for &interval in self.intervals.iter() {
            if let Some(last) = merged.last_mut() {
                if let Some(joined) = last.union(interval) {
                    *last = joined;
                    continue;
                }
            }
            merged.push(interval);
        }
        self.intervals = merged;

        debug_assert!(
            are_coalesced_and_sorted(&self.intervals),
            "IntervalSet invariant violated: intervals must be sorted, disjoint, and non-adjacent"
        );
    }

    /// Returns the stored intervals as a slice, sorted ascending by lower
    /// bound, pairwise disjoint and non-adjacent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use spanset_core::interval::ClosedInterval;
    /// # use spanset_core::set::IntervalSet;
    ///
    /// let mut set = IntervalSet::new();
    /// set.insert(ClosedInterval::new(5, 6));
    /// set.insert(ClosedInterval::new(1, 2));
    /// assert_eq!(
    ///     set.ranges(),
    ///     &[ClosedInterval::new(1, 2), ClosedInterval::new(5, 6)]
    /// );
    /// ```
    #[inline]
    pub fn ranges(&self) -> &[ClosedInterval<T>] {
        &self.intervals
    }

    /// Returns an iterator over the stored intervals in ascending order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, ClosedInterval<T>> {
        self.intervals.iter()
    }

    /// Returns the number of stored intervals.
    ///
    /// This counts intervals, not contained integers: a set holding `[0, 10]`
    /// has length 1.
    #[inline]
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    /// Returns `true` if the set contains no intervals.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Returns `true` if `value` is contained in one of the stored intervals.
    ///
    /// Runs a binary search over the sorted sequence, O(log n) in the number
    /// of stored intervals.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use spanset_core::interval::ClosedInterval;
    /// # use spanset_core::set::IntervalSet;
    ///
    /// let mut set = IntervalSet::new();
    /// set.insert(ClosedInterval::new(1, 2));
    /// set.insert(ClosedInterval::new(5, 6));
    /// assert!(set.contains(2));
    /// assert!(!set.contains(3));
    /// ```
    pub fn contains(&self, value: T) -> bool {
        let index = lower_bound_upper(&self.intervals, value);
        match self.intervals.get(index) {
            Some(interval) => interval.contains_point(value),
            None => false,
        }
    }
}

impl<T> Default for IntervalSet<T>
where
    T: IntervalNumeric,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Display for IntervalSet<T>
where
    T: IntervalNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for (index, interval) in self.intervals.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", interval)?;
        }
        write!(f, "}}")
    }
}

impl<T> FromIterator<ClosedInterval<T>> for IntervalSet<T>
where
    T: IntervalNumeric,
{
    /// Builds a set by inserting every interval in iteration order; the
    /// result is independent of that order.
    fn from_iter<I: IntoIterator<Item = ClosedInterval<T>>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<T> Extend<ClosedInterval<T>> for IntervalSet<T>
where
    T: IntervalNumeric,
{
    /// Inserts every interval yielded by the iterator, one at a time.
    fn extend<I: IntoIterator<Item = ClosedInterval<T>>>(&mut self, iter: I) {
        for interval in iter {
            self.insert(interval);
        }
    }
}

impl<T> IntoIterator for IntervalSet<T>
where
    T: IntervalNumeric,
{
    type Item = ClosedInterval<T>;
    type IntoIter = std::vec::IntoIter<ClosedInterval<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.intervals.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a IntervalSet<T>
where
    T: IntervalNumeric,
{
    type Item = &'a ClosedInterval<T>;
    type IntoIter = std::slice::Iter<'a, ClosedInterval<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.intervals.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fixedbitset::FixedBitSet;
    use rand::seq::SliceRandom;
    use rand::{Rng, SeedableRng, rngs::StdRng};
    use rand_chacha::ChaCha8Rng;

    type IntegerType = i64;

    fn iv(lower: IntegerType, upper: IntegerType) -> ClosedInterval<IntegerType> {
        ClosedInterval::new(lower, upper)
    }

    #[test]
    fn test_new_is_empty() {
        let set: IntervalSet<IntegerType> = IntervalSet::new();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert!(set.ranges().is_empty());
    }

    #[test]
    fn test_with_capacity_is_empty() {
        let set: IntervalSet<IntegerType> = IntervalSet::with_capacity(16);
        assert!(set.is_empty());
    }

    #[test]
    fn test_default_is_empty() {
        let set: IntervalSet<IntegerType> = Default::default();
        assert!(set.is_empty());
    }

    #[test]
    fn test_insert_into_empty() {
        let mut set = IntervalSet::new();
        set.insert(iv(10, 10));
        assert_eq!(set.ranges(), vec![iv(10, 10)]);
        assert_eq!(set.len(), 1);
        assert!(set.contains(10));
    }

    #[test]
    fn test_insert_disjoint_sorts_by_lower_bound() {
        let mut set = IntervalSet::new();
        set.insert(iv(5, 6));
        set.insert(iv(1, 2));
        assert_eq!(set.ranges(), vec![iv(1, 2), iv(5, 6)]);
    }

    #[test]
    fn test_insert_overlapping_merges() {
        let mut set = IntervalSet::new();
        set.insert(iv(5, 6));
        set.insert(iv(3, 6));
        assert_eq!(set.ranges(), vec![iv(3, 6)]);
    }

    #[test]
    fn test_insert_adjacent_merges() {
        let mut set = IntervalSet::new();
        set.insert(iv(5, 6));
        set.insert(iv(3, 4));
        assert_eq!(set.ranges(), vec![iv(3, 6)]);
    }

    #[test]
    fn test_insert_bridges_gap() {
        let mut set = IntervalSet::new();
        set.insert(iv(1, 2));
        set.insert(iv(4, 5));
        assert_eq!(set.len(), 2);

        // Adjacent to both neighbors; all three collapse into one.
        set.insert(iv(3, 3));
        assert_eq!(set.ranges(), vec![iv(1, 5)]);
    }

    #[test]
    fn test_insert_idempotent() {
        let mut set = IntervalSet::new();
        set.insert(iv(3, 7));
        set.insert(iv(3, 7));
        assert_eq!(set.ranges(), vec![iv(3, 7)]);

        set.insert(iv(10, 12));
        set.insert(iv(3, 7));
        assert_eq!(set.ranges(), vec![iv(3, 7), iv(10, 12)]);
    }

    #[test]
    fn test_insert_contained_is_absorbed() {
        let mut set = IntervalSet::new();
        set.insert(iv(0, 10));
        set.insert(iv(2, 8));
        assert_eq!(set.ranges(), vec![iv(0, 10)]);
    }

    #[test]
    fn test_insert_spanning_collapses_all() {
        let mut set = IntervalSet::new();
        for lower in (0..=20).step_by(2) {
            set.insert(iv(lower, lower));
        }
        assert_eq!(set.len(), 11);

        set.insert(iv(0, 20));
        assert_eq!(set.ranges(), vec![iv(0, 20)]);
    }

    #[test]
    fn test_insert_adds_at_most_one_interval() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut set = IntervalSet::new();
        for _ in 0..200 {
            let lower = rng.random_range(-100..100);
            let upper = lower + rng.random_range(0..10);
            let before = set.len();
            set.insert(iv(lower, upper));
            assert!(
                set.len() <= before + 1,
                "insertion must add at most one interval"
            );
            assert!(!set.is_empty());
        }
    }

    #[test]
    fn test_insert_order_independent() {
        let intervals = vec![
            iv(0, 1),
            iv(3, 3),
            iv(10, 12),
            iv(2, 5),
            iv(40, 45),
            iv(44, 50),
            iv(7, 8),
            iv(9, 9),
        ];
        let expected: IntervalSet<_> = intervals.iter().copied().collect();
        assert_eq!(expected.ranges(), vec![iv(0, 5), iv(7, 12), iv(40, 50)]);

        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let mut shuffled = intervals.clone();
        for _ in 0..100 {
            shuffled.shuffle(&mut rng);
            let set: IntervalSet<_> = shuffled.iter().copied().collect();
            assert_eq!(set.ranges(), expected.ranges());
        }
    }

    #[test]
    fn test_invariant_holds_under_random_insertions() {
        let mut rng = StdRng::seed_from_u64(0xDEADBEEF);
        let mut set = IntervalSet::new();
        for _ in 0..500 {
            let lower = rng.random_range(-1000..1000);
            let upper = lower + rng.random_range(0..50);
            set.insert(iv(lower, upper));
            assert!(are_coalesced_and_sorted(set.ranges()));
        }
    }

    #[test]
    fn test_membership_matches_dense_oracle() {
        const DOMAIN: usize = 512;

        let mut rng = StdRng::seed_from_u64(99);
        let mut set: IntervalSet<usize> = IntervalSet::new();
        let mut oracle = FixedBitSet::with_capacity(DOMAIN);

        for _ in 0..64 {
            let lower = rng.random_range(0..DOMAIN - 16);
            let upper = lower + rng.random_range(0..16);
            set.insert(ClosedInterval::new(lower, upper));
            for value in lower..=upper {
                oracle.insert(value);
            }
        }

        for value in 0..DOMAIN {
            assert_eq!(
                set.contains(value),
                oracle.contains(value),
                "membership mismatch at {}",
                value
            );
        }
    }

    #[test]
    fn test_contains() {
        let mut set = IntervalSet::new();
        set.insert(iv(1, 2));
        set.insert(iv(5, 6));

        assert!(!set.contains(0));
        assert!(set.contains(1));
        assert!(set.contains(2));
        assert!(!set.contains(3));
        assert!(!set.contains(4));
        assert!(set.contains(5));
        assert!(set.contains(6));
        assert!(!set.contains(7));
    }

    #[test]
    fn test_contains_on_empty() {
        let set: IntervalSet<IntegerType> = IntervalSet::new();
        assert!(!set.contains(0));
        assert!(!set.contains(IntegerType::MIN));
        assert!(!set.contains(IntegerType::MAX));
    }

    #[test]
    fn test_insert_at_numeric_bounds() {
        let mut set: IntervalSet<u8> = IntervalSet::new();
        set.insert(ClosedInterval::new(250, 255));
        set.insert(ClosedInterval::new(0, 5));

        // No wrap-around adjacency between 255 and 0.
        assert_eq!(
            set.ranges(),
            vec![ClosedInterval::new(0, 5), ClosedInterval::new(250, 255)]
        );
        assert!(set.contains(0));
        assert!(set.contains(255));
        assert!(!set.contains(128));

        set.insert(ClosedInterval::new(6, 249));
        assert_eq!(set.ranges(), vec![ClosedInterval::new(0, 255)]);
    }

    #[test]
    fn test_from_iterator() {
        let set: IntervalSet<_> = vec![iv(5, 6), iv(3, 6)].into_iter().collect();
        assert_eq!(set.ranges(), vec![iv(3, 6)]);
    }

    #[test]
    fn test_extend() {
        let mut set = IntervalSet::new();
        set.extend([iv(1, 2), iv(4, 5), iv(3, 3)]);
        assert_eq!(set.ranges(), vec![iv(1, 5)]);
    }

    #[test]
    fn test_iter() {
        let set: IntervalSet<_> = [iv(5, 6), iv(1, 2)].into_iter().collect();
        let collected: Vec<_> = set.iter().copied().collect();
        assert_eq!(collected, vec![iv(1, 2), iv(5, 6)]);
    }

    #[test]
    fn test_into_iterator() {
        let set: IntervalSet<_> = [iv(1, 2), iv(5, 6)].into_iter().collect();

        let by_ref: Vec<_> = (&set).into_iter().copied().collect();
        assert_eq!(by_ref, vec![iv(1, 2), iv(5, 6)]);

        let by_value: Vec<_> = set.into_iter().collect();
        assert_eq!(by_value, vec![iv(1, 2), iv(5, 6)]);
    }

    #[test]
    fn test_display() {
        let mut set = IntervalSet::new();
        assert_eq!(format!("{}", set), "{}");

        set.insert(iv(5, 6));
        set.insert(iv(1, 2));
        assert_eq!(format!("{}", set), "{[1, 2], [5, 6]}");
    }

    #[test]
    fn test_clone_and_eq() {
        let set: IntervalSet<_> = [iv(1, 2), iv(5, 6)].into_iter().collect();
        let cloned = set.clone();
        assert_eq!(set, cloned);

        let other: IntervalSet<_> = [iv(1, 6)].into_iter().collect();
        assert_ne!(set, other);
    }

    #[test]
    fn test_lower_bound_upper_basic() {
        let v = vec![iv(0, 5), iv(10, 15), iv(20, 30)];
        assert_eq!(lower_bound_upper(&v, 0), 0);
        assert_eq!(lower_bound_upper(&v, 5), 0);
        assert_eq!(lower_bound_upper(&v, 6), 1); // first upper >= 6 is index 1 (10-15)
        assert_eq!(lower_bound_upper(&v, 15), 1);
        assert_eq!(lower_bound_upper(&v, 16), 2);
        assert_eq!(lower_bound_upper(&v, 31), 3);
    }

    #[test]
    fn test_are_coalesced_and_sorted() {
        let empty: Vec<ClosedInterval<IntegerType>> = vec![];
        assert!(are_coalesced_and_sorted(&empty));
        assert!(are_coalesced_and_sorted(&[iv(0, 10)]));
        assert!(are_coalesced_and_sorted(&[iv(0, 5), iv(7, 10)]));

        // Overlapping
        assert!(!are_coalesced_and_sorted(&[iv(0, 5), iv(5, 10)]));
        // Adjacent
        assert!(!are_coalesced_and_sorted(&[iv(0, 5), iv(6, 10)]));
        // Unsorted, even though separated
        assert!(!are_coalesced_and_sorted(&[iv(7, 10), iv(0, 5)]));
    }
}
