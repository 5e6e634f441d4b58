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

//! # Spanset Core
//!
//! Compact storage for sparse sets of integers. Instead of a dense bitmap or
//! an unsorted list of values, a set is kept as the minimal sequence of
//! disjoint, non-adjacent closed intervals `[lower, upper]`, sorted by lower
//! bound. Insertion merges overlapping and touching intervals so the
//! representation stays minimal at all times.
//!
//! ## Modules
//!
//! - `interval`: The closed interval `[lower, upper]` value type with
//!   validation, overlap/adjacency/containment predicates, set operations
//!   (intersection/union), measurement, point iteration (`Iterator`,
//!   `DoubleEndedIterator`, `FusedIterator`), and conversions to/from
//!   `std::ops::RangeInclusive`.
//! - `num`: Integer-centric foundations: by-value checked arithmetic traits
//!   (`CheckedAddVal`, `CheckedSubVal`) and the `IntervalNumeric` trait alias
//!   that bundles every bound interval code needs.
//! - `set`: The `IntervalSet` container maintaining the sorted, coalesced
//!   interval sequence under insertion, with binary-search membership queries.
//!
//! ## Purpose
//!
//! Selected rows, covered byte offsets, visited indices: such sets are
//! usually sparse but clustered, which makes a handful of intervals both
//! smaller and faster to query than the alternatives. This crate favors a
//! simple, obviously-correct insertion algorithm over amortized cleverness.
//!
//! Refer to each module for detailed APIs and examples.

pub mod interval;
pub mod num;
pub mod set;
