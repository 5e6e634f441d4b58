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

//! # Interval Numeric Trait
//!
//! Unified numeric bounds for interval and interval-set code.
//! `IntervalNumeric` specifies the integer capabilities required by the
//! containers in this crate: intrinsic integer behavior (`PrimInt`),
//! by-value checked arithmetic for successor/predecessor probes, and
//! formatting for diagnostics.
//!
//! ## Motivation
//!
//! Interval containers should remain generic over the element type while
//! keeping generic signatures readable. Collecting the necessary bounds into
//! a single alias avoids repeating a long `where` clause on every impl block
//! and keeps overflow handling consistent across the crate.

use crate::num::checked_arithmetic::{CheckedAddVal, CheckedSubVal};
use num_traits::PrimInt;

/// A trait alias for numeric types that can be used as interval bounds.
/// This covers all primitive integer types, signed and unsigned, of any
/// width: `u8` through `u128`, `i8` through `i128`, `usize`, and `isize`.
///
/// Checked addition and subtraction are part of the bundle because interval
/// adjacency is decided by successor probes (`upper + 1`), which must fail
/// cleanly at the numeric bounds of the type instead of wrapping.
pub trait IntervalNumeric:
    PrimInt + CheckedAddVal + CheckedSubVal + std::fmt::Debug + std::fmt::Display
{
}

impl<T> IntervalNumeric for T where
    T: PrimInt + CheckedAddVal + CheckedSubVal + std::fmt::Debug + std::fmt::Display
{
}
