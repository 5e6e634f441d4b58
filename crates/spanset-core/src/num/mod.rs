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

//! # Numeric Foundations
//!
//! Traits and utilities for integer-centric numeric programming. Interval
//! code computes successors and predecessors (`x + 1`, `x - 1`) near the
//! numeric bounds of a type, so overflow has to be a first-class outcome
//! rather than an accident.
//!
//! ## Submodules
//!
//! - `checked_arithmetic`: By-value checked addition and subtraction traits
//!   (`CheckedAddVal`, `CheckedSubVal`) returning `Option<T>`, implemented
//!   for all core integer types.
//! - `numeric`: The `IntervalNumeric` trait alias bundling the bounds every
//!   generic interval signature needs into a single name.
//!
//! ## Motivation
//!
//! Adjacency between closed intervals is a question about successors: `[1, 2]`
//! touches `[3, 4]` because `2 + 1 == 3`. At `T::MAX` that successor does not
//! exist, and checked arithmetic turns this edge into an ordinary `None`
//! instead of undefined wrapping.
//!
//! Refer to each submodule for detailed APIs and examples.

pub mod checked_arithmetic;
pub mod numeric;
