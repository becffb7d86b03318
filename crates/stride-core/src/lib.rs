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

//! # Stride Core
//!
//! Constant-time computation of the last element of a bounded arithmetic
//! progression, such as the final value yielded by "from `start` to `end`
//! by `step`". Range construction code uses it to fix the inclusive upper
//! (or lower, for descending ranges) bound of a stepped range without
//! walking it.
//!
//! ## Modules
//!
//! - `progression`: The solver, `last_element`, generic over every signed
//!   integer width.
//! - `error`: `ProgressionError`, reported for a zero step.
//! - `num`: The `ProgressionInt` capability alias and by-value wrapping and
//!   checked arithmetic traits.
//!
//! ## Overflow
//!
//! Inputs may sit anywhere in the range of their type, including
//! `start = MIN`, `end = MAX`. Differences are always taken between values
//! already reduced modulo the step, so no intermediate result leaves the
//! representable range.
//!
//! ```rust
//! use stride_core::progression::last_element;
//!
//! assert_eq!(last_element(i32::MIN, i32::MAX, 2), Ok(i32::MAX - 1));
//! assert_eq!(last_element(i64::MAX, i64::MIN, -1), Ok(i64::MIN));
//! ```

pub mod error;
pub mod num;
pub mod progression;
