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

//! # Progression Bound Solver
//!
//! Computes the final element of a bounded arithmetic progression in
//! constant time. Range construction code calls this once per stepped range
//! to pin down the inclusive last value it will ever yield.
//!
//! The progression starting at `start` and advancing by `step` is truncated
//! at `end` in the direction of travel. For `step > 0` the result is the
//! greatest value `<= end` congruent to `start` modulo `step`; for
//! `step < 0` it is the least value `>= end` congruent to `start` modulo
//! `|step|`.
//!
//! ## Preconditions
//!
//! Callers must pass `start <= end` for a positive step and `start >= end`
//! for a negative step. This is checked with `debug_assert!` only (or with
//! `assert!` when the `strict-preconditions` feature is enabled). In
//! optimized builds a violation yields a well-defined, wrapped value that
//! carries no meaning.

use crate::error::ProgressionError;
use crate::num::{
    ProgressionInt,
    modular::difference_mod,
    ops::{CheckedAddVal, WrappingAddVal, WrappingSubVal},
};

macro_rules! precondition {
    ($cond:expr, $($arg:tt)+) => {
        if cfg!(feature = "strict-preconditions") {
            assert!($cond, $($arg)+);
        } else {
            debug_assert!($cond, $($arg)+);
        }
    };
}

/// Returns the last element of the progression from `start` towards `end`
/// advancing by `step`.
///
/// No iteration is performed and no intermediate value overflows, for any
/// `start`, `end` and non-zero `step` of the same width.
///
/// # Errors
///
/// Returns [`ProgressionError::InvalidStep`] if `step` is zero.
///
/// # Panics
///
/// In debug builds (or with the `strict-preconditions` feature), panics if
/// `start` lies past `end` in the direction of travel.
///
/// # Examples
///
/// ```rust
/// # use stride_core::progression::last_element;
/// # use stride_core::error::ProgressionError;
/// // 1, 4, 7, 10
/// assert_eq!(last_element(1, 10, 3), Ok(10));
/// // 1, 4, 7
/// assert_eq!(last_element(1, 9, 3), Ok(7));
/// // 10, 7, 4, 1
/// assert_eq!(last_element(10i64, 1, -3), Ok(1));
/// // 10, 7, 4
/// assert_eq!(last_element(10i64, 2, -3), Ok(4));
///
/// assert_eq!(last_element(0, 5, 0), Err(ProgressionError::InvalidStep));
/// ```
#[inline]
pub fn last_element<T>(start: T, end: T, step: T) -> Result<T, ProgressionError>
where
    T: ProgressionInt,
{
    if step > T::zero() {
        precondition!(
            start <= end,
            "called `last_element` with start {} past end {} for ascending step {}",
            start,
            end,
            step
        );

        Ok(end.wrapping_sub_val(difference_mod(end, start, step)))
    } else if step < T::zero() {
        precondition!(
            start >= end,
            "called `last_element` with start {} past end {} for descending step {}",
            start,
            end,
            step
        );

        if step == T::min_value() {
            return Ok(last_element_min_step(start, end, step));
        }
        Ok(end.wrapping_add_val(difference_mod(start, end, -step)))
    } else {
        tracing::error!(%start, %end, "progression step is zero");
        Err(ProgressionError::InvalidStep)
    }
}

/// Handles `step == T::MIN`, whose magnitude does not fit in `T`.
///
/// Two consecutive elements already span the whole width, so the
/// progression holds at most `start` and `start + step`.
#[inline(never)]
#[cold]
fn last_element_min_step<T>(start: T, end: T, step: T) -> T
where
    T: ProgressionInt,
{
    match start.checked_add_val(step) {
        Some(next) if next >= end => next,
        _ => start,
    }
}
