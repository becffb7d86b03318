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

//! # By-Value Integer Operations
//!
//! Trait-based, by-value counterparts of the inherent wrapping and checked
//! integer methods. `num_traits` exposes the same operations through
//! reference-taking APIs; these traits keep generic arithmetic code free of
//! `&` noise while compiling down to the primitive intrinsics.

use core::ops::{Add, Sub};

macro_rules! impl_binary_val {
    ($trait_name:ident, $method:ident, $out:ty, $src_method:ident, $($t:ty),+ $(,)?) => {
        $(
            impl $trait_name for $t {
                #[inline(always)]
                fn $method(self, v: Self) -> $out {
                    <$t>::$src_method(self, v)
                }
            }
        )+
    };
}

/// Checked addition by value (no references).
///
/// # Examples
///
/// ```rust
/// # use stride_core::num::ops::CheckedAddVal;
/// let a: i8 = 100;
/// assert_eq!(a.checked_add_val(27), Some(127));
/// assert_eq!(a.checked_add_val(28), None); // Overflow occurs
/// assert_eq!((-1i8).checked_add_val(i8::MIN), None); // Underflow occurs
/// ```
pub trait CheckedAddVal: Sized + Add<Self, Output = Self> {
    /// Performs checked addition by value, returning `None` on overflow.
    fn checked_add_val(self, v: Self) -> Option<Self>;
}

/// Wrapping (two's complement) addition by value (no references).
///
/// # Examples
///
/// ```rust
/// # use stride_core::num::ops::WrappingAddVal;
/// let a: i32 = i32::MAX;
/// assert_eq!(a.wrapping_add_val(1), i32::MIN);
/// assert_eq!(5i32.wrapping_add_val(-7), -2);
/// ```
pub trait WrappingAddVal: Sized + Add<Self, Output = Self> {
    /// Performs wrapping addition by value.
    fn wrapping_add_val(self, v: Self) -> Self;
}

/// Wrapping (two's complement) subtraction by value (no references).
///
/// # Examples
///
/// ```rust
/// # use stride_core::num::ops::WrappingSubVal;
/// let a: i64 = i64::MIN;
/// assert_eq!(a.wrapping_sub_val(1), i64::MAX);
/// assert_eq!(10i64.wrapping_sub_val(3), 7);
/// ```
pub trait WrappingSubVal: Sized + Sub<Self, Output = Self> {
    /// Performs wrapping subtraction by value.
    fn wrapping_sub_val(self, v: Self) -> Self;
}

impl_binary_val!(
    CheckedAddVal,
    checked_add_val,
    Option<Self>,
    checked_add,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
);

impl_binary_val!(
    WrappingAddVal,
    wrapping_add_val,
    Self,
    wrapping_add,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
);

impl_binary_val!(
    WrappingSubVal,
    wrapping_sub_val,
    Self,
    wrapping_sub,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_add_val_matches_inherent() {
        assert_eq!(i32::MAX.checked_add_val(0), Some(i32::MAX));
        assert_eq!(i32::MAX.checked_add_val(1), None);
        assert_eq!(i64::MIN.checked_add_val(-1), None);
        assert_eq!(0i64.checked_add_val(i64::MIN), Some(i64::MIN));
    }

    #[test]
    fn test_wrapping_add_val_wraps_at_bounds() {
        assert_eq!(i16::MAX.wrapping_add_val(1), i16::MIN);
        assert_eq!(i16::MIN.wrapping_add_val(-1), i16::MAX);
        assert_eq!(isize::MAX.wrapping_add_val(isize::MAX), -2);
    }

    #[test]
    fn test_wrapping_sub_val_wraps_at_bounds() {
        assert_eq!(i8::MIN.wrapping_sub_val(1), i8::MAX);
        assert_eq!(i8::MAX.wrapping_sub_val(-1), i8::MIN);
        assert_eq!(0i128.wrapping_sub_val(i128::MIN), i128::MIN);
    }
}
