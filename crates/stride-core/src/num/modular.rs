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

//! Modular arithmetic in the mathematical sense.
//!
//! Rust's `%` truncates toward zero, so `-7 % 3 == -1`. Everything here
//! normalizes to the representative in `[0, m)` instead. All moduli must be
//! strictly positive.

use num_traits::{PrimInt, Signed};

/// Returns `a mod b` in the arithmetical sense, i.e. the unique `r` in
/// `[0, b)` with `r ≡ a (mod b)`.
///
/// `r + b` cannot overflow: the truncating remainder lies in `(-b, b)` and is
/// only corrected when negative.
///
/// # Panics
///
/// In debug builds, panics if `b` is not strictly positive.
#[inline(always)]
pub(crate) fn floor_mod<T>(a: T, b: T) -> T
where
    T: PrimInt + Signed,
{
    debug_assert!(
        b > T::zero(),
        "called `floor_mod` with a non-positive modulus"
    );

    let r = a % b;
    if r < T::zero() { r + b } else { r }
}

/// Returns `(a - b) mod c` without computing `a - b`.
///
/// Both operands are reduced into `[0, c)` before subtracting, so the
/// intermediate difference stays in `(-c, c)`. This holds even when `a` and
/// `b` sit at opposite ends of the integer range.
///
/// # Panics
///
/// In debug builds, panics if `c` is not strictly positive.
#[inline(always)]
pub(crate) fn difference_mod<T>(a: T, b: T, c: T) -> T
where
    T: PrimInt + Signed,
{
    floor_mod(floor_mod(a, c) - floor_mod(b, c), c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_floor_mod_non_negative_dividend() {
        assert_eq!(floor_mod(0, 3), 0);
        assert_eq!(floor_mod(7, 3), 1);
        assert_eq!(floor_mod(9, 3), 0);
        assert_eq!(floor_mod(2, 5), 2);
    }

    #[test]
    fn test_floor_mod_negative_dividend() {
        assert_eq!(floor_mod(-1, 3), 2);
        assert_eq!(floor_mod(-7, 3), 2);
        assert_eq!(floor_mod(-9, 3), 0);
        assert_eq!(floor_mod(-2i64, 5), 3);
    }

    #[test]
    fn test_floor_mod_unit_modulus_is_always_zero() {
        assert_eq!(floor_mod(i32::MIN, 1), 0);
        assert_eq!(floor_mod(i32::MAX, 1), 0);
        assert_eq!(floor_mod(-5i64, 1), 0);
    }

    #[test]
    fn test_floor_mod_extreme_values() {
        // i32::MIN = -2^31 = -(i32::MAX) - 1
        assert_eq!(floor_mod(i32::MIN, i32::MAX), i32::MAX - 1);
        assert_eq!(floor_mod(i32::MAX, i32::MAX), 0);
        assert_eq!(floor_mod(i64::MIN, i64::MAX), i64::MAX - 1);
        assert_eq!(floor_mod(i64::MIN, 2), 0);
        assert_eq!(floor_mod(i64::MAX, 2), 1);
    }

    #[test]
    fn test_floor_mod_agrees_with_rem_euclid_for_positive_moduli() {
        for a in i8::MIN..=i8::MAX {
            for b in 1..=i8::MAX {
                assert_eq!(floor_mod(a, b), a.rem_euclid(b), "a = {a}, b = {b}");
            }
        }
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "non-positive modulus")]
    fn test_floor_mod_zero_modulus_panics_in_debug() {
        let _ = floor_mod(5, 0);
    }

    #[test]
    fn test_difference_mod_basic() {
        assert_eq!(difference_mod(10, 1, 3), 0);
        assert_eq!(difference_mod(9, 1, 3), 2);
        assert_eq!(difference_mod(1, 9, 3), 1);
        assert_eq!(difference_mod(-4, 4, 5), 2);
    }

    #[test]
    fn test_difference_mod_opposite_extremes_do_not_overflow() {
        // i32::MAX - i32::MIN = 2^32 - 1 would overflow if computed directly.
        assert_eq!(difference_mod(i32::MAX, i32::MIN, 1), 0);
        assert_eq!(difference_mod(i32::MAX, i32::MIN, 2), 1);
        assert_eq!(difference_mod(i32::MIN, i32::MAX, 2), 1);
        assert_eq!(difference_mod(i32::MAX, i32::MIN, i32::MAX), 1);
        assert_eq!(difference_mod(i64::MAX, i64::MIN, i64::MAX), 1);
        assert_eq!(difference_mod(i64::MIN, i64::MAX, i64::MAX), i64::MAX - 1);
    }

    #[test]
    fn test_difference_mod_matches_wide_arithmetic() {
        for a in i8::MIN..=i8::MAX {
            for b in [i8::MIN, -77, -1, 0, 1, 42, i8::MAX] {
                for c in [1i8, 2, 3, 10, 64, i8::MAX] {
                    let expected = (i16::from(a) - i16::from(b)).rem_euclid(i16::from(c));
                    assert_eq!(
                        i16::from(difference_mod(a, b, c)),
                        expected,
                        "a = {a}, b = {b}, c = {c}"
                    );
                }
            }
        }
    }
}
