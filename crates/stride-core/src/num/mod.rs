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
//! Integer capabilities required by the progression solver and the modular
//! arithmetic it is built on.
//!
//! ## Submodules
//!
//! - `ops`: By-value wrapping and checked arithmetic traits (`WrappingAddVal`,
//!   `WrappingSubVal`, `CheckedAddVal`) for all signed primitives.
//! - `modular`: Mathematical (non-negative) remainder and an overflow-free
//!   `(a - b) mod c`. Crate-internal.
//!
//! ## Motivation
//!
//! The solver is written once and instantiated for every signed width. The
//! `ProgressionInt` alias collects the bounds it needs so generic signatures
//! stay short and every width gets identical overflow behavior.

pub(crate) mod modular;
pub mod ops;

use num_traits::{PrimInt, Signed};
use std::hash::Hash;

/// A trait alias for integer types accepted by the progression solver.
///
/// These are the signed primitives `i8`, `i16`, `i32`, `i64`, `i128` and
/// `isize`. The narrow (`i32`) and wide (`i64`) widths are the ones range
/// construction code uses; the others come for free through the blanket
/// implementation.
///
/// # Examples
///
/// ```rust
/// # use stride_core::num::ProgressionInt;
/// fn accepts<T: ProgressionInt>(_: T) {}
/// accepts(1i32);
/// accepts(1i64);
/// ```
pub trait ProgressionInt:
    PrimInt
    + Signed
    + std::fmt::Debug
    + std::fmt::Display
    + ops::CheckedAddVal
    + ops::WrappingAddVal
    + ops::WrappingSubVal
    + Send
    + Sync
    + Hash
{
}

impl<T> ProgressionInt for T where
    T: PrimInt
        + Signed
        + std::fmt::Debug
        + std::fmt::Display
        + ops::CheckedAddVal
        + ops::WrappingAddVal
        + ops::WrappingSubVal
        + Send
        + Sync
        + Hash
{
}
