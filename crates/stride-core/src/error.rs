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

use std::fmt::Display;

/// Errors reported by the progression solver.
///
/// Every variant signals a bug in the calling range-construction code and
/// must not be recovered from by substituting a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ProgressionError {
    /// The step of the progression is zero, so it never advances and has no
    /// last element.
    InvalidStep,
}

impl Display for ProgressionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProgressionError::InvalidStep => write!(f, "progression step must be non-zero"),
        }
    }
}

impl std::error::Error for ProgressionError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_invalid_step() {
        assert_eq!(
            ProgressionError::InvalidStep.to_string(),
            "progression step must be non-zero"
        );
    }

    #[test]
    fn test_is_std_error() {
        fn takes_error(_: &dyn std::error::Error) {}
        takes_error(&ProgressionError::InvalidStep);

        let boxed: Box<dyn std::error::Error + Send + Sync> = ProgressionError::InvalidStep.into();
        assert!(std::error::Error::source(&*boxed).is_none());
    }
}
