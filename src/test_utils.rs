// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons.
//!
//! Gesture math accumulates floating-point error across frames, so tests
//! compare with the `approx` macros instead of `assert_eq!`.

// Re-export approx macros for convenient use in tests
pub use approx::assert_abs_diff_eq;
