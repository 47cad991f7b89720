// SPDX-License-Identifier: MPL-2.0
//! Shared test helpers.
//!
//! Re-exports the `approx` assertion macros so float-producing state (volume
//! levels, seek positions) can be compared without tripping over precision,
//! which `assert_eq!` cannot do.

pub use approx::{assert_abs_diff_eq, assert_relative_eq};
