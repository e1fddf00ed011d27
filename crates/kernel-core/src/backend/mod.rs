// SPDX-License-Identifier: Apache-2.0
//! Backend dispatch (C4): a single `dispatch` entry point selected at
//! compile time by the `mt` feature. Both backends expose the same
//! signature, so callers never branch on the feature themselves.

#[cfg(feature = "mt")]
mod mt;
#[cfg(not(feature = "mt"))]
mod st;

#[cfg(feature = "mt")]
pub use mt::{dispatch, parallel_rows_mut};
#[cfg(not(feature = "mt"))]
pub use st::{dispatch, parallel_rows_mut};

/// Below this many units of work, parallel dispatch isn't worth its
/// thread-scope overhead; both backends honor it, so switching features
/// never changes behavior for small inputs.
pub const MIN_PARALLEL_UNITS: usize = 1024;
