// SPDX-License-Identifier: Apache-2.0
//! Error taxonomy surfaced by `linalg` (C3).
//!
//! `shape` and `elementwise` never return errors: their preconditions are
//! caller-validated, and violating them is undefined behavior at that layer.
//! `linalg` routines are recoverable and report one of the three variants
//! below, each carrying the failing kernel's name and the dimension or
//! iteration count that tripped it.

/// Why a `linalg` routine rejected its arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadDimensionsDetail {
    /// Two buffers that must share a dimension did not.
    Mismatch {
        /// The expected size.
        expected: usize,
        /// The size actually provided.
        got: usize,
    },
    /// A leading-dimension argument was smaller than the row length it
    /// must bound (`ld >= cols`).
    LeadingDimensionTooSmall {
        /// The leading dimension that was supplied.
        ld: usize,
        /// The minimum leading dimension the shape requires.
        min: usize,
    },
    /// A caller-supplied output buffer was too small for the operation.
    BufferTooSmall {
        /// The minimum required length.
        required: usize,
        /// The length actually provided.
        got: usize,
    },
    /// A decomposition received a shape it cannot operate on (e.g. SVD's
    /// `M < N`).
    UnsupportedShape {
        /// Row count.
        rows: usize,
        /// Column count.
        cols: usize,
    },
}

/// The error taxonomy for every `linalg` (C3) routine.
///
/// Recoverable: the caller decides how to respond (retry with
/// regularization, reformulate, raise an iteration cap, etc.) — this crate
/// never logs, aborts, or retries internally.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Caller-supplied sizes or leading dimensions violate the kernel's
    /// preconditions.
    #[error("bad dimensions in `{op}`: {detail:?}")]
    BadDimensions {
        /// The kernel that rejected its arguments.
        op: &'static str,
        /// What, specifically, was wrong.
        detail: BadDimensionsDetail,
    },
    /// A pivot (LU) or singular value (SVD/pseudo-inverse) fell below the
    /// kernel's tolerance.
    #[error("singular matrix in `{op}` at index {index} (tolerance {tolerance:e})")]
    SingularMatrix {
        /// The kernel that detected the singularity.
        op: &'static str,
        /// The pivot/diagonal index at which singularity was detected.
        index: usize,
        /// The tolerance the pivot/singular value fell below.
        tolerance: f32,
    },
    /// An iterative routine (SVD's QR sweep, NNLS's active-set loop)
    /// exceeded its iteration cap.
    #[error("`{op}` exceeded {limit} iterations")]
    MaxIterations {
        /// The kernel that ran out of iterations.
        op: &'static str,
        /// The cap that was exceeded.
        limit: u32,
    },
}

/// Convenience alias for `linalg` return types.
pub type Result<T> = core::result::Result<T, Error>;

/// Tolerance below which an LU pivot is declared singular.
pub const LU_SINGULAR_TOLERANCE: f32 = 1e-6;

/// Tolerance below which an SVD singular value is treated as zero when
/// assembling a pseudo-inverse.
pub const PINV_SINGULAR_TOLERANCE: f32 = 1e-10;

/// Maximum Jacobi sweeps over the whole matrix before `Gesvd` gives up.
pub const SVD_MAX_ITERATIONS: u32 = 30;

/// NNLS outer-iteration cap is `3 * n`; this is the multiplier.
pub const NNLS_MAX_ITERATIONS_FACTOR: u32 = 3;

/// Regularization threshold for Householder reflectors: below this
/// magnitude, H1/H2/H3 degenerate to identity.
pub const HOUSEHOLDER_REGULARIZATION: f32 = 1.0 / 1e30;
