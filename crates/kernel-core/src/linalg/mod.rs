// SPDX-License-Identifier: Apache-2.0
//! Dense linear algebra (C3): BLAS levels 1-3 plus LAPACK-style
//! decompositions, narrowed to `f32` throughout. Matrices are row-major
//! with an explicit leading dimension (`ld >= cols`); vectors carry an
//! explicit element stride. None of these routines allocate on the heap —
//! callers own every buffer, including decomposition workspace.
//!
//! Recoverable failures (singular pivots, shape mismatches, iteration caps)
//! surface through [`crate::error::Error`]; everything else either returns
//! a value or mutates its output buffers in place.

pub mod givens;
pub mod householder;
pub mod level1;
pub mod level2;
pub mod level3;
pub mod lu;
pub mod nnls;
pub mod pinv;
pub mod qr;
pub mod svd;

use crate::error::{BadDimensionsDetail, Error, Result};

/// Which triangle of a matrix a triangular routine reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Uplo {
    /// Only entries on or above the diagonal are referenced.
    Upper,
    /// Only entries on or below the diagonal are referenced.
    Lower,
}

/// Whether a routine operates on `A` or `A^T`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trans {
    /// Use `A` as given.
    No,
    /// Use `A^T`.
    Yes,
}

/// Whether a triangular matrix's diagonal is implicitly all-ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Diag {
    /// The diagonal is stored and used as-is.
    NonUnit,
    /// The diagonal is treated as all-ones and never read.
    Unit,
}

/// Which side of a product a matrix argument appears on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// The matrix multiplies on the left: `op(A) * B`.
    Left,
    /// The matrix multiplies on the right: `B * op(A)`.
    Right,
}

/// Validates that a leading dimension bounds its row length.
pub(crate) fn check_ld(op: &'static str, ld: usize, cols: usize) -> Result<()> {
    if ld < cols {
        return Err(Error::BadDimensions {
            op,
            detail: BadDimensionsDetail::LeadingDimensionTooSmall { ld, min: cols },
        });
    }
    Ok(())
}

/// Validates that a buffer is at least `required` elements long.
pub(crate) fn check_len(op: &'static str, got: usize, required: usize) -> Result<()> {
    if got < required {
        return Err(Error::BadDimensions {
            op,
            detail: BadDimensionsDetail::BufferTooSmall { required, got },
        });
    }
    Ok(())
}

/// Validates that two dimensions that must agree actually do.
pub(crate) fn check_eq(op: &'static str, expected: usize, got: usize) -> Result<()> {
    if expected != got {
        return Err(Error::BadDimensions {
            op,
            detail: BadDimensionsDetail::Mismatch { expected, got },
        });
    }
    Ok(())
}
