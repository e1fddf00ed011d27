// SPDX-License-Identifier: Apache-2.0
//! BLAS level 2: matrix-vector operations over row-major `A` with an
//! explicit leading dimension.

use crate::linalg::{check_ld, check_len, Diag, Trans, Uplo};
use crate::error::Result;

/// `y <- alpha * op(A) * x + beta * y`, `A` is `rows x cols`.
///
/// `op(A) = A` when `trans == Trans::No` (`x` has `cols` elements, `y` has
/// `rows`); `op(A) = A^T` when `trans == Trans::Yes` (`x` has `rows`
/// elements, `y` has `cols`).
#[allow(clippy::too_many_arguments)]
pub fn gemv(
    trans: Trans,
    rows: usize,
    cols: usize,
    alpha: f32,
    a: &[f32],
    lda: usize,
    x: &[f32],
    incx: usize,
    beta: f32,
    y: &mut [f32],
    incy: usize,
) -> Result<()> {
    check_ld("gemv", lda, cols)?;
    match trans {
        Trans::No => {
            check_len("gemv", x.len(), cols.saturating_sub(1) * incx + 1)?;
            check_len("gemv", y.len(), rows.saturating_sub(1) * incy + 1)?;
            for r in 0..rows {
                let row = &a[r * lda..r * lda + cols];
                let mut acc = 0.0f32;
                for c in 0..cols {
                    acc += row[c] * x[c * incx];
                }
                y[r * incy] = alpha * acc + beta * y[r * incy];
            }
        }
        Trans::Yes => {
            check_len("gemv", x.len(), rows.saturating_sub(1) * incx + 1)?;
            check_len("gemv", y.len(), cols.saturating_sub(1) * incy + 1)?;
            let mut acc = vec![0.0f32; cols];
            for r in 0..rows {
                let row = &a[r * lda..r * lda + cols];
                let xr = x[r * incx];
                for (c, slot) in acc.iter_mut().enumerate() {
                    *slot += row[c] * xr;
                }
            }
            for c in 0..cols {
                y[c * incy] = alpha * acc[c] + beta * y[c * incy];
            }
        }
    }
    Ok(())
}

/// `x <- op(A) * x` in place, `A` is `n x n` triangular.
pub fn trmv(uplo: Uplo, trans: Trans, diag: Diag, n: usize, a: &[f32], lda: usize, x: &mut [f32], incx: usize) -> Result<()> {
    check_ld("trmv", lda, n)?;
    check_len("trmv", x.len(), n.saturating_sub(1) * incx + 1)?;
    let orig: Vec<f32> = (0..n).map(|i| x[i * incx]).collect();
    for i in 0..n {
        let mut acc = if matches!(diag, Diag::Unit) { orig[i] } else { 0.0 };
        match (uplo, trans) {
            (Uplo::Upper, Trans::No) => {
                let start = if matches!(diag, Diag::Unit) { i + 1 } else { i };
                for j in start..n {
                    acc += a[i * lda + j] * orig[j];
                }
            }
            (Uplo::Lower, Trans::No) => {
                let end = if matches!(diag, Diag::Unit) { i } else { i + 1 };
                for j in 0..end {
                    acc += a[i * lda + j] * orig[j];
                }
            }
            (Uplo::Upper, Trans::Yes) => {
                let end = if matches!(diag, Diag::Unit) { i } else { i + 1 };
                for j in 0..end {
                    acc += a[j * lda + i] * orig[j];
                }
            }
            (Uplo::Lower, Trans::Yes) => {
                let start = if matches!(diag, Diag::Unit) { i + 1 } else { i };
                for j in start..n {
                    acc += a[j * lda + i] * orig[j];
                }
            }
        }
        x[i * incx] = acc;
    }
    Ok(())
}

/// Solves `op(A) * x = b` in place (`x` holds `b` on entry, the solution on
/// exit), `A` is `n x n` triangular.
pub fn trsv(uplo: Uplo, trans: Trans, diag: Diag, n: usize, a: &[f32], lda: usize, x: &mut [f32], incx: usize) -> Result<()> {
    check_ld("trsv", lda, n)?;
    check_len("trsv", x.len(), n.saturating_sub(1) * incx + 1)?;
    match (uplo, trans) {
        (Uplo::Lower, Trans::No) => {
            for i in 0..n {
                let mut acc = x[i * incx];
                for j in 0..i {
                    acc -= a[i * lda + j] * x[j * incx];
                }
                x[i * incx] = if matches!(diag, Diag::Unit) { acc } else { acc / a[i * lda + i] };
            }
        }
        (Uplo::Upper, Trans::No) => {
            for i in (0..n).rev() {
                let mut acc = x[i * incx];
                for j in (i + 1)..n {
                    acc -= a[i * lda + j] * x[j * incx];
                }
                x[i * incx] = if matches!(diag, Diag::Unit) { acc } else { acc / a[i * lda + i] };
            }
        }
        (Uplo::Upper, Trans::Yes) => {
            for i in 0..n {
                let mut acc = x[i * incx];
                for j in 0..i {
                    acc -= a[j * lda + i] * x[j * incx];
                }
                x[i * incx] = if matches!(diag, Diag::Unit) { acc } else { acc / a[i * lda + i] };
            }
        }
        (Uplo::Lower, Trans::Yes) => {
            for i in (0..n).rev() {
                let mut acc = x[i * incx];
                for j in (i + 1)..n {
                    acc -= a[j * lda + i] * x[j * incx];
                }
                x[i * incx] = if matches!(diag, Diag::Unit) { acc } else { acc / a[i * lda + i] };
            }
        }
    }
    Ok(())
}

#[allow(clippy::unwrap_used)]
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gemv_no_trans_identity_times_x_plus_beta_y() {
        let a = [1.0, 0.0, 0.0, 1.0];
        let x = [3.0, 4.0];
        let mut y = [1.0, 1.0];
        gemv(Trans::No, 2, 2, 1.0, &a, 2, &x, 1, 0.0, &mut y, 1).unwrap();
        assert_eq!(y, [3.0, 4.0]);
    }

    #[test]
    fn gemv_trans_matches_manual_transpose_multiply() {
        // A = [[1,2],[3,4]] row-major, ld=2. A^T * x for x=[1,1] = [1+3, 2+4] = [4,6]
        let a = [1.0, 2.0, 3.0, 4.0];
        let x = [1.0, 1.0];
        let mut y = [0.0, 0.0];
        gemv(Trans::Yes, 2, 2, 1.0, &a, 2, &x, 1, 0.0, &mut y, 1).unwrap();
        assert_eq!(y, [4.0, 6.0]);
    }

    #[test]
    fn trsv_lower_solves_forward_substitution() {
        // [[2,0],[3,4]] x = [4, 23] => x = [2, 4.25]
        let a = [2.0, 0.0, 3.0, 4.0];
        let mut x = [4.0, 23.0];
        trsv(Uplo::Lower, Trans::No, Diag::NonUnit, 2, &a, 2, &mut x, 1).unwrap();
        assert!((x[0] - 2.0).abs() < 1e-6);
        assert!((x[1] - 4.25).abs() < 1e-6);
    }

    #[test]
    fn trmv_then_trsv_round_trips() {
        let a = [2.0, 1.0, 0.0, 3.0];
        let orig = [5.0, 7.0];
        let mut x = orig;
        trmv(Uplo::Upper, Trans::No, Diag::NonUnit, 2, &a, 2, &mut x, 1).unwrap();
        trsv(Uplo::Upper, Trans::No, Diag::NonUnit, 2, &a, 2, &mut x, 1).unwrap();
        assert!((x[0] - orig[0]).abs() < 1e-4);
        assert!((x[1] - orig[1]).abs() < 1e-4);
    }
}
