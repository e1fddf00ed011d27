// SPDX-License-Identifier: Apache-2.0
//! Moore-Penrose pseudo-inverse (`Gepseu`), built on [`crate::linalg::svd`].

use crate::error::{Result, PINV_SINGULAR_TOLERANCE};
use crate::linalg::check_ld;
use crate::linalg::svd::gesvd;

/// Computes the Moore-Penrose pseudo-inverse of the `m x n` matrix `a`
/// into `pinv` (`n x m`, leading dimension `ld_pinv`). Works for any
/// `m`/`n` by transposing internally when `m < n`, since
/// [`gesvd`](crate::linalg::svd::gesvd) requires `rows >= cols`.
pub fn gepseu(m: usize, n: usize, a: &[f32], lda: usize, pinv: &mut [f32], ld_pinv: usize) -> Result<()> {
    check_ld("gepseu", lda, n)?;
    check_ld("gepseu", ld_pinv, m)?;
    if m >= n {
        pinv_ge(m, n, a, lda, pinv, ld_pinv)
    } else {
        // pinv(A) = pinv(A^T)^T; A^T is n x m with n >= m.
        let mut at = vec![0.0f32; n * m];
        for r in 0..m {
            for c in 0..n {
                at[c * m + r] = a[r * lda + c];
            }
        }
        let mut pinv_at = vec![0.0f32; m * n];
        pinv_ge(n, m, &at, m, &mut pinv_at, n)?;
        for r in 0..n {
            for c in 0..m {
                pinv[r * ld_pinv + c] = pinv_at[c * n + r];
            }
        }
        Ok(())
    }
}

fn pinv_ge(m: usize, n: usize, a: &[f32], lda: usize, pinv: &mut [f32], ld_pinv: usize) -> Result<()> {
    let mut u = vec![0.0f32; m * n];
    for r in 0..m {
        for c in 0..n {
            u[r * n + c] = a[r * lda + c];
        }
    }
    let mut s = vec![0.0f32; n];
    let mut v = vec![0.0f32; n * n];
    gesvd(m, n, &mut u, n, &mut s, &mut v, n)?;

    for i in 0..n {
        for j in 0..m {
            let mut acc = 0.0f32;
            for k in 0..n {
                if s[k] > PINV_SINGULAR_TOLERANCE {
                    acc += v[i * n + k] * u[j * n + k] / s[k];
                }
            }
            pinv[i * ld_pinv + j] = acc;
        }
    }
    Ok(())
}

#[allow(clippy::unwrap_used)]
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pinv_of_square_invertible_matches_satisfies_a_pinv_a_eq_a() {
        let a = [1.0, 2.0, 3.0, 4.0]; // 2x2
        let mut pinv = [0.0f32; 4];
        gepseu(2, 2, &a, 2, &mut pinv, 2).unwrap();
        for i in 0..2 {
            for j in 0..2 {
                let mut acc = 0.0f32;
                for k in 0..2 {
                    let mut apk = 0.0f32;
                    for p in 0..2 {
                        apk += a[i * 2 + p] * pinv[p * 2 + k];
                    }
                    acc += apk * a[k * 2 + j];
                }
                assert!((acc - a[i * 2 + j]).abs() < 1e-2);
            }
        }
    }

    #[test]
    fn wide_matrix_transposes_internally() {
        // 2x3: m < n path.
        let a = [1.0, 0.0, 0.0, 0.0, 1.0, 0.0];
        let mut pinv = [0.0f32; 6]; // 3x2
        gepseu(2, 3, &a, 3, &mut pinv, 2).unwrap();
        // A * pinv(A) should be the 2x2 identity for this full-row-rank A.
        for i in 0..2 {
            for j in 0..2 {
                let mut acc = 0.0f32;
                for k in 0..3 {
                    acc += a[i * 3 + k] * pinv[k * 2 + j];
                }
                let expected = if i == j { 1.0 } else { 0.0 };
                assert!((acc - expected).abs() < 1e-2);
            }
        }
    }
}
