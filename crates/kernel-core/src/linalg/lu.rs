// SPDX-License-Identifier: Apache-2.0
//! LU decomposition with partial pivoting (`Getrf_IP`/`Getrs`/`Getri`).

use crate::error::{Error, Result, LU_SINGULAR_TOLERANCE};
use crate::linalg::{check_eq, check_ld};

/// In-place LU factorization of the `n x n` matrix `a` with partial
/// pivoting: on return, the strict lower triangle holds `L`'s multipliers
/// (unit diagonal implied), the upper triangle (including the diagonal)
/// holds `U`, and `ipiv[k]` is the row swapped with row `k` at step `k`.
pub fn getrf_ip(n: usize, a: &mut [f32], lda: usize, ipiv: &mut [usize]) -> Result<()> {
    check_ld("getrf", lda, n)?;
    check_eq("getrf", n, ipiv.len())?;
    for k in 0..n {
        let mut piv = k;
        let mut max_val = a[k * lda + k].abs();
        for i in (k + 1)..n {
            let v = a[i * lda + k].abs();
            if v > max_val {
                max_val = v;
                piv = i;
            }
        }
        ipiv[k] = piv;
        if piv != k {
            for j in 0..n {
                a.swap(k * lda + j, piv * lda + j);
            }
        }
        let pivot_val = a[k * lda + k];
        if pivot_val.abs() < LU_SINGULAR_TOLERANCE {
            return Err(Error::SingularMatrix {
                op: "getrf",
                index: k,
                tolerance: LU_SINGULAR_TOLERANCE,
            });
        }
        for i in (k + 1)..n {
            let factor = a[i * lda + k] / pivot_val;
            a[i * lda + k] = factor;
            for j in (k + 1)..n {
                a[i * lda + j] -= factor * a[k * lda + j];
            }
        }
    }
    Ok(())
}

/// Solves `A * x = b` in place given the LU factors and pivots from
/// [`getrf_ip`]. `b` holds the right-hand side on entry, the solution on
/// exit.
pub fn getrs(n: usize, lu: &[f32], lda: usize, ipiv: &[usize], b: &mut [f32], incb: usize) -> Result<()> {
    check_ld("getrs", lda, n)?;
    check_eq("getrs", n, ipiv.len())?;
    for k in 0..n {
        if ipiv[k] != k {
            b.swap(k * incb, ipiv[k] * incb);
        }
    }
    for i in 0..n {
        let mut acc = b[i * incb];
        for j in 0..i {
            acc -= lu[i * lda + j] * b[j * incb];
        }
        b[i * incb] = acc;
    }
    for i in (0..n).rev() {
        let mut acc = b[i * incb];
        for j in (i + 1)..n {
            acc -= lu[i * lda + j] * b[j * incb];
        }
        b[i * incb] = acc / lu[i * lda + i];
    }
    Ok(())
}

/// Computes `A^-1` into `inv` (`n x n`, leading dimension `ld_inv`) from
/// the LU factors and pivots of `A`, by solving `A x = e_col` for each
/// standard basis column.
pub fn getri(n: usize, lu: &[f32], lda: usize, ipiv: &[usize], inv: &mut [f32], ld_inv: usize) -> Result<()> {
    check_ld("getri", ld_inv, n)?;
    let mut col = vec![0.0f32; n];
    for c in 0..n {
        col.iter_mut().for_each(|v| *v = 0.0);
        col[c] = 1.0;
        getrs(n, lu, lda, ipiv, &mut col, 1)?;
        for r in 0..n {
            inv[r * ld_inv + c] = col[r];
        }
    }
    Ok(())
}

#[allow(clippy::unwrap_used)]
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lu_solves_literal_system() {
        // [[4,3],[6,3]] x = [10, 12] => solve directly.
        let mut a = [4.0, 3.0, 6.0, 3.0];
        let mut ipiv = [0usize; 2];
        getrf_ip(2, &mut a, 2, &mut ipiv).unwrap();
        let mut b = [10.0, 12.0];
        getrs(2, &a, 2, &ipiv, &mut b, 1).unwrap();
        // verify against the original system, not the factored one.
        let a_orig = [4.0, 3.0, 6.0, 3.0];
        let r0 = a_orig[0] * b[0] + a_orig[1] * b[1];
        let r1 = a_orig[2] * b[0] + a_orig[3] * b[1];
        assert!((r0 - 10.0).abs() < 1e-4);
        assert!((r1 - 12.0).abs() < 1e-4);
    }

    #[test]
    fn getri_times_original_is_identity() {
        let a_orig = [4.0, 3.0, 6.0, 3.0];
        let mut a = a_orig;
        let mut ipiv = [0usize; 2];
        getrf_ip(2, &mut a, 2, &mut ipiv).unwrap();
        let mut inv = [0.0f32; 4];
        getri(2, &a, 2, &ipiv, &mut inv, 2).unwrap();
        for i in 0..2 {
            for j in 0..2 {
                let mut acc = 0.0;
                for p in 0..2 {
                    acc += a_orig[i * 2 + p] * inv[p * 2 + j];
                }
                let expected = if i == j { 1.0 } else { 0.0 };
                assert!((acc - expected).abs() < 1e-3);
            }
        }
    }

    #[test]
    fn singular_matrix_is_rejected() {
        let mut a = [1.0, 2.0, 2.0, 4.0];
        let mut ipiv = [0usize; 2];
        assert!(getrf_ip(2, &mut a, 2, &mut ipiv).is_err());
    }

    proptest::proptest! {
        #[test]
        fn solves_any_diagonally_dominant_3x3_system(
            diag in proptest::array::uniform3(5.0f32..10.0),
            off in proptest::array::uniform6(-1.0f32..1.0),
            b in proptest::array::uniform3(-10.0f32..10.0),
        ) {
            // Strict row diagonal dominance (|diag| > sum of |off-diagonal|
            // in that row) guarantees invertibility regardless of pivot
            // order, so this reconstructs correctly for every generated
            // input rather than needing a fixed literal matrix.
            let a_orig = [
                diag[0], off[0], off[1],
                off[2], diag[1], off[3],
                off[4], off[5], diag[2],
            ];
            let mut a = a_orig;
            let mut ipiv = [0usize; 3];
            getrf_ip(3, &mut a, 3, &mut ipiv).unwrap();
            let mut x = b;
            getrs(3, &a, 3, &ipiv, &mut x, 1).unwrap();

            for row in 0..3 {
                let mut acc = 0.0f32;
                for col in 0..3 {
                    acc += a_orig[row * 3 + col] * x[col];
                }
                proptest::prop_assert!((acc - b[row]).abs() < 1e-2);
            }
        }
    }
}
