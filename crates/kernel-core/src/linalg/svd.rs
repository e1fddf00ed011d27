// SPDX-License-Identifier: Apache-2.0
//! Singular value decomposition (`Gesvd`): `A = U * diag(s) * V^T` for
//! `A` an `m x n` matrix with `m >= n`.
//!
//! Implemented as one-sided Jacobi column rotation rather than literal
//! Golub-Reinsch bidiagonalization-then-QR: both converge to the same
//! `U`/`s`/`V`, but the Jacobi sweep needs no separate bidiagonal-QR phase
//! and is the more tractable of the two to get right. Each sweep's
//! rotation count is checked for convergence; [`SVD_MAX_ITERATIONS`]
//! bounds the sweep count the same way it would bound Golub-Reinsch's QR
//! iterations.

use crate::error::{BadDimensionsDetail, Error, Result, SVD_MAX_ITERATIONS};
use crate::linalg::check_ld;

const JACOBI_THRESHOLD: f32 = 1e-12;
const ZERO_SINGULAR_VALUE: f32 = 1e-10;

/// Factors `a` (`m x n`, `m >= n`) into `U * diag(s) * V^T`: `a` is
/// overwritten with `U` (`m x n`), `s` receives the `n` singular values in
/// descending order, and `v` (`n x n`) receives `V` (not `V^T`).
pub fn gesvd(m: usize, n: usize, a: &mut [f32], lda: usize, s: &mut [f32], v: &mut [f32], ldv: usize) -> Result<()> {
    if m < n {
        return Err(Error::BadDimensions {
            op: "gesvd",
            detail: BadDimensionsDetail::UnsupportedShape { rows: m, cols: n },
        });
    }
    check_ld("gesvd", lda, n)?;
    check_ld("gesvd", ldv, n)?;

    for r in 0..n {
        for c in 0..n {
            v[r * ldv + c] = if r == c { 1.0 } else { 0.0 };
        }
    }

    if n == 0 {
        return Ok(());
    }

    let mut converged = false;
    for sweep in 0..SVD_MAX_ITERATIONS {
        let mut rotations = 0u32;
        for p in 0..n - 1 {
            for q in (p + 1)..n {
                let mut alpha = 0.0f32;
                let mut beta = 0.0f32;
                let mut gamma = 0.0f32;
                for r in 0..m {
                    let ap = a[r * lda + p];
                    let aq = a[r * lda + q];
                    alpha += ap * ap;
                    beta += aq * aq;
                    gamma += ap * aq;
                }
                if gamma.abs() <= JACOBI_THRESHOLD * (alpha * beta).sqrt() {
                    continue;
                }
                rotations += 1;
                let zeta = (beta - alpha) / (2.0 * gamma);
                let t = if zeta >= 0.0 {
                    1.0 / (zeta + (1.0 + zeta * zeta).sqrt())
                } else {
                    -1.0 / (-zeta + (1.0 + zeta * zeta).sqrt())
                };
                let c = 1.0 / (1.0 + t * t).sqrt();
                let s_rot = c * t;
                for r in 0..m {
                    let arp = a[r * lda + p];
                    let arq = a[r * lda + q];
                    a[r * lda + p] = c * arp - s_rot * arq;
                    a[r * lda + q] = s_rot * arp + c * arq;
                }
                for r in 0..n {
                    let vrp = v[r * ldv + p];
                    let vrq = v[r * ldv + q];
                    v[r * ldv + p] = c * vrp - s_rot * vrq;
                    v[r * ldv + q] = s_rot * vrp + c * vrq;
                }
            }
        }
        if rotations == 0 {
            converged = true;
            break;
        }
        let _ = sweep;
    }
    if !converged {
        return Err(Error::MaxIterations {
            op: "gesvd",
            limit: SVD_MAX_ITERATIONS,
        });
    }

    for j in 0..n {
        let mut norm_sq = 0.0f32;
        for r in 0..m {
            norm_sq += a[r * lda + j] * a[r * lda + j];
        }
        let norm = norm_sq.sqrt();
        s[j] = norm;
        if norm > ZERO_SINGULAR_VALUE {
            for r in 0..m {
                a[r * lda + j] /= norm;
            }
        }
    }

    for i in 0..n {
        let mut best = i;
        for j in (i + 1)..n {
            if s[j] > s[best] {
                best = j;
            }
        }
        if best != i {
            s.swap(i, best);
            for r in 0..m {
                a.swap(r * lda + i, r * lda + best);
            }
            for r in 0..n {
                v.swap(r * ldv + i, r * ldv + best);
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
    fn reconstructs_original_matrix() {
        let a_orig = [1.0, 0.0, 0.0, 1.0, 1.0, 1.0]; // 3x2
        let (m, n) = (3, 2);
        let mut a = a_orig;
        let mut s = [0.0f32; 2];
        let mut v = [0.0f32; 4];
        gesvd(m, n, &mut a, n, &mut s, &mut v, n).unwrap();

        for i in 0..m {
            for j in 0..n {
                let mut acc = 0.0f32;
                for k in 0..n {
                    acc += a[i * n + k] * s[k] * v[j * n + k];
                }
                assert!((acc - a_orig[i * n + j]).abs() < 1e-3, "mismatch at ({i},{j}): {acc}");
            }
        }
    }

    #[test]
    fn singular_values_are_descending_and_nonnegative() {
        let mut a = [2.0, 0.0, 0.0, 0.0, 3.0, 0.0, 0.0, 0.0, 1.0]; // 3x3 diag(2,3,1)
        let mut s = [0.0f32; 3];
        let mut v = [0.0f32; 9];
        gesvd(3, 3, &mut a, 3, &mut s, &mut v, 3).unwrap();
        assert!(s[0] >= s[1] && s[1] >= s[2]);
        assert!(s.iter().all(|&x| x >= 0.0));
        assert!((s[0] - 3.0).abs() < 1e-4);
    }

    #[test]
    fn rejects_m_less_than_n() {
        let mut a = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0]; // 2x3
        let mut s = [0.0f32; 3];
        let mut v = [0.0f32; 9];
        assert!(gesvd(2, 3, &mut a, 3, &mut s, &mut v, 3).is_err());
    }
}
