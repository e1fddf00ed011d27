// SPDX-License-Identifier: Apache-2.0
//! Householder QR factorization (`Geqrf`) and explicit `Q` construction
//! (`Orgqr`).

use crate::error::Result;
use crate::linalg::householder::{self, Reflector};
use crate::linalg::check_ld;

/// Factors the `m x n` matrix `a` (`m >= n`) in place: the upper triangle
/// becomes `R`, the strict lower triangle stores each Householder
/// reflector's trailing components (the leading `1` is implicit), and
/// `tau[k]` stores reflector `k`'s scaling factor. Each reflector is
/// constructed from its own pivot column, which bounds its scale by that
/// column's own norm rather than the whole matrix's.
pub fn geqrf(m: usize, n: usize, a: &mut [f32], lda: usize, tau: &mut [f32]) -> Result<()> {
    check_ld("geqrf", lda, n)?;
    let k = m.min(n);
    let mut x = vec![0.0f32; m];
    for col in 0..k {
        let len = m - col;
        for (i, slot) in x[..len].iter_mut().enumerate() {
            *slot = a[(col + i) * lda + col];
        }
        let (refl, alpha) = householder::construct(&x[..len]);
        a[col * lda + col] = alpha;
        for i in 1..len {
            a[(col + i) * lda + col] = refl.v[i];
        }
        tau[col] = refl.beta;
        if col + 1 < n {
            householder::apply_cols(&refl, &mut a[col * lda..], lda, len, col + 1, n - col - 1);
        }
    }
    Ok(())
}

/// Builds the first `n` columns of `Q` explicitly (`m x n`), overwriting
/// `a`'s contents with `Q` using the `k` reflectors recorded by
/// [`geqrf`].
pub fn orgqr(m: usize, n: usize, k: usize, a: &mut [f32], lda: usize, tau: &[f32]) -> Result<()> {
    check_ld("orgqr", lda, n)?;
    let mut refls: Vec<Reflector> = Vec::with_capacity(k);
    for col in 0..k {
        let len = m - col;
        let mut v = vec![0.0f32; len];
        v[0] = 1.0;
        for i in 1..len {
            v[i] = a[(col + i) * lda + col];
        }
        refls.push(Reflector { v, beta: tau[col] });
    }
    for r in 0..m {
        for c in 0..n {
            a[r * lda + c] = if r == c { 1.0 } else { 0.0 };
        }
    }
    for col in (0..k).rev() {
        let len = m - col;
        householder::apply_cols(&refls[col], &mut a[col * lda..], lda, len, 0, n);
    }
    Ok(())
}
