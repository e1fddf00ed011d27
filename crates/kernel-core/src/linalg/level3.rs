// SPDX-License-Identifier: Apache-2.0
//! BLAS level 3: matrix-matrix operations over row-major buffers with
//! explicit leading dimensions. No blocking/tiling: these are reference
//! implementations, not performance-tuned kernels. [`gemm`] partitions its
//! outermost (row) loop across [`crate::backend::parallel_rows_mut`],
//! which is where the `mt`/`st` split (C4) actually takes effect; `syrk`
//! and `trmm` stay single-threaded reference implementations since their
//! row ranges don't partition into disjoint output slices as cleanly
//! (`syrk` only touches a triangle per row, `trmm` reads all of `b` back
//! through `orig` before writing).

use crate::error::Result;
use crate::linalg::{check_ld, check_len, Diag, Side, Trans, Uplo};

fn a_elem(a: &[f32], lda: usize, trans: Trans, r: usize, c: usize) -> f32 {
    match trans {
        Trans::No => a[r * lda + c],
        Trans::Yes => a[c * lda + r],
    }
}

/// `C <- alpha * op(A) * op(B) + beta * C`.
///
/// `op(A)` is `m x k`, `op(B)` is `k x n`, `C` is `m x n`. `lda`/`ldb` bound
/// `A`/`B` as stored (before transposition is applied).
#[allow(clippy::too_many_arguments)]
pub fn gemm(
    transa: Trans,
    transb: Trans,
    m: usize,
    n: usize,
    k: usize,
    alpha: f32,
    a: &[f32],
    lda: usize,
    b: &[f32],
    ldb: usize,
    beta: f32,
    c: &mut [f32],
    ldc: usize,
) -> Result<()> {
    let a_cols = match transa {
        Trans::No => k,
        Trans::Yes => m,
    };
    let b_cols = match transb {
        Trans::No => n,
        Trans::Yes => k,
    };
    check_ld("gemm", lda, a_cols)?;
    check_ld("gemm", ldb, b_cols)?;
    check_ld("gemm", ldc, n)?;
    check_len("gemm", c.len(), (m.saturating_sub(1)) * ldc + n)?;

    let row = |i: usize, c_row: &mut [f32]| {
        for j in 0..n {
            let mut acc = 0.0f32;
            for p in 0..k {
                acc += a_elem(a, lda, transa, i, p) * a_elem(b, ldb, transb, p, j);
            }
            c_row[j] = alpha * acc + beta * c_row[j];
        }
    };

    // `parallel_rows_mut` chunks `c` into exact `ldc`-wide row stripes, so
    // it only applies when every one of the `m` rows has a full stripe
    // backing it (the common case: a buffer sized exactly `m * ldc`).
    // Otherwise — `ld > n` with a buffer trimmed to the last row's actual
    // `n` columns — this falls back to the single-threaded row loop.
    if c.len() >= m * ldc {
        crate::backend::parallel_rows_mut(&mut c[..m * ldc], ldc, crate::backend::MIN_PARALLEL_UNITS, |row_start, chunk| {
            for (local_i, c_row) in chunk.chunks_mut(ldc).enumerate() {
                row(row_start + local_i, &mut c_row[..n]);
            }
        });
    } else {
        for i in 0..m {
            row(i, &mut c[i * ldc..i * ldc + n]);
        }
    }
    Ok(())
}

/// Symmetric rank-k update: `C <- alpha * op(A) * op(A)^T + beta * C`,
/// writing only the `uplo` triangle of the `n x n` `C`.
///
/// `op(A)` is `n x k` when `trans == Trans::No` (so `A * A^T`), or `k x n`
/// when `trans == Trans::Yes` (so `A^T * A`).
#[allow(clippy::too_many_arguments)]
pub fn syrk(
    uplo: Uplo,
    trans: Trans,
    n: usize,
    k: usize,
    alpha: f32,
    a: &[f32],
    lda: usize,
    beta: f32,
    c: &mut [f32],
    ldc: usize,
) -> Result<()> {
    let a_cols = match trans {
        Trans::No => k,
        Trans::Yes => n,
    };
    check_ld("syrk", lda, a_cols)?;
    check_ld("syrk", ldc, n)?;

    for i in 0..n {
        let (jlo, jhi) = match uplo {
            Uplo::Upper => (i, n),
            Uplo::Lower => (0, i + 1),
        };
        for j in jlo..jhi {
            let mut acc = 0.0f32;
            for p in 0..k {
                acc += a_elem(a, lda, trans, i, p) * a_elem(a, lda, trans, j, p);
            }
            let idx = i * ldc + j;
            c[idx] = alpha * acc + beta * c[idx];
        }
    }
    Ok(())
}

/// `B <- alpha * op(A) * B` (`side == Side::Left`, `A` is `m x m`) or
/// `B <- alpha * B * op(A)` (`side == Side::Right`, `A` is `n x n`), `B` is
/// `m x n`, updated in place. `A` is triangular per `uplo`/`diag`.
#[allow(clippy::too_many_arguments)]
pub fn trmm(
    side: Side,
    uplo: Uplo,
    trans: Trans,
    diag: Diag,
    m: usize,
    n: usize,
    alpha: f32,
    a: &[f32],
    lda: usize,
    b: &mut [f32],
    ldb: usize,
) -> Result<()> {
    let a_dim = match side {
        Side::Left => m,
        Side::Right => n,
    };
    check_ld("trmm", lda, a_dim)?;
    check_ld("trmm", ldb, n)?;

    let triangular = |r: usize, c: usize| -> f32 {
        if r == c {
            if matches!(diag, Diag::Unit) {
                1.0
            } else {
                a_elem(a, lda, trans, r, c)
            }
        } else {
            let (lo, hi) = match (uplo, trans) {
                (Uplo::Upper, Trans::No) | (Uplo::Lower, Trans::Yes) => (r, c),
                (Uplo::Lower, Trans::No) | (Uplo::Upper, Trans::Yes) => (c, r),
            };
            if lo < hi {
                a_elem(a, lda, trans, r, c)
            } else {
                0.0
            }
        }
    };

    match side {
        Side::Left => {
            let orig: Vec<f32> = b[..m * ldb].to_vec();
            for i in 0..m {
                for j in 0..n {
                    let mut acc = 0.0f32;
                    for p in 0..m {
                        let t = triangular(i, p);
                        if t != 0.0 {
                            acc += t * orig[p * ldb + j];
                        }
                    }
                    b[i * ldb + j] = alpha * acc;
                }
            }
        }
        Side::Right => {
            let orig: Vec<f32> = b[..m * ldb].to_vec();
            for i in 0..m {
                for j in 0..n {
                    let mut acc = 0.0f32;
                    for p in 0..n {
                        let t = triangular(p, j);
                        if t != 0.0 {
                            acc += orig[i * ldb + p] * t;
                        }
                    }
                    b[i * ldb + j] = alpha * acc;
                }
            }
        }
    }
    Ok(())
}
