// SPDX-License-Identifier: Apache-2.0
//! Matrix flavor (C2): `(buffer, rows, cols, ld)` kernels, thin wrappers
//! over [`crate::elementwise::tensor`]'s rank-2 skeleton. A call with
//! `ld == cols` takes the tensor module's contiguous fast path
//! automatically, since that is exactly the shape's canonical stride.

use crate::elementwise::{tensor, Numeric};
use crate::shape::{Shape, Stride};

fn shape_stride(rows: usize, cols: usize, ld: usize) -> (Shape, Stride) {
    (Shape::new(&[rows, cols]), Stride::new(&[ld as isize, 1]))
}

/// `dst[r][c] <- src[r][c]`.
#[allow(clippy::too_many_arguments)]
pub fn copy<T: Numeric>(
    dst: &mut [T],
    dst_ld: usize,
    src: &[T],
    src_ld: usize,
    rows: usize,
    cols: usize,
) {
    let (shape, ds) = shape_stride(rows, cols, dst_ld);
    let (_, ss) = shape_stride(rows, cols, src_ld);
    tensor::elem_copy(dst, src, &shape, &ds, &ss);
}

/// `a[r][c] <-> b[r][c]`.
#[allow(clippy::too_many_arguments)]
pub fn swap<T: Numeric>(
    a: &mut [T],
    a_ld: usize,
    b: &mut [T],
    b_ld: usize,
    rows: usize,
    cols: usize,
) {
    let (shape, as_) = shape_stride(rows, cols, a_ld);
    let (_, bs) = shape_stride(rows, cols, b_ld);
    tensor::elem_swap(a, b, &shape, &as_, &bs);
}

/// `dst(U)[r][c] <- src(T)[r][c]` with clamping-on-narrow-to-integer
/// semantics.
#[allow(clippy::too_many_arguments)]
pub fn convert<T: Numeric, U: Numeric>(
    dst: &mut [U],
    dst_ld: usize,
    src: &[T],
    src_ld: usize,
    rows: usize,
    cols: usize,
) {
    let (shape, ds) = shape_stride(rows, cols, dst_ld);
    let (_, ss) = shape_stride(rows, cols, src_ld);
    tensor::elem_convert(dst, src, &shape, &ds, &ss);
}

/// `dst[r][c] <- value`.
pub fn fill<T: Numeric>(dst: &mut [T], dst_ld: usize, value: T, rows: usize, cols: usize) {
    let (shape, ds) = shape_stride(rows, cols, dst_ld);
    tensor::elem_fill(dst, value, &shape, &ds);
}

/// `dst[r][c] <- op(src[r][c])`.
#[allow(clippy::too_many_arguments)]
pub fn unary<T: Numeric>(
    dst: &mut [T],
    dst_ld: usize,
    src: &[T],
    src_ld: usize,
    rows: usize,
    cols: usize,
    op: impl Fn(T) -> T + Sync,
) {
    let (shape, ds) = shape_stride(rows, cols, dst_ld);
    let (_, ss) = shape_stride(rows, cols, src_ld);
    tensor::elem_unary(dst, src, &shape, &ds, &ss, op);
}

/// `dst[r][c] <- op(a[r][c], b[r][c])`.
#[allow(clippy::too_many_arguments)]
pub fn binary<T: Numeric>(
    dst: &mut [T],
    dst_ld: usize,
    a: &[T],
    a_ld: usize,
    b: &[T],
    b_ld: usize,
    rows: usize,
    cols: usize,
    op: impl Fn(T, T) -> T + Sync,
) {
    let (shape, ds) = shape_stride(rows, cols, dst_ld);
    let (_, as_) = shape_stride(rows, cols, a_ld);
    let (_, bs) = shape_stride(rows, cols, b_ld);
    tensor::elem_binary(dst, a, b, &shape, &ds, &as_, &bs, op);
}

/// `dst[r][c] <- op(c_buf[r][c], a[r][c], b[r][c])` — the `where` family's
/// matrix entry point.
#[allow(clippy::too_many_arguments)]
pub fn ternary<T: Numeric>(
    dst: &mut [T],
    dst_ld: usize,
    c_buf: &[T],
    c_ld: usize,
    a: &[T],
    a_ld: usize,
    b: &[T],
    b_ld: usize,
    rows: usize,
    cols: usize,
    op: impl Fn(T, T, T) -> T + Sync,
) {
    let (shape, ds) = shape_stride(rows, cols, dst_ld);
    let (_, cs) = shape_stride(rows, cols, c_ld);
    let (_, as_) = shape_stride(rows, cols, a_ld);
    let (_, bs) = shape_stride(rows, cols, b_ld);
    tensor::elem_ternary(dst, c_buf, a, b, &shape, &ds, &cs, &as_, &bs, op);
}

/// `dst[r][c] <- op(src[r][c], k)`.
#[allow(clippy::too_many_arguments)]
pub fn scalar_unary<T: Numeric>(
    dst: &mut [T],
    dst_ld: usize,
    src: &[T],
    src_ld: usize,
    k: T,
    rows: usize,
    cols: usize,
    op: impl Fn(T, T) -> T + Sync,
) {
    let (shape, ds) = shape_stride(rows, cols, dst_ld);
    let (_, ss) = shape_stride(rows, cols, src_ld);
    tensor::elem_scalar_unary(dst, src, k, &shape, &ds, &ss, op);
}

/// `dst[r][c] <- op(a[r][c], b[r][c], k)`.
#[allow(clippy::too_many_arguments)]
pub fn scalar_binary<T: Numeric>(
    dst: &mut [T],
    dst_ld: usize,
    a: &[T],
    a_ld: usize,
    b: &[T],
    b_ld: usize,
    k: T,
    rows: usize,
    cols: usize,
    op: impl Fn(T, T, T) -> T + Sync,
) {
    let (shape, ds) = shape_stride(rows, cols, dst_ld);
    let (_, as_) = shape_stride(rows, cols, a_ld);
    let (_, bs) = shape_stride(rows, cols, b_ld);
    tensor::elem_scalar_binary(dst, a, b, k, &shape, &ds, &as_, &bs, op);
}

/// `dst[r][c] <- -src[r][c]`.
#[allow(clippy::too_many_arguments)]
pub fn negative<T: Numeric>(
    dst: &mut [T],
    dst_ld: usize,
    src: &[T],
    src_ld: usize,
    rows: usize,
    cols: usize,
) {
    let (shape, ds) = shape_stride(rows, cols, dst_ld);
    let (_, ss) = shape_stride(rows, cols, src_ld);
    tensor::elem_negative(dst, src, &shape, &ds, &ss);
}

/// `dst[r][c] <- sign(src[r][c])`.
#[allow(clippy::too_many_arguments)]
pub fn sign<T: Numeric>(
    dst: &mut [T],
    dst_ld: usize,
    src: &[T],
    src_ld: usize,
    rows: usize,
    cols: usize,
) {
    let (shape, ds) = shape_stride(rows, cols, dst_ld);
    let (_, ss) = shape_stride(rows, cols, src_ld);
    tensor::elem_sign(dst, src, &shape, &ds, &ss);
}
