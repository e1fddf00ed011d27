// SPDX-License-Identifier: Apache-2.0
//! Vector flavor (C2): `(buffer, n, stride)` kernels, thin wrappers over
//! [`crate::elementwise::tensor`]'s rank-1 skeleton. A `stride == 1` call
//! takes the tensor module's contiguous fast path automatically.

use crate::elementwise::{tensor, Numeric};
use crate::shape::{Shape, Stride};

fn shape_stride(n: usize, stride: isize) -> (Shape, Stride) {
    (Shape::new(&[n]), Stride::new(&[stride]))
}

/// `dst[i] <- src[i]`, `i` in `0..n`.
pub fn copy<T: Numeric>(dst: &mut [T], dst_stride: isize, src: &[T], src_stride: isize, n: usize) {
    let (shape, ds) = shape_stride(n, dst_stride);
    let (_, ss) = shape_stride(n, src_stride);
    tensor::elem_copy(dst, src, &shape, &ds, &ss);
}

/// `a[i] <-> b[i]`, `i` in `0..n`.
pub fn swap<T: Numeric>(a: &mut [T], a_stride: isize, b: &mut [T], b_stride: isize, n: usize) {
    let (shape, as_) = shape_stride(n, a_stride);
    let (_, bs) = shape_stride(n, b_stride);
    tensor::elem_swap(a, b, &shape, &as_, &bs);
}

/// `dst(U)[i] <- src(T)[i]` with clamping-on-narrow-to-integer semantics.
pub fn convert<T: Numeric, U: Numeric>(
    dst: &mut [U],
    dst_stride: isize,
    src: &[T],
    src_stride: isize,
    n: usize,
) {
    let (shape, ds) = shape_stride(n, dst_stride);
    let (_, ss) = shape_stride(n, src_stride);
    tensor::elem_convert(dst, src, &shape, &ds, &ss);
}

/// `dst[i] <- c`, `i` in `0..n`.
pub fn fill<T: Numeric>(dst: &mut [T], dst_stride: isize, value: T, n: usize) {
    let (shape, ds) = shape_stride(n, dst_stride);
    tensor::elem_fill(dst, value, &shape, &ds);
}

/// `dst[i] <- op(src[i])`.
pub fn unary<T: Numeric>(
    dst: &mut [T],
    dst_stride: isize,
    src: &[T],
    src_stride: isize,
    n: usize,
    op: impl Fn(T) -> T + Sync,
) {
    let (shape, ds) = shape_stride(n, dst_stride);
    let (_, ss) = shape_stride(n, src_stride);
    tensor::elem_unary(dst, src, &shape, &ds, &ss, op);
}

/// `dst[i] <- op(a[i], b[i])`.
#[allow(clippy::too_many_arguments)]
pub fn binary<T: Numeric>(
    dst: &mut [T],
    dst_stride: isize,
    a: &[T],
    a_stride: isize,
    b: &[T],
    b_stride: isize,
    n: usize,
    op: impl Fn(T, T) -> T + Sync,
) {
    let (shape, ds) = shape_stride(n, dst_stride);
    let (_, as_) = shape_stride(n, a_stride);
    let (_, bs) = shape_stride(n, b_stride);
    tensor::elem_binary(dst, a, b, &shape, &ds, &as_, &bs, op);
}

/// `dst[i] <- op(c[i], a[i], b[i])` — the `where` family's vector entry point.
#[allow(clippy::too_many_arguments)]
pub fn ternary<T: Numeric>(
    dst: &mut [T],
    dst_stride: isize,
    c: &[T],
    c_stride: isize,
    a: &[T],
    a_stride: isize,
    b: &[T],
    b_stride: isize,
    n: usize,
    op: impl Fn(T, T, T) -> T + Sync,
) {
    let (shape, ds) = shape_stride(n, dst_stride);
    let (_, cs) = shape_stride(n, c_stride);
    let (_, as_) = shape_stride(n, a_stride);
    let (_, bs) = shape_stride(n, b_stride);
    tensor::elem_ternary(dst, c, a, b, &shape, &ds, &cs, &as_, &bs, op);
}

/// `dst[i] <- op(src[i], k)`.
#[allow(clippy::too_many_arguments)]
pub fn scalar_unary<T: Numeric>(
    dst: &mut [T],
    dst_stride: isize,
    src: &[T],
    src_stride: isize,
    k: T,
    n: usize,
    op: impl Fn(T, T) -> T + Sync,
) {
    let (shape, ds) = shape_stride(n, dst_stride);
    let (_, ss) = shape_stride(n, src_stride);
    tensor::elem_scalar_unary(dst, src, k, &shape, &ds, &ss, op);
}

/// `dst[i] <- op(a[i], b[i], k)`.
#[allow(clippy::too_many_arguments)]
pub fn scalar_binary<T: Numeric>(
    dst: &mut [T],
    dst_stride: isize,
    a: &[T],
    a_stride: isize,
    b: &[T],
    b_stride: isize,
    k: T,
    n: usize,
    op: impl Fn(T, T, T) -> T + Sync,
) {
    let (shape, ds) = shape_stride(n, dst_stride);
    let (_, as_) = shape_stride(n, a_stride);
    let (_, bs) = shape_stride(n, b_stride);
    tensor::elem_scalar_binary(dst, a, b, k, &shape, &ds, &as_, &bs, op);
}

/// `dst[i] <- -src[i]`.
pub fn negative<T: Numeric>(dst: &mut [T], dst_stride: isize, src: &[T], src_stride: isize, n: usize) {
    let (shape, ds) = shape_stride(n, dst_stride);
    let (_, ss) = shape_stride(n, src_stride);
    tensor::elem_negative(dst, src, &shape, &ds, &ss);
}

/// `dst[i] <- sign(src[i])`.
pub fn sign<T: Numeric>(dst: &mut [T], dst_stride: isize, src: &[T], src_stride: isize, n: usize) {
    let (shape, ds) = shape_stride(n, dst_stride);
    let (_, ss) = shape_stride(n, src_stride);
    tensor::elem_sign(dst, src, &shape, &ds, &ss);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contiguous_stride_one_matches_tensor_fast_path() {
        let src = [1, 2, 3, 4];
        let mut dst = [0; 4];
        copy(&mut dst, 1, &src, 1, 4);
        assert_eq!(dst, src);
    }

    #[test]
    fn strided_gather() {
        let src = [1, 2, 3, 4, 5, 6];
        let mut dst = [0; 3];
        copy(&mut dst, 1, &src, 2, 3);
        assert_eq!(dst, [1, 3, 5]);
    }

    #[test]
    fn fill_strided() {
        let mut buf = [0; 5];
        fill(&mut buf, 2, 9, 3);
        assert_eq!(buf, [9, 0, 9, 0, 9]);
    }
}
