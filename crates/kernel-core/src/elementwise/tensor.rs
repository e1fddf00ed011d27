// SPDX-License-Identifier: Apache-2.0
//! Tensor flavor (C2): `(buffer, shape, strides)` element-wise kernels.
//!
//! Every kernel here checks contiguity and emptiness up front, then either
//! runs a tight linear loop or falls back to
//! [`crate::shape::advance_offsets_2`] et al. No kernel allocates; scratch
//! index/offset state is a handful of stack locals sized by
//! [`crate::shape::MAX_DIMS`].
//!
//! The contiguous fast path is the one C4 (`backend`) parallelizes: it
//! hands `dst`'s contiguous run to [`crate::backend::parallel_rows_mut`],
//! which chunks it across the worker pool in `mt` builds and runs it
//! in-line in `st` builds, per `spec.md` §4.4. The strided fallback always
//! runs on the calling thread — the non-contiguous case is assumed to be
//! the exception, not the hot path this engine is tuned for.

use crate::backend;
use crate::elementwise::Numeric;
use crate::shape::{Shape, Stride, MAX_DIMS};

/// `dst[i] <- src[i]` for every index in `shape`.
///
/// Safe to call with `dst` and `src` aliasing the same buffer when their
/// strides match.
pub fn elem_copy<T: Numeric>(dst: &mut [T], src: &[T], shape: &Shape, dst_s: &Stride, src_s: &Stride) {
    elem_unary(dst, src, shape, dst_s, src_s, |x| x);
}

/// `a[i] <-> b[i]` for every index in `shape`.
pub fn elem_swap<T: Numeric>(a: &mut [T], b: &mut [T], shape: &Shape, a_s: &Stride, b_s: &Stride) {
    if shape.is_empty() {
        return;
    }
    if a_s.is_contiguous(shape) && b_s.is_contiguous(shape) {
        // Two buffers are mutated in lockstep here, which doesn't fit
        // `backend::parallel_rows_mut`'s single-output-buffer contract, so
        // this stays on the calling thread regardless of build.
        let n = shape.size();
        for i in 0..n {
            let tmp = a[i];
            a[i] = b[i];
            b[i] = tmp;
        }
        return;
    }
    let mut index = [0usize; MAX_DIMS];
    let mut off_a: isize = 0;
    let mut off_b: isize = 0;
    loop {
        let ia = off_a as usize;
        let ib = off_b as usize;
        let tmp = a[ia];
        a[ia] = b[ib];
        b[ib] = tmp;
        if !crate::shape::advance_offsets_2(&mut index[..shape.rank()], shape, &mut off_a, a_s, &mut off_b, b_s) {
            break;
        }
    }
}

/// `dst(U) <- src(T)` with clamping-on-narrow-to-integer semantics,
/// implemented via [`Numeric::from_f64`].
pub fn elem_convert<T: Numeric, U: Numeric>(
    dst: &mut [U],
    src: &[T],
    shape: &Shape,
    dst_s: &Stride,
    src_s: &Stride,
) {
    if shape.is_empty() {
        return;
    }
    if dst_s.is_contiguous(shape) && src_s.is_contiguous(shape) {
        let n = shape.size();
        let src = &src[..n];
        backend::parallel_rows_mut(&mut dst[..n], 1, backend::MIN_PARALLEL_UNITS, |start, chunk| {
            for (i, slot) in chunk.iter_mut().enumerate() {
                *slot = crate::elementwise::convert_scalar(src[start + i]);
            }
        });
        return;
    }
    let mut index = [0usize; MAX_DIMS];
    let mut off_d: isize = 0;
    let mut off_s: isize = 0;
    loop {
        dst[off_d as usize] = crate::elementwise::convert_scalar(src[off_s as usize]);
        if !crate::shape::advance_offsets_2(&mut index[..shape.rank()], shape, &mut off_d, dst_s, &mut off_s, src_s) {
            break;
        }
    }
}

/// `dst[i] <- c` for every index in `shape`.
pub fn elem_fill<T: Numeric>(dst: &mut [T], value: T, shape: &Shape, dst_s: &Stride) {
    if shape.is_empty() {
        return;
    }
    if dst_s.is_contiguous(shape) {
        let n = shape.size();
        backend::parallel_rows_mut(&mut dst[..n], 1, backend::MIN_PARALLEL_UNITS, |_start, chunk| {
            chunk.fill(value);
        });
        return;
    }
    let mut index = [0usize; MAX_DIMS];
    let mut off: isize = 0;
    loop {
        dst[off as usize] = value;
        if !crate::shape::advance_offsets_1(&mut index[..shape.rank()], shape, &mut off, dst_s) {
            break;
        }
    }
}

/// `dst[i] <- op(src[i])`.
pub fn elem_unary<T: Numeric>(
    dst: &mut [T],
    src: &[T],
    shape: &Shape,
    dst_s: &Stride,
    src_s: &Stride,
    op: impl Fn(T) -> T + Sync,
) {
    if shape.is_empty() {
        return;
    }
    if dst_s.is_contiguous(shape) && src_s.is_contiguous(shape) {
        let n = shape.size();
        let src = &src[..n];
        backend::parallel_rows_mut(&mut dst[..n], 1, backend::MIN_PARALLEL_UNITS, |start, chunk| {
            for (i, slot) in chunk.iter_mut().enumerate() {
                *slot = op(src[start + i]);
            }
        });
        return;
    }
    let mut index = [0usize; MAX_DIMS];
    let mut off_d: isize = 0;
    let mut off_s: isize = 0;
    loop {
        dst[off_d as usize] = op(src[off_s as usize]);
        if !crate::shape::advance_offsets_2(&mut index[..shape.rank()], shape, &mut off_d, dst_s, &mut off_s, src_s) {
            break;
        }
    }
}

/// `dst[i] <- op(a[i], b[i])`.
#[allow(clippy::too_many_arguments)]
pub fn elem_binary<T: Numeric>(
    dst: &mut [T],
    a: &[T],
    b: &[T],
    shape: &Shape,
    dst_s: &Stride,
    a_s: &Stride,
    b_s: &Stride,
    op: impl Fn(T, T) -> T + Sync,
) {
    if shape.is_empty() {
        return;
    }
    if dst_s.is_contiguous(shape) && a_s.is_contiguous(shape) && b_s.is_contiguous(shape) {
        let n = shape.size();
        let (a, b) = (&a[..n], &b[..n]);
        backend::parallel_rows_mut(&mut dst[..n], 1, backend::MIN_PARALLEL_UNITS, |start, chunk| {
            for (i, slot) in chunk.iter_mut().enumerate() {
                *slot = op(a[start + i], b[start + i]);
            }
        });
        return;
    }
    let mut index = [0usize; MAX_DIMS];
    let mut off_d: isize = 0;
    let mut off_a: isize = 0;
    let mut off_b: isize = 0;
    loop {
        dst[off_d as usize] = op(a[off_a as usize], b[off_b as usize]);
        if !crate::shape::advance_offsets_3(
            &mut index[..shape.rank()],
            shape,
            &mut off_d,
            dst_s,
            &mut off_a,
            a_s,
            &mut off_b,
            b_s,
        ) {
            break;
        }
    }
}

/// `dst[i] <- op(c[i], a[i], b[i])`. The `where` op (`c > 0 ? a : b`) is
/// just this skeleton called with `|c, a, b| if c > T::zero() { a } else
/// { b }`.
#[allow(clippy::too_many_arguments)]
pub fn elem_ternary<T: Numeric>(
    dst: &mut [T],
    c: &[T],
    a: &[T],
    b: &[T],
    shape: &Shape,
    dst_s: &Stride,
    c_s: &Stride,
    a_s: &Stride,
    b_s: &Stride,
    op: impl Fn(T, T, T) -> T + Sync,
) {
    if shape.is_empty() {
        return;
    }
    if dst_s.is_contiguous(shape) && c_s.is_contiguous(shape) && a_s.is_contiguous(shape) && b_s.is_contiguous(shape) {
        let n = shape.size();
        let (c, a, b) = (&c[..n], &a[..n], &b[..n]);
        backend::parallel_rows_mut(&mut dst[..n], 1, backend::MIN_PARALLEL_UNITS, |start, chunk| {
            for (i, slot) in chunk.iter_mut().enumerate() {
                *slot = op(c[start + i], a[start + i], b[start + i]);
            }
        });
        return;
    }
    let mut index = [0usize; MAX_DIMS];
    let mut off_d: isize = 0;
    let mut off_c: isize = 0;
    let mut off_a: isize = 0;
    let mut off_b: isize = 0;
    loop {
        dst[off_d as usize] = op(c[off_c as usize], a[off_a as usize], b[off_b as usize]);
        if !crate::shape::advance_offsets_4(
            &mut index[..shape.rank()],
            shape,
            &mut off_d,
            dst_s,
            &mut off_c,
            c_s,
            &mut off_a,
            a_s,
            &mut off_b,
            b_s,
        ) {
            break;
        }
    }
}

/// `dst[i] <- op(src[i], k)`.
pub fn elem_scalar_unary<T: Numeric>(
    dst: &mut [T],
    src: &[T],
    k: T,
    shape: &Shape,
    dst_s: &Stride,
    src_s: &Stride,
    op: impl Fn(T, T) -> T + Sync,
) {
    elem_unary(dst, src, shape, dst_s, src_s, |x| op(x, k));
}

/// `dst[i] <- op(a[i], b[i], k)`.
#[allow(clippy::too_many_arguments)]
pub fn elem_scalar_binary<T: Numeric>(
    dst: &mut [T],
    a: &[T],
    b: &[T],
    k: T,
    shape: &Shape,
    dst_s: &Stride,
    a_s: &Stride,
    b_s: &Stride,
    op: impl Fn(T, T, T) -> T + Sync,
) {
    elem_binary(dst, a, b, shape, dst_s, a_s, b_s, |x, y| op(x, y, k));
}

/// `dst[i] <- op(c[i], a[i], k)`.
#[allow(clippy::too_many_arguments)]
pub fn elem_scalar_ternary<T: Numeric>(
    dst: &mut [T],
    c: &[T],
    a: &[T],
    k: T,
    shape: &Shape,
    dst_s: &Stride,
    c_s: &Stride,
    a_s: &Stride,
    op: impl Fn(T, T, T) -> T + Sync,
) {
    elem_binary(dst, c, a, shape, dst_s, c_s, a_s, |x, y| op(x, y, k));
}

/// `dst[i] <- -src[i]`.
pub fn elem_negative<T: Numeric>(dst: &mut [T], src: &[T], shape: &Shape, dst_s: &Stride, src_s: &Stride) {
    elem_unary(dst, src, shape, dst_s, src_s, |x| -x);
}

/// `dst[i] <- sign(src[i])`.
pub fn elem_sign<T: Numeric>(dst: &mut [T], src: &[T], shape: &Shape, dst_s: &Stride, src_s: &Stride) {
    elem_unary(dst, src, shape, dst_s, src_s, Numeric::signum_elem);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copy_contiguous_roundtrip() {
        let shape = Shape::new(&[2, 2]);
        let stride = shape.canonical_stride();
        let src = [1, 2, 3, 4];
        let mut mid = [0; 4];
        let mut back = [0; 4];
        elem_copy(&mut mid, &src, &shape, &stride, &stride);
        elem_copy(&mut back, &mid, &shape, &stride, &stride);
        assert_eq!(back, src);
    }

    #[test]
    fn swap_round_trip() {
        let shape = Shape::new(&[3]);
        let stride = shape.canonical_stride();
        let mut a = [1, 2, 3];
        let mut b = [4, 5, 6];
        elem_swap(&mut a, &mut b, &shape, &stride, &stride);
        assert_eq!(a, [4, 5, 6]);
        assert_eq!(b, [1, 2, 3]);
        elem_swap(&mut a, &mut b, &shape, &stride, &stride);
        assert_eq!(a, [1, 2, 3]);
        assert_eq!(b, [4, 5, 6]);
    }

    #[test]
    fn negative_round_trip() {
        let shape = Shape::new(&[4]);
        let stride = shape.canonical_stride();
        let src = [1.0_f32, -2.0, 3.0, 0.0];
        let mut mid = [0.0_f32; 4];
        let mut back = [0.0_f32; 4];
        elem_negative(&mut mid, &src, &shape, &stride, &stride);
        elem_negative(&mut back, &mid, &shape, &stride, &stride);
        assert_eq!(back, src);
    }

    #[test]
    fn sign_of_sign_round_trip() {
        let shape = Shape::new(&[4]);
        let stride = shape.canonical_stride();
        let src = [1.0_f32, -2.0, 0.0, 5.0];
        let mut once = [0.0_f32; 4];
        let mut twice = [0.0_f32; 4];
        elem_sign(&mut once, &src, &shape, &stride, &stride);
        elem_sign(&mut twice, &once, &shape, &stride, &stride);
        assert_eq!(once, twice);
        assert_eq!(once, [1.0, -1.0, 0.0, 1.0]);
    }

    #[test]
    fn where_ternary_scenario() {
        let shape = Shape::new(&[4]);
        let stride = shape.canonical_stride();
        let cond = [1, 0, 1, 0];
        let a = [10, 20, 30, 40];
        let b = [100, 200, 300, 400];
        let mut dst = [0; 4];
        elem_ternary(&mut dst, &cond, &a, &b, &shape, &stride, &stride, &stride, &stride, |c, a, b| {
            if c > 0 {
                a
            } else {
                b
            }
        });
        assert_eq!(dst, [10, 200, 30, 400]);
    }

    #[test]
    fn strided_copy_scenario() {
        // 3x3 destination, strides [3,1]; 2x2 source view over the same
        // layout, strides [3,1], starting at offset 0.
        let shape = Shape::new(&[2, 2]);
        let stride = Stride::new(&[3, 1]);
        let src = [1, 2, 0, 4, 5, 0, 0, 0, 0];
        let mut dst = [0; 9];
        elem_copy(&mut dst, &src, &shape, &stride, &stride);
        assert_eq!(dst, [1, 2, 0, 4, 5, 0, 0, 0, 0]);
    }

    proptest::proptest! {
        #[test]
        fn fast_path_matches_strided_path_for_any_2x2(vals in proptest::array::uniform4(-1000i32..1000)) {
            // Same property as `fast_path_matches_strided_path` below, but
            // generalized over arbitrary 2x2 integer content instead of one
            // literal array.
            let shape = Shape::new(&[2, 2]);
            let canonical = shape.canonical_stride();
            let src = vals;
            let mut via_fast = [0; 4];
            elem_unary(&mut via_fast, &src, &shape, &canonical, &canonical, |x| x * 2);

            let strided_stride = Stride::new(&[4, 1]);
            let mut via_strided = [0; 8];
            elem_unary(&mut via_strided, &src, &shape, &strided_stride, &canonical, |x| x * 2);
            proptest::prop_assert_eq!(via_strided[0], via_fast[0]);
            proptest::prop_assert_eq!(via_strided[1], via_fast[1]);
            proptest::prop_assert_eq!(via_strided[4], via_fast[2]);
            proptest::prop_assert_eq!(via_strided[5], via_fast[3]);
        }
    }

    #[test]
    fn fast_path_matches_strided_path() {
        // Contiguous entry point and a non-canonical-but-still-contiguous-
        // sized strided entry point over the same logical data must agree.
        let shape = Shape::new(&[2, 2]);
        let canonical = shape.canonical_stride();
        let src = [1, 2, 3, 4];
        let mut via_fast = [0; 4];
        elem_unary(&mut via_fast, &src, &shape, &canonical, &canonical, |x| x * 2);

        // Force the strided branch by wrapping a non-contiguous dst stride
        // over a larger physical buffer, then compare against a contiguous
        // computation of the same logical values.
        let strided_stride = Stride::new(&[4, 1]);
        let mut via_strided = [0; 8];
        elem_unary(&mut via_strided, &src, &shape, &strided_stride, &canonical, |x| x * 2);
        assert_eq!(via_strided[0], via_fast[0]);
        assert_eq!(via_strided[1], via_fast[1]);
        assert_eq!(via_strided[4], via_fast[2]);
        assert_eq!(via_strided[5], via_fast[3]);
    }
}
