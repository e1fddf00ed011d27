// SPDX-License-Identifier: Apache-2.0
//! The comparison family (C2): `{gt, ge, lt, le, eq, ne}`, each producing a
//! `1`/`0` result in the element type rather than a separate boolean
//! buffer, so comparison results compose with the rest of the element-wise
//! engine without a type-level seam.
//!
//! Unlike the arithmetic families, comparisons are not routed through
//! [`crate::elementwise::tensor::elem_binary`]/[`crate::elementwise::tensor::elem_unary`]'s
//! op-closure skeleton: each relational operator gets its own hand-rolled
//! loop body per flavor, with the operator itself inlined by macro
//! expansion rather than threaded through as a generic `Fn` parameter. This
//! mirrors how a BLAS-style surface names `isamax`/`idamax` rather than
//! taking an `Ordering` callback, and lets the compiler see the branchless
//! comparison directly in each loop instead of behind a closure call.

use crate::backend;
use crate::elementwise::Numeric;
use crate::shape::{Shape, Stride, MAX_DIMS};

fn as_elem<T: Numeric>(cond: bool) -> T {
    if cond {
        T::one()
    } else {
        T::zero()
    }
}

macro_rules! define_comparisons {
    ($($name:ident => $op:tt),* $(,)?) => {
        $(
            #[doc = concat!("Element-wise `a ", stringify!($op), " b`, tensor flavor.")]
            #[allow(clippy::too_many_arguments)]
            pub fn $name<T: Numeric>(
                dst: &mut [T],
                a: &[T],
                b: &[T],
                shape: &Shape,
                dst_s: &Stride,
                a_s: &Stride,
                b_s: &Stride,
            ) {
                if shape.is_empty() {
                    return;
                }
                if dst_s.is_contiguous(shape) && a_s.is_contiguous(shape) && b_s.is_contiguous(shape) {
                    let n = shape.size();
                    let (a, b) = (&a[..n], &b[..n]);
                    backend::parallel_rows_mut(&mut dst[..n], 1, backend::MIN_PARALLEL_UNITS, |start, chunk| {
                        for (i, slot) in chunk.iter_mut().enumerate() {
                            *slot = as_elem(a[start + i] $op b[start + i]);
                        }
                    });
                    return;
                }
                let mut index = [0usize; MAX_DIMS];
                let mut off_d: isize = 0;
                let mut off_a: isize = 0;
                let mut off_b: isize = 0;
                loop {
                    dst[off_d as usize] = as_elem(a[off_a as usize] $op b[off_b as usize]);
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
        )*
    };
}

macro_rules! define_scalar_comparisons {
    ($($name:ident => $op:tt),* $(,)?) => {
        $(
            #[doc = concat!("Element-wise `a ", stringify!($op), " k`, tensor flavor.")]
            pub fn $name<T: Numeric>(
                dst: &mut [T],
                a: &[T],
                k: T,
                shape: &Shape,
                dst_s: &Stride,
                a_s: &Stride,
            ) {
                if shape.is_empty() {
                    return;
                }
                if dst_s.is_contiguous(shape) && a_s.is_contiguous(shape) {
                    let n = shape.size();
                    let a = &a[..n];
                    backend::parallel_rows_mut(&mut dst[..n], 1, backend::MIN_PARALLEL_UNITS, |start, chunk| {
                        for (i, slot) in chunk.iter_mut().enumerate() {
                            *slot = as_elem(a[start + i] $op k);
                        }
                    });
                    return;
                }
                let mut index = [0usize; MAX_DIMS];
                let mut off_d: isize = 0;
                let mut off_a: isize = 0;
                loop {
                    dst[off_d as usize] = as_elem(a[off_a as usize] $op k);
                    if !crate::shape::advance_offsets_2(&mut index[..shape.rank()], shape, &mut off_d, dst_s, &mut off_a, a_s) {
                        break;
                    }
                }
            }
        )*
    };
}

define_comparisons!(gt => >, ge => >=, lt => <, le => <=, eq => ==, ne => !=);
define_scalar_comparisons!(gt_scalar => >, ge_scalar => >=, lt_scalar => <, le_scalar => <=, eq_scalar => ==, ne_scalar => !=);

/// Vector flavor (`(buffer, n, stride)`) of the comparison family. Each
/// function is its own stride-walking loop over `0..n` — not a call into
/// [`crate::elementwise::vector::binary`]/[`crate::elementwise::vector::unary`],
/// which would route back through the tensor flavor's op-closure skeleton.
pub mod vector_cmp {
    use super::as_elem;
    use crate::elementwise::Numeric;

    macro_rules! define {
        ($($name:ident => $op:tt),* $(,)?) => {
            $(
                #[doc = concat!("Element-wise `a ", stringify!($op), " b`, vector flavor.")]
                #[allow(clippy::too_many_arguments)]
                pub fn $name<T: Numeric>(
                    dst: &mut [T],
                    dst_stride: isize,
                    a: &[T],
                    a_stride: isize,
                    b: &[T],
                    b_stride: isize,
                    n: usize,
                ) {
                    let (mut di, mut ai, mut bi): (isize, isize, isize) = (0, 0, 0);
                    for _ in 0..n {
                        dst[di as usize] = as_elem(a[ai as usize] $op b[bi as usize]);
                        di += dst_stride;
                        ai += a_stride;
                        bi += b_stride;
                    }
                }
            )*
        };
    }

    define!(gt => >, ge => >=, lt => <, le => <=, eq => ==, ne => !=);

    macro_rules! define_scalar {
        ($($name:ident => $op:tt),* $(,)?) => {
            $(
                #[doc = concat!("Element-wise `a ", stringify!($op), " k`, vector flavor.")]
                pub fn $name<T: Numeric>(
                    dst: &mut [T],
                    dst_stride: isize,
                    a: &[T],
                    a_stride: isize,
                    k: T,
                    n: usize,
                ) {
                    let (mut di, mut ai): (isize, isize) = (0, 0);
                    for _ in 0..n {
                        dst[di as usize] = as_elem(a[ai as usize] $op k);
                        di += dst_stride;
                        ai += a_stride;
                    }
                }
            )*
        };
    }

    define_scalar!(gt_scalar => >, ge_scalar => >=, lt_scalar => <, le_scalar => <=, eq_scalar => ==, ne_scalar => !=);
}

/// Matrix flavor (`(buffer, rows, cols, ld)`) of the comparison family.
/// Each function is its own row-major double loop — not a call into
/// [`crate::elementwise::matrix::binary`]/[`crate::elementwise::matrix::unary`],
/// which would route back through the tensor flavor's op-closure skeleton.
pub mod matrix_cmp {
    use super::as_elem;
    use crate::elementwise::Numeric;

    macro_rules! define {
        ($($name:ident => $op:tt),* $(,)?) => {
            $(
                #[doc = concat!("Element-wise `a ", stringify!($op), " b`, matrix flavor.")]
                #[allow(clippy::too_many_arguments)]
                pub fn $name<T: Numeric>(
                    dst: &mut [T],
                    dst_ld: usize,
                    a: &[T],
                    a_ld: usize,
                    b: &[T],
                    b_ld: usize,
                    rows: usize,
                    cols: usize,
                ) {
                    for r in 0..rows {
                        for c in 0..cols {
                            dst[r * dst_ld + c] = as_elem(a[r * a_ld + c] $op b[r * b_ld + c]);
                        }
                    }
                }
            )*
        };
    }

    define!(gt => >, ge => >=, lt => <, le => <=, eq => ==, ne => !=);

    macro_rules! define_scalar {
        ($($name:ident => $op:tt),* $(,)?) => {
            $(
                #[doc = concat!("Element-wise `a ", stringify!($op), " k`, matrix flavor.")]
                #[allow(clippy::too_many_arguments)]
                pub fn $name<T: Numeric>(
                    dst: &mut [T],
                    dst_ld: usize,
                    a: &[T],
                    a_ld: usize,
                    k: T,
                    rows: usize,
                    cols: usize,
                ) {
                    for r in 0..rows {
                        for c in 0..cols {
                            dst[r * dst_ld + c] = as_elem(a[r * a_ld + c] $op k);
                        }
                    }
                }
            )*
        };
    }

    define_scalar!(gt_scalar => >, ge_scalar => >=, lt_scalar => <, le_scalar => <=, eq_scalar => ==, ne_scalar => !=);
}
