// SPDX-License-Identifier: Apache-2.0
//! Element-wise engine (C2): uniform unary/binary/ternary/scalar skeletons
//! over contiguous and strided numeric buffers, plus a comparison family
//! ([`comparison`]) that deliberately bypasses those skeletons — see its
//! module doc.
//!
//! Three flavors share one generic implementation: [`tensor`] drives
//! everything from `(buffer, shape, stride)`; [`vector`] and [`matrix`] are
//! thin, shape-constructing wrappers over [`tensor`] — a `(buffer, n,
//! stride)` call just builds a rank-1 [`crate::shape::Shape`] and a rank-1
//! [`crate::shape::Stride`] and hands them to `tensor`, and a matrix call
//! builds a rank-2 shape/stride from `(rows, cols, ld)`. Because the
//! contiguous fast path is "stride equals the shape's own canonical
//! stride", a vector with `stride == 1` and a matrix with `ld == cols` take
//! the fast path automatically — there is no separate contiguity check to
//! maintain per flavor.
//!
//! None of these kernels validate their preconditions (shape agreement,
//! buffer sizing): violating them is undefined behavior at this layer.
//! Callers are the gatekeepers.

pub mod comparison;
pub mod matrix;
pub mod tensor;
pub mod vector;

use num_traits::{One, Zero};

/// The element type admitted by the element-wise engine (C2) and, narrowed
/// to `f32`, by `linalg` (C3): ordered, with additive and multiplicative
/// identities, `+ - * /`, and unary negation.
pub trait Numeric:
    Copy
    + Send
    + Sync
    + PartialOrd
    + core::fmt::Debug
    + Zero
    + One
    + core::ops::Add<Output = Self>
    + core::ops::Sub<Output = Self>
    + core::ops::Mul<Output = Self>
    + core::ops::Div<Output = Self>
    + core::ops::Neg<Output = Self>
{
    /// Widens `self` to `f64` for conversion bridging. Lossy for 64-bit
    /// integer types beyond 2^53 — bit-exact reproduction across element
    /// types is not a goal of this conversion path.
    fn to_f64(self) -> f64;

    /// Narrows from `f64`. Integer implementations clamp via Rust's
    /// saturating `as` float-to-int cast (the destination's representable
    /// range); floating-point implementations cast directly. This is the
    /// `Convert` family's full contract.
    fn from_f64(value: f64) -> Self;

    /// `sign(x)`: `-1` if negative, `0` if zero, `1` if positive.
    fn signum_elem(self) -> Self {
        if self < Self::zero() {
            -Self::one()
        } else if self > Self::zero() {
            Self::one()
        } else {
            Self::zero()
        }
    }
}

macro_rules! impl_numeric_int {
    ($($t:ty),* $(,)?) => {
        $(
            impl Numeric for $t {
                fn to_f64(self) -> f64 {
                    self as f64
                }
                fn from_f64(value: f64) -> Self {
                    value as Self
                }
            }
        )*
    };
}

macro_rules! impl_numeric_float {
    ($($t:ty),* $(,)?) => {
        $(
            impl Numeric for $t {
                fn to_f64(self) -> f64 {
                    f64::from(self)
                }
                fn from_f64(value: f64) -> Self {
                    value as Self
                }
            }
        )*
    };
}

impl_numeric_int!(i8, i16, i32, i64, isize);
impl_numeric_float!(f32, f64);

/// Converts `src` into `U` element-by-element, applying the clamping
/// semantics of [`Numeric::from_f64`] (the `Convert` family).
pub fn convert_scalar<T: Numeric, U: Numeric>(src: T) -> U {
    U::from_f64(src.to_f64())
}
