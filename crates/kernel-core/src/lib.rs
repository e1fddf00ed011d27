// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots/echo>
//! Generic strided tensor engine and dense linear-algebra kernel backing
//! the robotics toolkit.
//!
//! Four cooperating layers, built leaves-first:
//!
//! - [`shape`] — canonical stride derivation, contiguity, multi-buffer
//!   offset advancement, and iterator producers over N-D index spaces.
//! - [`elementwise`] — unary/binary/ternary/scalar/comparison skeletons
//!   over tensor/vector/matrix flavors, built on [`shape`].
//! - [`linalg`] — BLAS level 1-3 plus LU/QR/SVD/pseudo-inverse/NNLS,
//!   specialized to `f32`.
//! - [`backend`] — the `st`/`mt` dispatch shim consumed by [`elementwise`]
//!   and [`linalg`]'s parallelizable kernels.
//!
//! Every type here is a borrowed view over caller-owned buffers; the crate
//! never allocates on a hot path (decomposition scratch proportional to
//! input size is the sole exception — see `DESIGN.md`).

#![forbid(unsafe_code)]
#![deny(missing_docs, rust_2018_idioms, unused_must_use)]
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro,
    clippy::print_stdout,
    clippy::print_stderr
)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::unreadable_literal,
    clippy::missing_const_for_fn,
    clippy::suboptimal_flops,
    clippy::redundant_pub_crate,
    clippy::many_single_char_names,
    clippy::module_name_repetitions,
    clippy::use_self
)]

/// Backend dispatch (C4): the `st`/`mt` re-export shim and the
/// minimum-size threshold that gates parallel dispatch.
pub mod backend;
/// Element-wise engine (C2): tensor/vector/matrix flavors.
pub mod elementwise;
/// Error taxonomy surfaced by [`linalg`] (C3).
pub mod error;
/// Dense linear algebra (C3): BLAS 1-3, decompositions, NNLS.
pub mod linalg;
/// Shape and stride primitives (C1).
pub mod shape;

pub use elementwise::Numeric;
pub use error::{BadDimensionsDetail, Error, Result};
pub use shape::{Shape, Stride, MAX_DIMS};
