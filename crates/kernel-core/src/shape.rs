// SPDX-License-Identifier: Apache-2.0
//! Shape and stride primitives (C1).
//!
//! Canonical representation of N-D index spaces: contiguity detection,
//! stride derivation, multi-buffer offset advancement, and iterator
//! producers. Everything here is stack-allocated — no `Vec` ever appears
//! in a hot loop.

/// Maximum supported rank. Eight dimensions covers every consumer of this
/// crate and lets every scratch array below live on the stack.
pub const MAX_DIMS: usize = 8;

/// An N-D shape: an ordered sequence of non-negative dimension extents.
///
/// Rank-0 (`dims() == &[]`) has size 1: an empty index tuple still denotes
/// exactly one scalar element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Shape {
    dims: [usize; MAX_DIMS],
    rank: usize,
}

impl Shape {
    /// Builds a shape from a dimension slice.
    ///
    /// # Panics
    ///
    /// Panics if `dims.len() > MAX_DIMS`. Callers in this crate never
    /// exceed `MAX_DIMS`; higher layers are responsible for staying within
    /// it.
    #[must_use]
    pub fn new(dims: &[usize]) -> Self {
        assert!(dims.len() <= MAX_DIMS, "rank exceeds MAX_DIMS");
        let mut out = [0usize; MAX_DIMS];
        out[..dims.len()].copy_from_slice(dims);
        Self {
            dims: out,
            rank: dims.len(),
        }
    }

    /// Returns the dimension extents in order.
    #[must_use]
    pub fn dims(&self) -> &[usize] {
        &self.dims[..self.rank]
    }

    /// Returns the rank (number of dimensions).
    #[must_use]
    pub const fn rank(&self) -> usize {
        self.rank
    }

    /// Returns `true` when any dimension is zero (size-0 short-circuit).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dims().iter().any(|&d| d == 0)
    }

    /// Total element count: the product of all dimensions, 1 for rank 0.
    #[must_use]
    pub fn size(&self) -> usize {
        self.dims().iter().product()
    }

    /// Computes the canonical row-major stride for this shape: the
    /// right-to-left running product, last axis fastest.
    #[must_use]
    pub fn canonical_stride(&self) -> Stride {
        let mut strides = [0isize; MAX_DIMS];
        let mut running: isize = 1;
        for i in (0..self.rank).rev() {
            strides[i] = running;
            running = running.saturating_mul(self.dims[i] as isize);
        }
        Stride {
            strides,
            rank: self.rank,
        }
    }

    /// Restartable iterator over index tuples in row-major order.
    #[must_use]
    pub fn indices(&self) -> IndexIter {
        IndexIter {
            shape: *self,
            cur: [0usize; MAX_DIMS],
            done: self.is_empty(),
        }
    }
}

/// An N-D stride: the flat-index delta for a unit step along each axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stride {
    strides: [isize; MAX_DIMS],
    rank: usize,
}

impl Stride {
    /// Wraps an explicit stride slice.
    ///
    /// # Panics
    ///
    /// Panics if `strides.len() > MAX_DIMS`.
    #[must_use]
    pub fn new(strides: &[isize]) -> Self {
        assert!(strides.len() <= MAX_DIMS, "rank exceeds MAX_DIMS");
        let mut out = [0isize; MAX_DIMS];
        out[..strides.len()].copy_from_slice(strides);
        Self {
            strides: out,
            rank: strides.len(),
        }
    }

    /// Returns the per-axis strides.
    #[must_use]
    pub fn values(&self) -> &[isize] {
        &self.strides[..self.rank]
    }

    /// If `strides` is empty, returns the canonical stride for `shape`;
    /// otherwise passes the provided stride through unchanged.
    #[must_use]
    pub fn ensure(strides: Option<Stride>, shape: &Shape) -> Self {
        strides.unwrap_or_else(|| shape.canonical_stride())
    }

    /// Tests whether `self` equals the canonical row-major stride for
    /// `shape` — the definition of "contiguous with respect to shape".
    #[must_use]
    pub fn is_contiguous(&self, shape: &Shape) -> bool {
        *self == shape.canonical_stride()
    }

    /// Dot product of an index tuple with this stride: the flat offset.
    #[must_use]
    pub fn offset_of(&self, index: &[usize]) -> isize {
        index
            .iter()
            .zip(self.values())
            .map(|(&i, &s)| i as isize * s)
            .sum()
    }
}

/// Restartable, finite iterator over row-major index tuples for a [`Shape`].
///
/// Exhausted after `shape.size()` elements; consumers may stop early.
#[derive(Clone, Debug)]
pub struct IndexIter {
    shape: Shape,
    cur: [usize; MAX_DIMS],
    done: bool,
}

impl Iterator for IndexIter {
    type Item = [usize; MAX_DIMS];

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let out = self.cur;
        let rank = self.shape.rank();
        if rank == 0 {
            self.done = true;
            return Some(out);
        }
        let mut axis = rank;
        loop {
            if axis == 0 {
                self.done = true;
                break;
            }
            axis -= 1;
            self.cur[axis] += 1;
            if self.cur[axis] < self.shape.dims[axis] {
                break;
            }
            self.cur[axis] = 0;
        }
        Some(out)
    }
}

/// Linear (1-D) index producer: `0..n`.
#[must_use]
pub fn linear_indices(n: usize) -> impl Iterator<Item = usize> {
    0..n
}

/// (row, col) index producer for a 2-D matrix shape.
#[must_use]
pub fn row_col_indices(rows: usize, cols: usize) -> impl Iterator<Item = (usize, usize)> {
    (0..rows).flat_map(move |r| (0..cols).map(move |c| (r, c)))
}

/// Advances a single offset and its index vector one step in row-major
/// order (last axis fastest). Returns `true` if it advanced, `false` once
/// the index space is exhausted.
pub fn advance_offsets_1(index: &mut [usize], shape: &Shape, off: &mut isize, stride: &Stride) -> bool {
    advance_offsets_n(index, shape, &mut [(off, stride)])
}

/// Advances a pair of per-buffer offsets and a shared index vector one step
/// in row-major order (last axis fastest).
///
/// Returns `true` if the index vector advanced, `false` once the full index
/// space is exhausted. On each axis wrap, each buffer's offset is corrected
/// by `-(d_i - 1) * stride_i` and then bumped by the next non-wrapping
/// axis's stride, so callers never recompute a dot product.
pub fn advance_offsets_2(
    index: &mut [usize],
    shape: &Shape,
    off_a: &mut isize,
    stride_a: &Stride,
    off_b: &mut isize,
    stride_b: &Stride,
) -> bool {
    advance_offsets_n(index, shape, &mut [(off_a, stride_a), (off_b, stride_b)])
}

/// Three-buffer variant of [`advance_offsets_2`].
pub fn advance_offsets_3(
    index: &mut [usize],
    shape: &Shape,
    off_a: &mut isize,
    stride_a: &Stride,
    off_b: &mut isize,
    stride_b: &Stride,
    off_c: &mut isize,
    stride_c: &Stride,
) -> bool {
    advance_offsets_n(
        index,
        shape,
        &mut [(off_a, stride_a), (off_b, stride_b), (off_c, stride_c)],
    )
}

/// Four-buffer variant of [`advance_offsets_2`].
#[allow(clippy::too_many_arguments)]
pub fn advance_offsets_4(
    index: &mut [usize],
    shape: &Shape,
    off_a: &mut isize,
    stride_a: &Stride,
    off_b: &mut isize,
    stride_b: &Stride,
    off_c: &mut isize,
    stride_c: &Stride,
    off_d: &mut isize,
    stride_d: &Stride,
) -> bool {
    advance_offsets_n(
        index,
        shape,
        &mut [
            (off_a, stride_a),
            (off_b, stride_b),
            (off_c, stride_c),
            (off_d, stride_d),
        ],
    )
}

fn advance_offsets_n(
    index: &mut [usize],
    shape: &Shape,
    buffers: &mut [(&mut isize, &Stride)],
) -> bool {
    let rank = shape.rank();
    if rank == 0 {
        return false;
    }
    let dims = shape.dims();
    let mut axis = rank;
    loop {
        if axis == 0 {
            return false;
        }
        axis -= 1;
        let d = dims[axis];
        index[axis] += 1;
        if index[axis] < d {
            for (off, stride) in buffers.iter_mut() {
                **off += stride.values()[axis];
            }
            return true;
        }
        // Wrap: undo this axis's accumulated offset, then continue to carry
        // into the next (more significant) axis.
        index[axis] = 0;
        for (off, stride) in buffers.iter_mut() {
            **off -= (d as isize - 1) * stride.values()[axis];
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_stride_row_major() {
        let shape = Shape::new(&[2, 3, 4]);
        let stride = shape.canonical_stride();
        assert_eq!(stride.values(), &[12, 4, 1]);
    }

    #[test]
    fn size_rank_zero_is_one() {
        let shape = Shape::new(&[]);
        assert_eq!(shape.size(), 1);
    }

    #[test]
    fn size_with_zero_dim_is_zero() {
        let shape = Shape::new(&[3, 0, 5]);
        assert_eq!(shape.size(), 0);
        assert!(shape.is_empty());
    }

    #[test]
    fn ensure_substitutes_canonical_when_absent() {
        let shape = Shape::new(&[2, 2]);
        let s = Stride::ensure(None, &shape);
        assert_eq!(s.values(), shape.canonical_stride().values());
    }

    #[test]
    fn is_contiguous_detects_canonical() {
        let shape = Shape::new(&[2, 2]);
        let canonical = shape.canonical_stride();
        assert!(canonical.is_contiguous(&shape));
        let noncanonical = Stride::new(&[1, 2]);
        assert!(!noncanonical.is_contiguous(&shape));
    }

    #[test]
    fn indices_enumerate_row_major() {
        let shape = Shape::new(&[2, 2]);
        let got: Vec<_> = shape
            .indices()
            .map(|idx| (idx[0], idx[1]))
            .collect();
        assert_eq!(got, vec![(0, 0), (0, 1), (1, 0), (1, 1)]);
    }

    #[test]
    fn indices_rank_zero_yields_one_element() {
        let shape = Shape::new(&[]);
        assert_eq!(shape.indices().count(), 1);
    }

    #[test]
    fn advance_offsets_matches_offset_of() {
        let shape = Shape::new(&[2, 3]);
        let stride = shape.canonical_stride();
        let mut index = [0usize; 2];
        let mut off = 0isize;
        let mut dummy_idx = [0usize; 2];
        let dummy_stride = stride;
        let mut dummy_off = 0isize;
        let mut seen = vec![off];
        loop {
            let more = advance_offsets_2(
                &mut index, &shape, &mut off, &stride, &mut dummy_off, &dummy_stride,
            );
            dummy_idx = index;
            let _ = dummy_idx;
            if !more {
                break;
            }
            seen.push(off);
        }
        let expected: Vec<isize> = (0..6).collect();
        assert_eq!(seen, expected);
    }
}
