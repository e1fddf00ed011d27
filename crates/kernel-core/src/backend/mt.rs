// SPDX-License-Identifier: Apache-2.0
//! Worker-pool backend: splits `0..n` into contiguous chunks, one per
//! available core, and runs them concurrently via `std::thread::scope`.
//! Falls back to the single-threaded path below `min_parallel`, since
//! scoped-thread setup costs more than small workloads save.

use std::thread;

/// Splits `0..n` into chunks and runs `f(start, end)` for each chunk
/// concurrently, blocking until every chunk completes. Below
/// `min_parallel` units of work, runs `f(0, n)` directly on the calling
/// thread instead.
pub fn dispatch<F: Fn(usize, usize) + Sync>(n: usize, min_parallel: usize, f: F) {
    if n == 0 {
        return;
    }
    if n < min_parallel {
        f(0, n);
        return;
    }
    let workers = thread::available_parallelism().map(std::num::NonZeroUsize::get).unwrap_or(1).max(1);
    let chunk = n.div_ceil(workers);
    if chunk == 0 {
        f(0, n);
        return;
    }
    thread::scope(|scope| {
        let mut start = 0;
        while start < n {
            let end = (start + chunk).min(n);
            let f = &f;
            scope.spawn(move || f(start, end));
            start = end;
        }
    });
}

/// Splits `buf` into `row_stride`-sized row chunks and runs `f(row_start,
/// chunk)` for each chunk concurrently, where `row_start` is the index of
/// `chunk`'s first row (so callers can recover each row's global row
/// number as `row_start + local_row`). Below `min_parallel` rows, runs
/// `f(0, buf)` directly on the calling thread instead.
///
/// `row_stride == 0` is treated as a single row spanning the whole buffer.
pub fn parallel_rows_mut<T: Send, F: Fn(usize, &mut [T]) + Sync>(
    buf: &mut [T],
    row_stride: usize,
    min_parallel: usize,
    f: F,
) {
    let row_stride = row_stride.max(1);
    let rows = buf.len() / row_stride;
    if rows < min_parallel {
        f(0, buf);
        return;
    }
    let workers = thread::available_parallelism().map(std::num::NonZeroUsize::get).unwrap_or(1).max(1);
    let chunk_rows = rows.div_ceil(workers).max(1);
    let chunk_len = chunk_rows * row_stride;
    thread::scope(|scope| {
        let mut row_start = 0;
        for chunk in buf.chunks_mut(chunk_len) {
            let f = &f;
            scope.spawn(move || f(row_start, chunk));
            row_start += chunk_rows;
        }
    });
}
