//! Static range-minimum indices.
//!
//! Every index is built once from an immutable snapshot of the input and
//! then only read. Indices are `Send + Sync` aggregates of vectors, so one
//! instance may serve queries from many threads at once.

mod block;
mod error;
mod shape;
mod sparse_table;
mod table;
mod util;

use std::ops::Range;

pub use block::{BlockRmq, FischerHeunRmq, MAX_BLOCK_SIZE, PlusMinusOneRmq};
pub use error::RmqError;
pub use shape::{BlockEncoder, FischerHeun, PlusMinusOne, UnitStep};
pub use sparse_table::SparseTableRmq;
pub use table::TableRmq;

/// Static RMQ (Range Minimum Query) interface.
///
/// - Query bounds are inclusive and may be given in either order.
/// - The answer is an index into the original array, never a value.
/// - Ties are broken by the smallest index.
pub trait StaticRmq<T>: Sized {
    fn build(values: &[T]) -> Result<Self, RmqError>;

    fn len(&self) -> usize;

    #[inline(always)]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Argmin of `[l, r]`. The caller guarantees `l <= r < len`.
    fn argmin_assume_valid(&self, l: usize, r: usize) -> usize;

    fn argmin(&self, i: usize, j: usize) -> Result<usize, RmqError> {
        let len = self.len();
        for index in [i, j] {
            if index >= len {
                return Err(RmqError::OutOfRange { index, len });
            }
        }
        Ok(self.argmin_assume_valid(i.min(j), i.max(j)))
    }

    /// Half-open variant: `None` for empty or out-of-bounds ranges.
    fn argmin_range(&self, range: Range<usize>) -> Option<usize> {
        if range.start >= range.end || range.end > self.len() {
            return None;
        }
        Some(self.argmin_assume_valid(range.start, range.end - 1))
    }
}
