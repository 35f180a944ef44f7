use std::collections::HashMap;
use std::marker::PhantomData;

use crate::RmqError;
use crate::StaticRmq;
use crate::shape::BlockEncoder;
use crate::shape::FischerHeun;
use crate::shape::PlusMinusOne;
use crate::sparse_table::IndexSparseTable;
use crate::table::ArgminTable;
use crate::util::better_index_ordered;

/// Largest block size whose shape code (sentinel included) fits in a `u64`.
pub const MAX_BLOCK_SIZE: usize = 31;

/// Block decomposition RMQ.
///
/// Block minima are summarized by a sparse table; in-block ranges are
/// answered by one [`ArgminTable`] per distinct shape code, shared by every
/// block with that code.
#[derive(Clone, Debug)]
pub struct BlockRmq<T, E> {
    values: Vec<T>,
    block_size: usize,
    block_shape: Vec<u32>,
    shapes: Vec<ArgminTable>,
    summary: IndexSparseTable,
    _encoder: PhantomData<fn() -> E>,
}

/// Block RMQ for arrays whose neighbours differ by exactly one.
pub type PlusMinusOneRmq<T> = BlockRmq<T, PlusMinusOne>;

/// Block RMQ for arbitrary arrays.
pub type FischerHeunRmq<T> = BlockRmq<T, FischerHeun>;

impl<T: Ord + Clone, E: BlockEncoder<T>> BlockRmq<T, E> {
    pub fn with_block_size(values: &[T], block_size: usize) -> Result<Self, RmqError> {
        if values.is_empty() {
            return Err(RmqError::Empty);
        }
        if block_size == 0 || block_size > MAX_BLOCK_SIZE {
            return Err(RmqError::InvalidBlockSize { block_size });
        }
        E::validate(values)?;

        let n = values.len();
        let blocks_len = n.div_ceil(block_size);
        let mut block_shape = Vec::with_capacity(blocks_len);
        let mut block_mins = Vec::with_capacity(blocks_len);
        let mut shapes = Vec::new();
        let mut shape_ids: HashMap<u64, u32> = HashMap::new();
        let mut stack = Vec::with_capacity(block_size);

        for (block_id, block) in values.chunks(block_size).enumerate() {
            let code = E::shape_code(block, &mut stack);
            let shape = *shape_ids.entry(code).or_insert_with(|| {
                shapes.push(ArgminTable::new(block));
                (shapes.len() - 1) as u32
            });
            block_shape.push(shape);
            let local_min = shapes[shape as usize].argmin(0, block.len() - 1);
            block_mins.push(block_id * block_size + local_min);
        }

        let summary = IndexSparseTable::new(values, block_mins);

        tracing::debug!(
            n,
            block_size,
            blocks = blocks_len,
            shapes = shapes.len(),
            "built block rmq"
        );

        Ok(Self {
            values: values.to_vec(),
            block_size,
            block_shape,
            shapes,
            summary,
            _encoder: PhantomData,
        })
    }

    pub fn block_size(&self) -> usize {
        self.block_size
    }

    /// Number of distinct block shapes, i.e. of cached in-block tables.
    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    #[inline(always)]
    fn block_argmin(&self, block: usize, local_l: usize, local_r: usize) -> usize {
        let table = &self.shapes[self.block_shape[block] as usize];
        block * self.block_size + table.argmin(local_l, local_r)
    }
}

impl<T: Ord + Clone, E: BlockEncoder<T>> StaticRmq<T> for BlockRmq<T, E> {
    fn build(values: &[T]) -> Result<Self, RmqError> {
        let block_size = E::default_block_size(values.len()).min(MAX_BLOCK_SIZE);
        Self::with_block_size(values, block_size)
    }

    fn len(&self) -> usize {
        self.values.len()
    }

    fn argmin_assume_valid(&self, l: usize, r: usize) -> usize {
        debug_assert!(l <= r && r < self.values.len());
        let b = self.block_size;
        let n = self.values.len();
        let bl = l / b;
        let br = r / b;

        if bl == br {
            return self.block_argmin(bl, l - bl * b, r - bl * b);
        }

        let left_len = b.min(n - bl * b);
        let left = self.block_argmin(bl, l - bl * b, left_len - 1);
        let right = self.block_argmin(br, 0, r - br * b);

        if bl + 1 == br {
            return better_index_ordered(&self.values, left, right);
        }

        let middle = self.summary.argmin_assume_valid(&self.values, bl + 1, br);
        let best = better_index_ordered(&self.values, left, middle);
        better_index_ordered(&self.values, best, right)
    }
}

#[cfg(test)]
mod tests {
    use super::{FischerHeunRmq, MAX_BLOCK_SIZE, PlusMinusOneRmq};
    use crate::RmqError;
    use crate::StaticRmq;

    fn brute_force_argmin(values: &[i64], l: usize, r: usize) -> usize {
        (l..=r).fold(l, |best, i| if values[i] < values[best] { i } else { best })
    }

    #[test]
    fn every_block_size_matches_bruteforce() {
        let values: [i64; 19] = [4, 3, 4, 5, 4, 3, 2, 3, 2, 1, 2, 3, 4, 3, 2, 1, 0, 1, 2];
        for b in 1..=values.len().min(MAX_BLOCK_SIZE) {
            let pm = PlusMinusOneRmq::with_block_size(&values, b).unwrap();
            let fh = FischerHeunRmq::with_block_size(&values, b).unwrap();
            for l in 0..values.len() {
                for r in l..values.len() {
                    let expected = brute_force_argmin(&values, l, r);
                    assert_eq!(pm.argmin(l, r), Ok(expected), "pm b={b} l={l} r={r}");
                    assert_eq!(fh.argmin(r, l), Ok(expected), "fh b={b} l={l} r={r}");
                }
            }
        }
    }

    #[test]
    fn repeated_shapes_share_tables() {
        let values: Vec<i64> = (0..64).map(|i| if i % 2 == 0 { 0 } else { 1 }).collect();
        let pm = PlusMinusOneRmq::with_block_size(&values, 4).unwrap();
        assert_eq!(pm.shape_count(), 1);

        let fh = FischerHeunRmq::with_block_size(&values, 4).unwrap();
        assert_eq!(fh.shape_count(), 1);
    }

    #[test]
    fn short_last_block_gets_its_own_shape() {
        let values = [0_i64, 1, 2, 1, 0, 1, 2];
        let pm = PlusMinusOneRmq::with_block_size(&values, 3).unwrap();
        assert_eq!(pm.shape_count(), 3);
        assert_eq!(pm.argmin(5, 6), Ok(5));
        assert_eq!(pm.argmin(6, 6), Ok(6));
    }

    #[test]
    fn rejects_bad_block_sizes_and_steps() {
        let values = [1_i64, 2, 3];
        assert_eq!(
            PlusMinusOneRmq::with_block_size(&values, 0).unwrap_err(),
            RmqError::InvalidBlockSize { block_size: 0 }
        );
        assert_eq!(
            FischerHeunRmq::with_block_size(&values, MAX_BLOCK_SIZE + 1).unwrap_err(),
            RmqError::InvalidBlockSize {
                block_size: MAX_BLOCK_SIZE + 1
            }
        );
        assert_eq!(
            PlusMinusOneRmq::build(&[1_i64, 2, 2]).unwrap_err(),
            RmqError::NotUnitStep { position: 1 }
        );
    }

    #[test]
    fn default_block_sizes_follow_log_n() {
        let values: Vec<i64> = (0..1_024_i64).map(|i| i % 2).collect();
        assert_eq!(PlusMinusOneRmq::build(&values).unwrap().block_size(), 5);
        assert_eq!(FischerHeunRmq::build(&values).unwrap().block_size(), 2);
        assert_eq!(FischerHeunRmq::build(&[9_i64]).unwrap().block_size(), 1);
    }
}
