use crate::RmqError;
use crate::StaticRmq;
use crate::util::better_index;
use crate::util::better_index_ordered;
use crate::util::floor_log2_nonzero;

/// Sparse table over a sequence of candidate indices into `values`.
///
/// Row `k` holds, for every start `i`, the best of `indices[i..i + 2^k]`.
/// The table never owns `values`; callers pass the same slice to build and
/// query.
#[derive(Clone, Debug)]
pub(crate) struct IndexSparseTable {
    n: usize,
    log2: Vec<u8>,
    row_offsets: Vec<usize>,
    table: Vec<usize>,
}

impl IndexSparseTable {
    pub(crate) fn new<T: Ord>(values: &[T], indices: Vec<usize>) -> Self {
        let n = indices.len();

        if n == 0 {
            return Self {
                n,
                log2: vec![0_u8],
                row_offsets: Vec::new(),
                table: Vec::new(),
            };
        }

        let mut log2 = vec![0_u8; n + 1];
        for i in 2..=n {
            log2[i] = log2[i / 2] + 1;
        }

        let levels = (floor_log2_nonzero(n) as usize) + 1;

        let mut total_len = 0_usize;
        for k in 0..levels {
            total_len += n + 1 - (1_usize << k);
        }

        let mut row_offsets = Vec::with_capacity(levels);
        let mut table = Vec::with_capacity(total_len);

        row_offsets.push(0);
        table.extend(indices);

        for k in 1..levels {
            let span = 1_usize << k;
            let half = span >> 1;
            let len = n + 1 - span;

            let prev_start = row_offsets[k - 1];
            row_offsets.push(table.len());

            for i in 0..len {
                let a = table[prev_start + i];
                let b = table[prev_start + i + half];
                table.push(better_index_ordered(values, a, b));
            }
        }
        debug_assert_eq!(table.len(), total_len);

        Self {
            n,
            log2,
            row_offsets,
            table,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.n
    }

    /// Best candidate among `indices[start..end]`.
    #[inline(always)]
    pub(crate) fn argmin_assume_valid<T: Ord>(&self, values: &[T], start: usize, end: usize) -> usize {
        debug_assert!(start < end);
        debug_assert!(end <= self.n);

        let len = end - start;
        let k = self.log2[len] as usize;
        let span = 1_usize << k;
        let base = self.row_offsets[k];
        let a = self.table[base + start];
        let b = self.table[base + end - span];
        better_index(values, a, b)
    }
}

/// O(n log n) preprocessing, O(1) query.
#[derive(Clone, Debug)]
pub struct SparseTableRmq<T> {
    values: Vec<T>,
    table: IndexSparseTable,
}

impl<T> SparseTableRmq<T> {
    pub fn values(&self) -> &[T] {
        &self.values
    }
}

impl<T: Ord + Clone> StaticRmq<T> for SparseTableRmq<T> {
    fn build(values: &[T]) -> Result<Self, RmqError> {
        if values.is_empty() {
            return Err(RmqError::Empty);
        }
        let table = IndexSparseTable::new(values, (0..values.len()).collect());
        tracing::debug!(
            n = values.len(),
            levels = table.row_offsets.len(),
            "built sparse table rmq"
        );
        Ok(Self {
            values: values.to_vec(),
            table,
        })
    }

    fn len(&self) -> usize {
        self.table.len()
    }

    fn argmin_assume_valid(&self, l: usize, r: usize) -> usize {
        self.table.argmin_assume_valid(&self.values, l, r + 1)
    }
}
