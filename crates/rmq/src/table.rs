use crate::RmqError;
use crate::StaticRmq;

/// Answers for every `[i, j]` of a fixed array, as indices relative to it.
///
/// Shared by [`TableRmq`] and by the per-shape block tables, which only need
/// the argmin structure and never the values themselves.
#[derive(Clone, Debug)]
pub(crate) struct ArgminTable {
    n: usize,
    table: Vec<u32>,
}

impl ArgminTable {
    pub(crate) fn new<T: Ord>(values: &[T]) -> Self {
        let n = values.len();
        debug_assert!(n <= u32::MAX as usize);
        let mut table = vec![0_u32; n * n];
        for i in 0..n {
            let row = &mut table[i * n..(i + 1) * n];
            row[i] = i as u32;
            for j in (i + 1)..n {
                let prev = row[j - 1];
                row[j] = if values[j] < values[prev as usize] {
                    j as u32
                } else {
                    prev
                };
            }
        }
        Self { n, table }
    }

    #[inline(always)]
    pub(crate) fn argmin(&self, l: usize, r: usize) -> usize {
        debug_assert!(l <= r && r < self.n);
        self.table[l * self.n + r] as usize
    }
}

/// O(n^2) preprocessing, O(1) lookup.
#[derive(Clone, Debug)]
pub struct TableRmq<T> {
    values: Vec<T>,
    table: ArgminTable,
}

impl<T> TableRmq<T> {
    pub fn values(&self) -> &[T] {
        &self.values
    }
}

impl<T: Ord + Clone> StaticRmq<T> for TableRmq<T> {
    fn build(values: &[T]) -> Result<Self, RmqError> {
        if values.is_empty() {
            return Err(RmqError::Empty);
        }
        let table = ArgminTable::new(values);
        tracing::debug!(n = values.len(), "built table rmq");
        Ok(Self {
            values: values.to_vec(),
            table,
        })
    }

    fn len(&self) -> usize {
        self.values.len()
    }

    fn argmin_assume_valid(&self, l: usize, r: usize) -> usize {
        self.table.argmin(l, r)
    }
}
