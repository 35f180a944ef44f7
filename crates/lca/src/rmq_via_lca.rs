use std::marker::PhantomData;

use rmq::{RmqError, StaticRmq};
use rooted_tree::CartesianTree;

use crate::LcaError;
use crate::LcaIndex;

/// RMQ answered as the LCA of two Cartesian tree nodes.
///
/// The argmin of `[i, j]` is the array index stored at the LCA of the nodes
/// for `i` and `j`; ties resolve leftmost because equal values never
/// displace earlier ones in the Cartesian tree.
#[derive(Clone, Debug)]
pub struct LcaRmq<T> {
    node_of: Vec<usize>,
    index_at: Vec<usize>,
    lca: LcaIndex,
    _keys: PhantomData<fn(&T)>,
}

impl<T: Ord> LcaRmq<T> {
    fn build_parts(values: &[T]) -> Result<Self, LcaError> {
        let cartesian = CartesianTree::build(values)?;
        let snapshot = cartesian.tree().snapshot()?;
        let lca = LcaIndex::from_snapshot(snapshot)?;

        let mut node_of = Vec::with_capacity(values.len());
        let mut index_at = vec![0_usize; values.len()];
        for (i, &node) in cartesian.positions().iter().enumerate() {
            let v = snapshot.index_of(node)?;
            node_of.push(v);
            index_at[v] = i;
        }

        Ok(Self {
            node_of,
            index_at,
            lca,
            _keys: PhantomData,
        })
    }
}

impl<T: Ord> StaticRmq<T> for LcaRmq<T> {
    fn build(values: &[T]) -> Result<Self, RmqError> {
        Self::build_parts(values).map_err(|err| match err {
            LcaError::Rmq(err) => err,
            // A fresh Cartesian tree can only fail by being empty.
            LcaError::Tree(_) => RmqError::Empty,
        })
    }

    fn len(&self) -> usize {
        self.node_of.len()
    }

    fn argmin_assume_valid(&self, l: usize, r: usize) -> usize {
        debug_assert!(l <= r && r < self.node_of.len());
        self.index_at[self.lca.lca_index(self.node_of[l], self.node_of[r])]
    }
}
