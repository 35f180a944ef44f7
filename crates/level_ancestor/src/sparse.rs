use rooted_tree::{NodeMap, Tree, TreeError, TreeSnapshot};

use crate::LevelAncestor;
use crate::ladder::Ladders;

/// Ladder decomposition over the whole tree with a jump table at every
/// leaf: O(n log n) space, constant-time queries.
#[derive(Clone, Debug)]
pub struct SparseLa {
    nodes: NodeMap,
    ladders: Ladders,
}

impl SparseLa {
    pub fn from_snapshot(snapshot: &TreeSnapshot) -> Result<Self, TreeError> {
        if snapshot.is_empty() {
            return Err(TreeError::Empty);
        }
        let ladders = Ladders::new(snapshot, |_| true);
        tracing::debug!(
            n = snapshot.len(),
            ladders = ladders.ladder_count(),
            "built sparse level ancestor index"
        );
        Ok(Self {
            nodes: snapshot.nodes().clone(),
            ladders,
        })
    }
}

impl LevelAncestor for SparseLa {
    fn build<V>(tree: &Tree<V>) -> Result<Self, TreeError> {
        Self::from_snapshot(tree.snapshot()?)
    }

    fn nodes(&self) -> &NodeMap {
        &self.nodes
    }

    #[inline]
    fn ancestor_index(&self, v: usize, k: usize) -> Option<usize> {
        self.ladders.ancestor(v, k)
    }
}
