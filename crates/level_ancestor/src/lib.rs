//! Level ancestor queries: the `k`-th ancestor of a node.
//!
//! Three strategies share one interface: [`TableLa`] stores every ancestor,
//! [`SparseLa`] combines ladders with jump tables, and [`MacroMicroLa`]
//! restricts those to a macro tree and tabulates small subtrees by shape.
//! Asking for more ancestors than a node has yields `None`, not an error.
//!
//! Built indices are immutable and `Send + Sync`; concurrent queries need no
//! synchronization.

mod error;
mod ladder;
mod macro_micro;
mod sparse;
mod table;

pub use error::LaError;
pub use macro_micro::{MAX_MICRO_BOUND, MacroMicroLa};
pub use sparse::SparseLa;
pub use table::TableLa;

use rooted_tree::{NodeId, NodeMap, Tree, TreeError};

pub trait LevelAncestor: Sized {
    /// Indexes the tree as of its last `reindex()`.
    fn build<V>(tree: &Tree<V>) -> Result<Self, TreeError>;

    /// Handle map of the indexed snapshot.
    fn nodes(&self) -> &NodeMap;

    fn len(&self) -> usize {
        self.nodes().len()
    }

    fn is_empty(&self) -> bool {
        self.nodes().is_empty()
    }

    /// `k`-th ancestor of dense index `v`; `k == 0` gives `v` itself.
    fn ancestor_index(&self, v: usize, k: usize) -> Option<usize>;

    fn ancestor(&self, node: NodeId, k: usize) -> Result<Option<NodeId>, TreeError> {
        let nodes = self.nodes();
        let v = nodes.index_of(node)?;
        Ok(self.ancestor_index(v, k).map(|a| nodes.node(a)))
    }
}
