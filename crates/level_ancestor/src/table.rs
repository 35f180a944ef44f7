use rooted_tree::{NodeMap, Tree, TreeError, TreeSnapshot};

use crate::LevelAncestor;

/// Every ancestor of every node, one row per node.
///
/// Row `v` is `v` followed by the row of its parent, so `row(v)[k]` is the
/// `k`-th ancestor and the row has `depth(v) + 1` entries. Parents must
/// precede their children.
#[derive(Clone, Debug)]
pub(crate) struct AncestorTable {
    row_offsets: Vec<usize>,
    cells: Vec<u32>,
}

impl AncestorTable {
    pub(crate) fn new(n: usize, parent: impl Fn(usize) -> Option<usize>) -> Self {
        let mut row_offsets = Vec::with_capacity(n + 1);
        let mut cells = Vec::new();
        row_offsets.push(0);
        for v in 0..n {
            cells.push(v as u32);
            if let Some(p) = parent(v) {
                debug_assert!(p < v);
                cells.extend_from_within(row_offsets[p]..row_offsets[p + 1]);
            }
            row_offsets.push(cells.len());
        }
        Self { row_offsets, cells }
    }

    #[inline]
    pub(crate) fn get(&self, v: usize, k: usize) -> Option<usize> {
        let row = &self.cells[self.row_offsets[v]..self.row_offsets[v + 1]];
        row.get(k).map(|&a| a as usize)
    }

    pub(crate) fn cell_count(&self) -> usize {
        self.cells.len()
    }
}

/// Quadratic table of all ancestors; O(1) lookups.
#[derive(Clone, Debug)]
pub struct TableLa {
    nodes: NodeMap,
    table: AncestorTable,
}

impl TableLa {
    pub fn from_snapshot(snapshot: &TreeSnapshot) -> Result<Self, TreeError> {
        if snapshot.is_empty() {
            return Err(TreeError::Empty);
        }
        let table = AncestorTable::new(snapshot.len(), |v| snapshot.parent(v));
        tracing::debug!(
            n = snapshot.len(),
            cells = table.cell_count(),
            "built table level ancestor index"
        );
        Ok(Self {
            nodes: snapshot.nodes().clone(),
            table,
        })
    }
}

impl LevelAncestor for TableLa {
    fn build<V>(tree: &Tree<V>) -> Result<Self, TreeError> {
        Self::from_snapshot(tree.snapshot()?)
    }

    fn nodes(&self) -> &NodeMap {
        &self.nodes
    }

    #[inline]
    fn ancestor_index(&self, v: usize, k: usize) -> Option<usize> {
        self.table.get(v, k)
    }
}
