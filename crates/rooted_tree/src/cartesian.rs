use crate::TreeError;
use crate::tree::{NodeId, Tree};

/// Cartesian tree of an array: a min-heap on values whose in-order
/// traversal is the array order. Each node stores its array index.
///
/// Equal values never displace earlier ones, so of two equal minima the
/// leftmost is the ancestor. A node with both children lists the left one
/// first.
#[derive(Debug)]
pub struct CartesianTree {
    tree: Tree<usize>,
    positions: Vec<NodeId>,
}

impl CartesianTree {
    /// Linear-time build along the right spine.
    pub fn build<T: Ord>(values: &[T]) -> Result<Self, TreeError> {
        if values.is_empty() {
            return Err(TreeError::Empty);
        }

        let mut tree = Tree::new();
        let mut positions = Vec::with_capacity(values.len());
        let mut spine: Vec<(NodeId, usize)> = Vec::with_capacity(values.len());

        for (i, v) in values.iter().enumerate() {
            let mut last_pop = None;
            while let Some(&(top, index)) = spine.last() {
                if values[index] <= *v {
                    break;
                }
                last_pop = Some(top);
                spine.pop();
            }

            let node = match last_pop {
                Some(popped) => tree.insert_parent(popped, i)?,
                None => match spine.last() {
                    Some(&(top, _)) => tree.add_child(top, i)?,
                    None => tree.add_root(i)?,
                },
            };
            positions.push(node);
            spine.push((node, i));
        }

        let snapshot = tree.reindex()?;
        tracing::debug!(
            n = values.len(),
            height = snapshot.height(0),
            "built cartesian tree"
        );

        Ok(Self { tree, positions })
    }

    pub fn tree(&self) -> &Tree<usize> {
        &self.tree
    }

    /// Node holding array index `index`.
    pub fn node(&self, index: usize) -> NodeId {
        self.positions[index]
    }

    pub fn positions(&self) -> &[NodeId] {
        &self.positions
    }

    /// Array index stored at `node`.
    pub fn array_index(&self, node: NodeId) -> Result<usize, TreeError> {
        self.tree.value(node).copied()
    }

    pub fn into_parts(self) -> (Tree<usize>, Vec<NodeId>) {
        (self.tree, self.positions)
    }
}
