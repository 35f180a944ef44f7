use crate::TreeError;
use crate::tree::{NodeId, Tree};

const NONE: u32 = u32::MAX;

/// Translates between [`NodeId`] handles and dense preorder indices of one
/// snapshot. Indices keep a copy so they can validate handles without
/// borrowing the tree.
#[derive(Clone, Debug)]
pub struct NodeMap {
    owner: u64,
    slot_index: Vec<u32>,
    nodes: Vec<NodeId>,
}

impl NodeMap {
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Dense index of `node`, rejecting handles of other trees and handles
    /// that were not live when the snapshot was taken.
    pub fn index_of(&self, node: NodeId) -> Result<usize, TreeError> {
        if node.owner != self.owner {
            return Err(TreeError::ForeignNode);
        }
        let index = match self.slot_index.get(node.slot as usize) {
            Some(&index) if index != NONE => index as usize,
            _ => return Err(TreeError::StaleNode),
        };
        if self.nodes[index] != node {
            return Err(TreeError::StaleNode);
        }
        Ok(index)
    }

    #[inline]
    pub fn node(&self, index: usize) -> NodeId {
        self.nodes[index]
    }
}

/// Frozen, dense view of a tree: nodes are numbered in preorder, so the
/// root is `0`, every parent precedes its children, and the subtree of `v`
/// is the contiguous range `v..v + subtree_size(v)`.
#[derive(Clone, Debug)]
pub struct TreeSnapshot {
    nodes: NodeMap,
    parent: Vec<u32>,
    child_offsets: Vec<usize>,
    children: Vec<usize>,
    depth: Vec<usize>,
    height: Vec<usize>,
    size: Vec<usize>,
}

impl TreeSnapshot {
    pub(crate) fn new<V>(tree: &Tree<V>) -> Result<Self, TreeError> {
        let root = tree.root.ok_or(TreeError::Empty)?;
        let n = tree.len();

        let mut slot_index = vec![NONE; tree.slots.len()];
        let mut nodes = Vec::with_capacity(n);
        let mut parent = Vec::with_capacity(n);
        let mut depth = Vec::with_capacity(n);
        let mut order = Vec::with_capacity(n);

        let mut stack = vec![root];
        while let Some(slot) = stack.pop() {
            let index = nodes.len();
            slot_index[slot as usize] = index as u32;
            nodes.push(tree.make_id(slot));
            order.push(slot);

            let node = match &tree.slots[slot as usize].node {
                Some(node) => node,
                None => return Err(TreeError::StaleNode),
            };
            match node.parent {
                Some(p) => {
                    let p = slot_index[p as usize];
                    parent.push(p);
                    depth.push(depth[p as usize] + 1);
                }
                None => {
                    parent.push(NONE);
                    depth.push(0);
                }
            }
            stack.extend(node.children.iter().rev());
        }

        let mut child_offsets = Vec::with_capacity(n + 1);
        let mut children = Vec::with_capacity(n.saturating_sub(1));
        child_offsets.push(0);
        for &slot in &order {
            if let Some(node) = &tree.slots[slot as usize].node {
                children.extend(node.children.iter().map(|&c| slot_index[c as usize] as usize));
            }
            child_offsets.push(children.len());
        }

        let mut height = vec![0_usize; n];
        let mut size = vec![1_usize; n];
        for v in (1..n).rev() {
            let p = parent[v] as usize;
            height[p] = height[p].max(height[v] + 1);
            size[p] += size[v];
        }

        Ok(Self {
            nodes: NodeMap {
                owner: tree.owner(),
                slot_index,
                nodes,
            },
            parent,
            child_offsets,
            children,
            depth,
            height,
            size,
        })
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    pub fn nodes(&self) -> &NodeMap {
        &self.nodes
    }

    pub fn index_of(&self, node: NodeId) -> Result<usize, TreeError> {
        self.nodes.index_of(node)
    }

    #[inline]
    pub fn node(&self, index: usize) -> NodeId {
        self.nodes.node(index)
    }

    #[inline]
    pub fn parent(&self, v: usize) -> Option<usize> {
        let p = self.parent[v];
        (p != NONE).then_some(p as usize)
    }

    #[inline]
    pub fn children(&self, v: usize) -> &[usize] {
        &self.children[self.child_offsets[v]..self.child_offsets[v + 1]]
    }

    #[inline]
    pub fn is_leaf(&self, v: usize) -> bool {
        self.child_offsets[v] == self.child_offsets[v + 1]
    }

    #[inline]
    pub fn depth(&self, v: usize) -> usize {
        self.depth[v]
    }

    #[inline]
    pub fn height(&self, v: usize) -> usize {
        self.height[v]
    }

    #[inline]
    pub fn subtree_size(&self, v: usize) -> usize {
        self.size[v]
    }
}
