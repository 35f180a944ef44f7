use std::sync::atomic::{AtomicU64, Ordering};

use crate::TreeError;
use crate::snapshot::TreeSnapshot;

static NEXT_OWNER: AtomicU64 = AtomicU64::new(1);

/// Handle to a node of one specific [`Tree`].
///
/// Equality is identity: two handles are equal iff they name the same slot
/// of the same tree in the same generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId {
    pub(crate) owner: u64,
    pub(crate) slot: u32,
    pub(crate) generation: u32,
}

#[derive(Debug)]
pub(crate) struct Node<V> {
    pub(crate) value: V,
    pub(crate) parent: Option<u32>,
    pub(crate) children: Vec<u32>,
}

#[derive(Debug)]
pub(crate) struct Slot<V> {
    pub(crate) generation: u32,
    pub(crate) node: Option<Node<V>>,
}

/// Rooted, ordered tree stored in an arena.
///
/// Removed slots are recycled under a new generation, so handles to removed
/// nodes are rejected rather than aliasing the new occupant. Depths, heights
/// and dense indices live in a [`TreeSnapshot`] that `reindex()` rebuilds and
/// every mutation discards.
#[derive(Debug)]
pub struct Tree<V> {
    owner: u64,
    pub(crate) slots: Vec<Slot<V>>,
    free: Vec<u32>,
    pub(crate) root: Option<u32>,
    len: usize,
    snapshot: Option<TreeSnapshot>,
}

impl<V> Default for Tree<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Tree<V> {
    pub fn new() -> Self {
        Self {
            owner: NEXT_OWNER.fetch_add(1, Ordering::Relaxed),
            slots: Vec::new(),
            free: Vec::new(),
            root: None,
            len: 0,
            snapshot: None,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub(crate) fn owner(&self) -> u64 {
        self.owner
    }

    pub(crate) fn make_id(&self, slot: u32) -> NodeId {
        NodeId {
            owner: self.owner,
            slot,
            generation: self.slots[slot as usize].generation,
        }
    }

    fn validate(&self, id: NodeId) -> Result<&Node<V>, TreeError> {
        if id.owner != self.owner {
            return Err(TreeError::ForeignNode);
        }
        match self.slots.get(id.slot as usize) {
            Some(Slot {
                generation,
                node: Some(node),
            }) if *generation == id.generation => Ok(node),
            _ => Err(TreeError::StaleNode),
        }
    }

    fn node_mut(&mut self, slot: u32) -> &mut Node<V> {
        match &mut self.slots[slot as usize].node {
            Some(node) => node,
            None => unreachable!("slot {slot} is linked but vacant"),
        }
    }

    fn allocate(&mut self, value: V, parent: Option<u32>, children: Vec<u32>) -> u32 {
        self.snapshot = None;
        self.len += 1;
        let node = Node {
            value,
            parent,
            children,
        };
        match self.free.pop() {
            Some(slot) => {
                self.slots[slot as usize].node = Some(node);
                slot
            }
            None => {
                self.slots.push(Slot {
                    generation: 0,
                    node: Some(node),
                });
                (self.slots.len() - 1) as u32
            }
        }
    }

    pub fn add_root(&mut self, value: V) -> Result<NodeId, TreeError> {
        if self.root.is_some() {
            return Err(TreeError::RootExists);
        }
        let slot = self.allocate(value, None, Vec::new());
        self.root = Some(slot);
        Ok(self.make_id(slot))
    }

    /// Appends a new last child of `parent`.
    pub fn add_child(&mut self, parent: NodeId, value: V) -> Result<NodeId, TreeError> {
        self.validate(parent)?;
        let slot = self.allocate(value, Some(parent.slot), Vec::new());
        self.node_mut(parent.slot).children.push(slot);
        Ok(self.make_id(slot))
    }

    /// Splices a new node into `child`'s place, making `child` its only child.
    pub fn insert_parent(&mut self, child: NodeId, value: V) -> Result<NodeId, TreeError> {
        let old_parent = self.validate(child)?.parent;
        let slot = self.allocate(value, old_parent, vec![child.slot]);
        match old_parent {
            Some(p) => {
                for c in self.node_mut(p).children.iter_mut() {
                    if *c == child.slot {
                        *c = slot;
                    }
                }
            }
            None => self.root = Some(slot),
        }
        self.node_mut(child.slot).parent = Some(slot);
        Ok(self.make_id(slot))
    }

    /// Removes a leaf and retires its handle.
    pub fn remove_leaf(&mut self, node: NodeId) -> Result<V, TreeError> {
        let (parent, is_leaf) = {
            let n = self.validate(node)?;
            (n.parent, n.children.is_empty())
        };
        if !is_leaf {
            return Err(TreeError::HasChildren);
        }
        match parent {
            Some(p) => self.node_mut(p).children.retain(|&c| c != node.slot),
            None => self.root = None,
        }
        let slot = &mut self.slots[node.slot as usize];
        slot.generation = slot.generation.wrapping_add(1);
        let removed = slot.node.take();
        self.free.push(node.slot);
        self.len -= 1;
        self.snapshot = None;
        match removed {
            Some(n) => Ok(n.value),
            None => Err(TreeError::StaleNode),
        }
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root.map(|slot| self.make_id(slot))
    }

    pub fn value(&self, node: NodeId) -> Result<&V, TreeError> {
        Ok(&self.validate(node)?.value)
    }

    pub fn parent(&self, node: NodeId) -> Result<Option<NodeId>, TreeError> {
        Ok(self.validate(node)?.parent.map(|slot| self.make_id(slot)))
    }

    /// Children in construction order.
    pub fn children(
        &self,
        node: NodeId,
    ) -> Result<impl ExactSizeIterator<Item = NodeId> + '_, TreeError> {
        let node = self.validate(node)?;
        Ok(node.children.iter().map(|&slot| self.make_id(slot)))
    }

    pub fn is_leaf(&self, node: NodeId) -> Result<bool, TreeError> {
        Ok(self.validate(node)?.children.is_empty())
    }

    pub fn is_root(&self, node: NodeId) -> Result<bool, TreeError> {
        Ok(self.validate(node)?.parent.is_none())
    }

    /// Rebuilds depths, heights and dense preorder indices.
    pub fn reindex(&mut self) -> Result<&TreeSnapshot, TreeError> {
        if self.snapshot.is_none() {
            let snapshot = TreeSnapshot::new(self)?;
            tracing::debug!(
                n = snapshot.len(),
                height = snapshot.height(0),
                "reindexed tree"
            );
            self.snapshot = Some(snapshot);
        }
        self.snapshot()
    }

    /// Frozen view from the last `reindex()`.
    pub fn snapshot(&self) -> Result<&TreeSnapshot, TreeError> {
        self.snapshot.as_ref().ok_or(TreeError::NotIndexed)
    }

    /// Dense preorder index; the root is `0`.
    pub fn index(&self, node: NodeId) -> Result<usize, TreeError> {
        self.snapshot()?.index_of(node)
    }

    pub fn depth(&self, node: NodeId) -> Result<usize, TreeError> {
        let snapshot = self.snapshot()?;
        Ok(snapshot.depth(snapshot.index_of(node)?))
    }

    /// Number of edges on the longest downward path from `node`.
    pub fn height(&self, node: NodeId) -> Result<usize, TreeError> {
        let snapshot = self.snapshot()?;
        Ok(snapshot.height(snapshot.index_of(node)?))
    }
}

impl Tree<usize> {
    /// Builds a tree from `parents[i]`, the parent of node `i` (`None` for
    /// the root). Node `i` stores `i` and children keep ascending order.
    pub fn from_parents(parents: &[Option<usize>]) -> Result<Self, TreeError> {
        let n = parents.len();
        if n == 0 {
            return Err(TreeError::Empty);
        }

        let mut root = None;
        let mut children = vec![Vec::new(); n];
        for (node, parent) in parents.iter().enumerate() {
            match *parent {
                None if root.is_some() => return Err(TreeError::MultipleRoots),
                None => root = Some(node),
                Some(p) if p >= n || p == node => return Err(TreeError::InvalidParent { node }),
                Some(p) => children[p].push(node),
            }
        }
        let root = root.ok_or(TreeError::Unreachable { reached: 0, len: n })?;

        let mut tree = Tree::new();
        let mut stack = vec![(root, tree.add_root(root)?)];
        while let Some((node, id)) = stack.pop() {
            for &child in &children[node] {
                let child_id = tree.add_child(id, child)?;
                stack.push((child, child_id));
            }
        }
        if tree.len() != n {
            return Err(TreeError::Unreachable {
                reached: tree.len(),
                len: n,
            });
        }
        tree.reindex()?;
        Ok(tree)
    }
}
