use std::collections::HashMap;

use rooted_tree::{NodeMap, Tree, TreeError, TreeSnapshot};

use crate::LaError;
use crate::LevelAncestor;
use crate::ladder::Ladders;
use crate::table::AncestorTable;

/// Largest accepted micro bound. A micro tree has at most this many nodes,
/// so its parenthesis code plus sentinel fits in a `u64`.
pub const MAX_MICRO_BOUND: usize = 31;

const NONE: u32 = u32::MAX;

/// Linear-space, constant-time level ancestor by macro-micro decomposition.
///
/// A node is micro when both its subtree height and subtree size are at most
/// the bound `B`; everything else forms the macro tree, which contains the
/// root whenever the tree is larger than one micro tree. Macro nodes are
/// answered from a ladder decomposition whose jump nodes are the macro
/// leaves. Each maximal micro subtree is answered from an ancestor table
/// shared by every micro tree of the same shape.
///
/// Preorder numbering makes a micro tree rooted at `r` the contiguous range
/// `r..r + size`, so node `v` is local node `v - r` of its shape.
#[derive(Clone, Debug)]
pub struct MacroMicroLa {
    nodes: NodeMap,
    micro_bound: usize,
    ladders: Ladders,
    parent: Vec<u32>,
    micro_root: Vec<u32>,
    root_shape: Vec<u32>,
    shapes: Vec<AncestorTable>,
}

impl MacroMicroLa {
    /// Micro bound used by [`LevelAncestor::build`]: `max(1, floor(log2 n / 4))`.
    pub fn default_micro_bound(n: usize) -> usize {
        (n.max(1).ilog2() as usize / 4).clamp(1, MAX_MICRO_BOUND)
    }

    pub fn with_micro_bound<V>(tree: &Tree<V>, micro_bound: usize) -> Result<Self, LaError> {
        Self::from_snapshot(tree.snapshot()?, micro_bound)
    }

    pub fn from_snapshot(snapshot: &TreeSnapshot, micro_bound: usize) -> Result<Self, LaError> {
        if !(1..=MAX_MICRO_BOUND).contains(&micro_bound) {
            return Err(LaError::InvalidMicroBound { bound: micro_bound });
        }
        Ok(Self::build_with_bound(snapshot, micro_bound)?)
    }

    fn build_with_bound(snapshot: &TreeSnapshot, micro_bound: usize) -> Result<Self, TreeError> {
        if snapshot.is_empty() {
            return Err(TreeError::Empty);
        }

        let n = snapshot.len();
        let is_micro =
            |v: usize| snapshot.height(v) <= micro_bound && snapshot.subtree_size(v) <= micro_bound;
        let ladders = Ladders::new(snapshot, |v| !is_micro(v));

        let mut parent = vec![NONE; n];
        let mut micro_root = vec![NONE; n];
        let mut root_shape = vec![NONE; n];
        let mut shapes = Vec::new();
        let mut shape_ids: HashMap<u64, u32> = HashMap::new();

        for v in 0..n {
            if let Some(p) = snapshot.parent(v) {
                parent[v] = p as u32;
            }
            if !is_micro(v) {
                continue;
            }
            match snapshot.parent(v) {
                Some(p) if micro_root[p] != NONE => micro_root[v] = micro_root[p],
                _ => {
                    micro_root[v] = v as u32;
                    let code = shape_code(snapshot, v);
                    let id = *shape_ids.entry(code).or_insert_with(|| {
                        let size = snapshot.subtree_size(v);
                        let local_parent = |i: usize| {
                            // the root's parent is outside the micro tree
                            (i > 0).then(|| snapshot.parent(v + i).map_or(0, |p| p - v))
                        };
                        shapes.push(AncestorTable::new(size, local_parent));
                        shapes.len() as u32 - 1
                    });
                    root_shape[v] = id;
                }
            }
        }

        tracing::debug!(
            n,
            micro_bound,
            ladders = ladders.ladder_count(),
            micro_trees = root_shape.iter().filter(|&&s| s != NONE).count(),
            shapes = shapes.len(),
            "built macro-micro level ancestor index"
        );

        Ok(Self {
            nodes: snapshot.nodes().clone(),
            micro_bound,
            ladders,
            parent,
            micro_root,
            root_shape,
            shapes,
        })
    }

    pub fn micro_bound(&self) -> usize {
        self.micro_bound
    }

    /// Number of distinct micro tree shapes with a table.
    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_micro(&self, v: usize) -> bool {
        self.micro_root[v] != NONE
    }
}

impl LevelAncestor for MacroMicroLa {
    fn build<V>(tree: &Tree<V>) -> Result<Self, TreeError> {
        let snapshot = tree.snapshot()?;
        Self::build_with_bound(snapshot, Self::default_micro_bound(snapshot.len()))
    }

    fn nodes(&self) -> &NodeMap {
        &self.nodes
    }

    fn ancestor_index(&self, v: usize, k: usize) -> Option<usize> {
        let r = self.micro_root[v];
        if r == NONE {
            return self.ladders.ancestor(v, k);
        }

        let r = r as usize;
        let local_depth = self.ladders.depth(v) - self.ladders.depth(r);
        if k <= local_depth {
            let table = &self.shapes[self.root_shape[r] as usize];
            return table.get(v - r, k).map(|a| r + a);
        }
        match self.parent[r] {
            NONE => None,
            p => self.ladders.ancestor(p as usize, k - local_depth - 1),
        }
    }
}

/// Balanced-parenthesis code of the subtree rooted at `r`, behind a leading
/// sentinel bit: `1` opens a child, `0` closes one. Read off consecutive
/// preorder depths, so no traversal stack is needed.
fn shape_code(snapshot: &TreeSnapshot, r: usize) -> u64 {
    let end = r + snapshot.subtree_size(r);
    let mut code = 1_u64;
    for v in r + 1..end {
        let closes = snapshot.depth(v - 1) + 1 - snapshot.depth(v);
        code = (code << closes << 1) | 1;
    }
    code << (snapshot.depth(end - 1) - snapshot.depth(r))
}
