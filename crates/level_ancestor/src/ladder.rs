use rooted_tree::TreeSnapshot;

const NONE: u32 = u32::MAX;

/// Ladder decomposition with one jump table per ladder.
///
/// Covers an upward-closed set of nodes (the root plus any node whose
/// parent is covered). Its leaves are the jump nodes. Each leaf, taken by
/// decreasing depth, claims the unmarked path above it and extends it
/// upward by as many nodes again, so a node `h` above its leaf always has at
/// least `min(h, depth)` ladder entries above it.
///
/// Ladders are stored top to bottom; a node's offset is its position in the
/// ladder whose path claimed it, so the entry `d` above it is at
/// `offset - d`.
#[derive(Clone, Debug)]
pub(crate) struct Ladders {
    depth: Vec<u32>,
    ladder_of: Vec<u32>,
    offset: Vec<u32>,
    ladder_offsets: Vec<usize>,
    ladder_nodes: Vec<u32>,
    // jumps[jump_offsets[l]..][i] is the 2^i-th ancestor of ladder l's leaf
    jump_offsets: Vec<usize>,
    jumps: Vec<u32>,
}

impl Ladders {
    pub(crate) fn new(snapshot: &TreeSnapshot, covered: impl Fn(usize) -> bool) -> Self {
        let n = snapshot.len();
        let depth: Vec<u32> = (0..n).map(|v| snapshot.depth(v) as u32).collect();
        let leaves = leaves_by_decreasing_depth(snapshot, &covered);

        let mut ladder_of = vec![NONE; n];
        let mut offset = vec![NONE; n];
        let mut ladder_offsets = Vec::with_capacity(leaves.len() + 1);
        let mut ladder_nodes = Vec::new();
        ladder_offsets.push(0);

        let mut path = Vec::new();
        for &leaf in &leaves {
            let id = ladder_offsets.len() as u32 - 1;

            path.clear();
            let mut cur = Some(leaf);
            while let Some(v) = cur {
                if ladder_of[v] != NONE {
                    break;
                }
                ladder_of[v] = id;
                path.push(v as u32);
                cur = snapshot.parent(v);
            }

            let start = ladder_nodes.len();
            for _ in 0..path.len() {
                let Some(v) = cur else { break };
                ladder_nodes.push(v as u32);
                cur = snapshot.parent(v);
            }
            ladder_nodes[start..].reverse();
            let extension = ladder_nodes.len() - start;

            for (i, &v) in path.iter().rev().enumerate() {
                offset[v as usize] = (extension + i) as u32;
                ladder_nodes.push(v);
            }
            ladder_offsets.push(ladder_nodes.len());
        }

        let mut ladders = Self {
            depth,
            ladder_of,
            offset,
            ladder_offsets,
            ladder_nodes,
            jump_offsets: Vec::with_capacity(leaves.len() + 1),
            jumps: Vec::new(),
        };
        ladders.build_jumps(snapshot);
        ladders
    }

    fn build_jumps(&mut self, snapshot: &TreeSnapshot) {
        self.jump_offsets.push(0);
        for l in 0..self.ladder_count() {
            let leaf = self.ladder_nodes[self.ladder_offsets[l + 1] - 1] as usize;
            let mut cur = snapshot.parent(leaf);
            let mut step = 1_usize;
            while let Some(u) = cur {
                self.jumps.push(u as u32);
                // the ladder of u reaches 2^i above it or u is shallower than that
                cur = self.climb(u, step);
                step <<= 1;
            }
            self.jump_offsets.push(self.jumps.len());
        }
    }

    /// Ancestor `d` above covered node `u`, read from u's own ladder.
    #[inline]
    fn climb(&self, u: usize, d: usize) -> Option<usize> {
        let offset = self.offset[u] as usize;
        (offset >= d).then(|| {
            let l = self.ladder_of[u] as usize;
            self.ladder_nodes[self.ladder_offsets[l] + offset - d] as usize
        })
    }

    pub(crate) fn ladder_count(&self) -> usize {
        self.ladder_offsets.len() - 1
    }

    #[inline]
    pub(crate) fn depth(&self, v: usize) -> usize {
        self.depth[v] as usize
    }

    /// `k`-th ancestor of covered node `v`, or `None` above the root.
    pub(crate) fn ancestor(&self, v: usize, k: usize) -> Option<usize> {
        let depth = self.depth(v);
        if k > depth {
            return None;
        }
        let l = self.ladder_of[v] as usize;
        debug_assert!(l != NONE as usize, "node {v} is not covered");
        let leaf = self.ladder_nodes[self.ladder_offsets[l + 1] - 1] as usize;
        let k = k + self.depth(leaf) - depth;
        if k == 0 {
            return Some(v);
        }

        let i = k.ilog2() as usize;
        let u = self.jumps[self.jump_offsets[l] + i] as usize;
        let rest = k - (1 << i);
        self.climb(u, rest)
    }
}

/// Covered nodes without covered children, deepest first. Counting sort on
/// depth keeps this linear.
fn leaves_by_decreasing_depth(snapshot: &TreeSnapshot, covered: &impl Fn(usize) -> bool) -> Vec<usize> {
    let leaves: Vec<usize> = (0..snapshot.len())
        .filter(|&v| covered(v) && !snapshot.children(v).iter().any(|&c| covered(c)))
        .collect();
    let Some(max_depth) = leaves.iter().map(|&v| snapshot.depth(v)).max() else {
        return leaves;
    };

    let mut starts = vec![0_usize; max_depth + 2];
    for &v in &leaves {
        starts[max_depth - snapshot.depth(v) + 1] += 1;
    }
    for d in 1..starts.len() {
        starts[d] += starts[d - 1];
    }
    let mut sorted = vec![0_usize; leaves.len()];
    for &v in &leaves {
        let bucket = &mut starts[max_depth - snapshot.depth(v)];
        sorted[*bucket] = v;
        *bucket += 1;
    }
    sorted
}
