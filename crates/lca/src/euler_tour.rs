use rooted_tree::TreeSnapshot;

/// Depth-first tour recording a node on entry and again after each child.
///
/// `levels` has `2n - 1` entries and neighbouring entries differ by exactly
/// one, since every step walks a single tree edge.
#[derive(Clone, Debug)]
pub struct EulerTour {
    visits: Vec<usize>,
    levels: Vec<usize>,
    start: Vec<usize>,
}

impl EulerTour {
    pub fn new(snapshot: &TreeSnapshot) -> Self {
        let n = snapshot.len();
        let tour_len = (2 * n).saturating_sub(1);
        let mut visits = Vec::with_capacity(tour_len);
        let mut levels = Vec::with_capacity(tour_len);
        let mut start = vec![0_usize; n];

        if n == 0 {
            return Self {
                visits,
                levels,
                start,
            };
        }

        visits.push(0);
        levels.push(0);
        // (node, position of the next child to descend into)
        let mut stack = vec![(0_usize, 0_usize)];
        while let Some(top) = stack.last_mut() {
            let (v, next) = *top;
            let children = snapshot.children(v);
            if next == children.len() {
                stack.pop();
                if let Some(&(p, _)) = stack.last() {
                    visits.push(p);
                    levels.push(snapshot.depth(p));
                }
                continue;
            }
            top.1 += 1;

            let c = children[next];
            start[c] = visits.len();
            visits.push(c);
            levels.push(snapshot.depth(c));
            stack.push((c, 0));
        }
        debug_assert_eq!(visits.len(), tour_len);

        Self {
            visits,
            levels,
            start,
        }
    }

    /// Dense node index at each tour position.
    pub fn visits(&self) -> &[usize] {
        &self.visits
    }

    /// Depth at each tour position.
    pub fn levels(&self) -> &[usize] {
        &self.levels
    }

    /// Tour position of the first visit of `v`.
    #[inline]
    pub fn start(&self, v: usize) -> usize {
        self.start[v]
    }
}
