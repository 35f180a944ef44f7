use rmq::PlusMinusOneRmq;
use rmq::StaticRmq;
use rooted_tree::{NodeId, NodeMap, Tree, TreeError, TreeSnapshot};

use crate::EulerTour;
use crate::LcaError;

/// Lowest common ancestor by reduction to RMQ over Euler tour depths.
///
/// The RMQ strategy is pluggable; the default exploits the ±1 property of
/// the tour.
#[derive(Clone, Debug)]
pub struct LcaIndex<R = PlusMinusOneRmq<usize>> {
    nodes: NodeMap,
    visits: Vec<usize>,
    start: Vec<usize>,
    rmq: R,
}

impl LcaIndex {
    pub fn new<V>(tree: &Tree<V>) -> Result<Self, LcaError> {
        Self::with_strategy(tree)
    }
}

impl<R: StaticRmq<usize>> LcaIndex<R> {
    pub fn with_strategy<V>(tree: &Tree<V>) -> Result<Self, LcaError> {
        Self::from_snapshot(tree.snapshot()?)
    }

    pub fn from_snapshot(snapshot: &TreeSnapshot) -> Result<Self, LcaError> {
        if snapshot.is_empty() {
            return Err(TreeError::Empty.into());
        }
        let tour = EulerTour::new(snapshot);
        let rmq = R::build(tour.levels())?;
        let start = (0..snapshot.len()).map(|v| tour.start(v)).collect();

        tracing::debug!(
            n = snapshot.len(),
            tour = tour.visits().len(),
            "built lca index"
        );

        Ok(Self {
            nodes: snapshot.nodes().clone(),
            visits: tour.visits().to_vec(),
            start,
            rmq,
        })
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn nodes(&self) -> &NodeMap {
        &self.nodes
    }

    /// LCA of two dense indices of the indexed snapshot.
    #[inline]
    pub fn lca_index(&self, u: usize, v: usize) -> usize {
        let a = self.start[u];
        let b = self.start[v];
        self.visits[self.rmq.argmin_assume_valid(a.min(b), a.max(b))]
    }

    pub fn lca(&self, u: NodeId, v: NodeId) -> Result<NodeId, TreeError> {
        let u = self.nodes.index_of(u)?;
        let v = self.nodes.index_of(v)?;
        Ok(self.nodes.node(self.lca_index(u, v)))
    }
}
