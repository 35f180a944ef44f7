use thiserror::Error;

/// Error type returned by tree construction, handle validation and indexing.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum TreeError {
    /// Tree or input sequence has no nodes.
    #[error("tree must be non-empty")]
    Empty,

    #[error("tree already has a root")]
    RootExists,

    /// Handle was produced by a different tree.
    #[error("node does not belong to this tree")]
    ForeignNode,

    /// Handle refers to a node that has since been removed.
    #[error("node handle is no longer valid")]
    StaleNode,

    /// Structure changed since the last `reindex()`.
    #[error("tree was modified after its last reindex")]
    NotIndexed,

    #[error("node {node} has a parent outside the tree")]
    InvalidParent { node: usize },

    #[error("parent array has more than one root")]
    MultipleRoots,

    /// Parent array contains a cycle detached from the root.
    #[error("only {reached} of {len} nodes are reachable from the root")]
    Unreachable { reached: usize, len: usize },

    #[error("only leaves can be removed")]
    HasChildren,
}
