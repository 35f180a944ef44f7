use rmq::RmqError;
use rooted_tree::TreeError;
use thiserror::Error;

/// Error type returned by LCA index construction.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum LcaError {
    #[error("tree error: {0}")]
    Tree(#[from] TreeError),

    /// Failure of the RMQ strategy over the Euler levels.
    #[error("rmq error: {0}")]
    Rmq(#[from] RmqError),
}
