use rooted_tree::TreeError;
use thiserror::Error;

/// Error type returned by level ancestor index construction.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum LaError {
    #[error("tree error: {0}")]
    Tree(#[from] TreeError),

    #[error("micro bound must be in 1..={max}, got {bound}", max = crate::macro_micro::MAX_MICRO_BOUND)]
    InvalidMicroBound { bound: usize },
}
