use thiserror::Error;

/// Error type returned by RMQ construction and queries.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum RmqError {
    /// Input array was empty.
    #[error("input array must be non-empty")]
    Empty,

    /// Consecutive elements do not differ by exactly one.
    #[error("elements at positions {position} and {} differ by something other than +1 or -1", .position + 1)]
    NotUnitStep {
        /// Position of the left element of the offending pair.
        position: usize,
    },

    /// Requested block size cannot be encoded in a shape code.
    #[error("block size {block_size} is outside 1..={max}", max = crate::block::MAX_BLOCK_SIZE)]
    InvalidBlockSize { block_size: usize },

    /// Query endpoint outside `[0, len)`.
    #[error("query index {index} is out of range for length {len}")]
    OutOfRange { index: usize, len: usize },
}
