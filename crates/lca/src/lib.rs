//! Lowest common ancestors via the Euler tour reduction to ±1 RMQ, and the
//! reverse reduction: RMQ via LCA on a Cartesian tree.
//!
//! Built indices are immutable and `Send + Sync`; concurrent queries need no
//! synchronization.

mod error;
mod euler_tour;
mod lca_index;
mod rmq_via_lca;

pub use error::LcaError;
pub use euler_tour::EulerTour;
pub use lca_index::LcaIndex;
pub use rmq_via_lca::LcaRmq;
