//! Re-export public algorithms.
//!
//! Every algorithm here is a read-only consumer of [`GraphLike`](crate::store::GraphLike).

pub mod cycle;
pub mod preorder;
pub mod schedule;
pub mod tarjan;

pub use cycle::has_cycle;
pub use preorder::{Preorder, preorder};
pub use schedule::{Schedule, schedule};
pub use tarjan::{StronglyConnectedComponents, strongly_connected_components, toposort};
