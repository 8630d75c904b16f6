//! Vertex/edge storage: the ordered multi-index, the in-memory multigraph, and
//! the [`GraphLike`] contract the algorithms are written against.

pub mod bounds;
pub mod directed;
pub mod graph_like;
pub mod multi_index;

pub use bounds::{LabelLike, VertexLike};
pub use directed::DirectedGraph;
pub use graph_like::GraphLike;
pub use multi_index::OrderedMultiIndex;
