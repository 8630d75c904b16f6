#![cfg_attr(docsrs, feature(doc_cfg))]
//! # hash-digraph
//!
//! hash-digraph is an in-memory directed multigraph keyed by arbitrary hashable
//! values, plus the classical algorithms needed to reason about dependency
//! graphs (build graphs, task graphs, module graphs): cycle detection,
//! depth-first preorder, strongly connected components, topological ordering
//! and level-based scheduling.
//!
//! ## Features
//! - [`DirectedGraph`](store::DirectedGraph): insertion-ordered vertex registry
//!   with mirrored forward/backward adjacency, parallel edges and optional
//!   per-edge labels
//! - Algorithms written against the minimal [`GraphLike`](store::GraphLike)
//!   contract, so alternative stores plug in without changes
//! - Iterative traversals throughout; no recursion depth limits
//! - Async mirrors over stream-based sources in [`asynchronous`]
//!
//! ## Usage
//! ```rust
//! use hash_digraph::prelude::*;
//!
//! let mut g = DirectedGraph::from_edges([("app", "lib"), ("lib", "core")]);
//! g.add_edge("app", "core", ());
//! assert!(!has_cycle(&g));
//! assert_eq!(toposort(&g).collect::<Vec<_>>(), vec!["core", "lib", "app"]);
//! ```
//!
//! ## Invariant checking
//! Enable the `strict-invariants` feature to validate the adjacency indices
//! after every mutation; see [`DebugInvariants`].
//!
//! ## Concurrency
//! Everything is synchronous and single-threaded. Lazy sequences borrow the
//! graph, so mutating it mid-iteration does not compile. Dropping a sequence
//! early is always safe.

pub mod algs;
pub mod asynchronous;
pub mod debug_invariants;
pub mod graph_error;
pub mod store;

pub use debug_invariants::DebugInvariants;
pub use graph_error::GraphError;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::algs::{
        has_cycle, preorder, schedule, strongly_connected_components, toposort,
    };
    pub use crate::asynchronous::{
        AsyncGraphLike, Blocking, has_cycle_async, preorder_async,
        strongly_connected_components_async, toposort_async,
    };
    pub use crate::debug_invariants::DebugInvariants;
    pub use crate::graph_error::GraphError;
    pub use crate::store::{DirectedGraph, GraphLike, LabelLike, OrderedMultiIndex, VertexLike};
}
