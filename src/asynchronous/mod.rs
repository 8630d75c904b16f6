//! Async mirrors of the graph algorithms for I/O-backed vertex sources.
//!
//! A source implements [`AsyncGraphLike`], whose vertex and neighbor sequences
//! are streams. The algorithms suspend only while fetching the next vertex or
//! neighbor; discovery indices, low-links and marks are updated between
//! fetches, never across one. They reuse the bookkeeping of the synchronous
//! algorithms, so once every fetch resolves the output is identical to the
//! synchronous run over the same sequences.
//!
//! Dropping a returned stream or future abandons the run; the source is never
//! mutated.

pub mod algorithms;
pub mod source;

pub use algorithms::{
    has_cycle_async, preorder_async, strongly_connected_components_async, toposort_async,
};
pub use source::{AsyncGraphLike, Blocking};
