//! Common bound aliases used across the store and the algorithms.
//!
//! These traits have blanket impls, so any type satisfying the underlying
//! bounds will automatically implement them. They are zero-cost and only
//! reduce duplication in `where` clauses.

use std::fmt::Debug;
use std::hash::Hash;

/// Canonical bound set for vertex values.
///
/// - `Clone` so algorithms can keep owned copies on their work stacks
/// - `Eq + Hash` for hash-keyed adjacency and per-run bookkeeping
/// - `Debug` for diagnostics and invariant checks
pub trait VertexLike: Clone + Eq + Hash + Debug {}
impl<T> VertexLike for T where T: Clone + Eq + Hash + Debug {}

/// Minimal bound for per-edge labels. Labels are compared, never hashed.
pub trait LabelLike: Clone + PartialEq + Debug {}
impl<T> LabelLike for T where T: Clone + PartialEq + Debug {}
