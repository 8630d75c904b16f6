//! Minimal read-only graph contract consumed by every algorithm.
//!
//! This module defines [`GraphLike`], the seam between vertex/edge storage and
//! the algorithms in [`crate::algs`]. Any backing store can implement it; the
//! algorithms never mutate the graph they traverse.

use super::bounds::VertexLike;

/// Read-only directed-graph query API.
///
/// # Associated Types
/// - `Vertex`: the vertex value type, yielded by value.
/// - `Vertices`: iterator over all vertices, in the store's registry order.
/// - `Sources` / `Targets`: iterators over backward / forward neighbors.
///
/// Neighbor sequences repeat a vertex once per parallel edge instance.
/// Querying an unknown vertex yields an empty sequence.
pub trait GraphLike {
    type Vertex: VertexLike;

    type Vertices<'a>: Iterator<Item = Self::Vertex> + 'a
    where
        Self: 'a;
    type Sources<'a>: Iterator<Item = Self::Vertex> + 'a
    where
        Self: 'a;
    type Targets<'a>: Iterator<Item = Self::Vertex> + 'a
    where
        Self: 'a;

    /// All vertices.
    fn vertices(&self) -> Self::Vertices<'_>;
    /// Sources of the edges pointing at `v`.
    fn source_vertices(&self, v: &Self::Vertex) -> Self::Sources<'_>;
    /// Targets of the edges leaving `v`.
    fn target_vertices(&self, v: &Self::Vertex) -> Self::Targets<'_>;

    /// Number of edge instances.
    fn edge_count(&self) -> usize;
    /// Number of registered vertices.
    fn vertex_count(&self) -> usize;
}

// Forwarding impl so algorithms accept `&&G` as well as `&G`.
impl<G: GraphLike + ?Sized> GraphLike for &G {
    type Vertex = G::Vertex;
    type Vertices<'a>
        = G::Vertices<'a>
    where
        Self: 'a;
    type Sources<'a>
        = G::Sources<'a>
    where
        Self: 'a;
    type Targets<'a>
        = G::Targets<'a>
    where
        Self: 'a;

    #[inline]
    fn vertices(&self) -> Self::Vertices<'_> {
        (**self).vertices()
    }
    #[inline]
    fn source_vertices(&self, v: &Self::Vertex) -> Self::Sources<'_> {
        (**self).source_vertices(v)
    }
    #[inline]
    fn target_vertices(&self, v: &Self::Vertex) -> Self::Targets<'_> {
        (**self).target_vertices(v)
    }
    #[inline]
    fn edge_count(&self) -> usize {
        (**self).edge_count()
    }
    #[inline]
    fn vertex_count(&self) -> usize {
        (**self).vertex_count()
    }
}
