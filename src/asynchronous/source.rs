//! The async graph contract and an adapter from any synchronous [`GraphLike`].

use crate::store::bounds::VertexLike;
use crate::store::graph_like::GraphLike;
use async_trait::async_trait;
use futures::stream::{self, BoxStream, StreamExt};

/// Read-only directed-graph query API whose sequences may suspend per item.
///
/// Mirrors [`GraphLike`]: unknown vertices yield empty streams, and neighbor
/// streams repeat a vertex once per parallel edge instance.
#[async_trait]
pub trait AsyncGraphLike: Sync {
    type Vertex: VertexLike + Send + Sync;

    /// All vertices, in the source's registry order.
    fn vertices(&self) -> BoxStream<'_, Self::Vertex>;
    /// Sources of the edges pointing at `v`.
    fn source_vertices(&self, v: &Self::Vertex) -> BoxStream<'_, Self::Vertex>;
    /// Targets of the edges leaving `v`.
    fn target_vertices(&self, v: &Self::Vertex) -> BoxStream<'_, Self::Vertex>;

    async fn edge_count(&self) -> usize;
    async fn vertex_count(&self) -> usize;
}

/// Exposes a synchronous graph as an [`AsyncGraphLike`] source.
///
/// Each call snapshots the requested sequence into a ready stream, so the
/// wrapped graph's iterators need not be `Send`.
///
/// # Example
/// ```rust
/// use hash_digraph::asynchronous::{Blocking, has_cycle_async};
/// use hash_digraph::store::DirectedGraph;
/// let g = DirectedGraph::from_edges([(1, 2), (2, 1)]);
/// assert!(futures::executor::block_on(has_cycle_async(&Blocking(&g))));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Blocking<'g, G: ?Sized>(pub &'g G);

#[async_trait]
impl<'g, G> AsyncGraphLike for Blocking<'g, G>
where
    G: GraphLike + Sync + ?Sized,
    G::Vertex: Send + Sync,
{
    type Vertex = G::Vertex;

    fn vertices(&self) -> BoxStream<'_, G::Vertex> {
        stream::iter(self.0.vertices().collect::<Vec<_>>()).boxed()
    }

    fn source_vertices(&self, v: &G::Vertex) -> BoxStream<'_, G::Vertex> {
        stream::iter(self.0.source_vertices(v).collect::<Vec<_>>()).boxed()
    }

    fn target_vertices(&self, v: &G::Vertex) -> BoxStream<'_, G::Vertex> {
        stream::iter(self.0.target_vertices(v).collect::<Vec<_>>()).boxed()
    }

    async fn edge_count(&self) -> usize {
        self.0.edge_count()
    }

    async fn vertex_count(&self) -> usize {
        self.0.vertex_count()
    }
}
