use async_trait::async_trait;
use futures::stream::{self, BoxStream, StreamExt};
use hash_digraph::prelude::*;

/// Source that suspends before every item it yields.
struct Yielding(DirectedGraph<u32>);

fn yielding(items: Vec<u32>) -> BoxStream<'static, u32> {
    stream::iter(items)
        .then(|v| async move {
            tokio::task::yield_now().await;
            v
        })
        .boxed()
}

#[async_trait]
impl AsyncGraphLike for Yielding {
    type Vertex = u32;

    fn vertices(&self) -> BoxStream<'_, u32> {
        yielding(self.0.vertices().copied().collect())
    }

    fn source_vertices(&self, v: &u32) -> BoxStream<'_, u32> {
        yielding(self.0.source_vertices(v).copied().collect())
    }

    fn target_vertices(&self, v: &u32) -> BoxStream<'_, u32> {
        yielding(self.0.target_vertices(v).copied().collect())
    }

    async fn edge_count(&self) -> usize {
        tokio::task::yield_now().await;
        self.0.edge_count()
    }

    async fn vertex_count(&self) -> usize {
        tokio::task::yield_now().await;
        self.0.vertex_count()
    }
}

const ONE_CYCLE: [(u32, u32); 6] = [(1, 2), (3, 2), (4, 1), (4, 3), (5, 4), (4, 5)];

#[tokio::test]
async fn suspending_source_matches_sync_algorithms() {
    let g = DirectedGraph::from_edges(ONE_CYCLE);
    let src = Yielding(g.clone());

    assert_eq!(has_cycle_async(&src).await, has_cycle(&g));
    let sccs: Vec<_> = strongly_connected_components_async(&src).collect().await;
    assert_eq!(sccs, strongly_connected_components(&g).collect::<Vec<_>>());
    let order: Vec<_> = preorder_async(&src).collect().await;
    assert_eq!(order, preorder(&g).collect::<Vec<_>>());
    let topo: Vec<_> = toposort_async(&src).collect().await;
    assert_eq!(topo, toposort(&g).collect::<Vec<_>>());
}

#[tokio::test]
async fn acyclic_source() {
    let src = Yielding(DirectedGraph::from_edges([(1, 2), (3, 2), (4, 1), (4, 3)]));
    assert!(!has_cycle_async(&src).await);
    let topo: Vec<_> = toposort_async(&src).collect().await;
    assert_eq!(topo, vec![2, 1, 3, 4]);
    assert_eq!(src.edge_count().await, 4);
    assert_eq!(src.vertex_count().await, 4);
}

#[tokio::test]
async fn streams_can_be_dropped_early() {
    let src = Yielding(DirectedGraph::from_edges(ONE_CYCLE));
    let first: Vec<_> = strongly_connected_components_async(&src).take(1).collect().await;
    assert_eq!(first, vec![vec![2]]);
    let head: Vec<_> = preorder_async(&src).take(2).collect().await;
    assert_eq!(head, vec![1, 2]);
    // a fresh traversal is unaffected
    assert_eq!(preorder_async(&src).count().await, 5);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn blocking_adapter_on_multi_thread_runtime() {
    let g = DirectedGraph::from_edges([(1, 1)]);
    let src = Blocking(&g);
    assert!(has_cycle_async(&src).await);
    assert_eq!(src.vertex_count().await, 1);
    let empty = DirectedGraph::<u32>::new();
    assert_eq!(toposort_async(&Blocking(&empty)).count().await, 0);
}
