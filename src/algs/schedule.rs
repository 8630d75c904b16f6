//! Level-based batching by repeated sink peeling.
//!
//! Batch 0 is every vertex without outgoing edges. Batch `k + 1` is every
//! backward neighbor of every vertex in batch `k`, one entry per edge instance
//! and without deduplication against earlier batches. A vertex reachable from a
//! sink along paths of different lengths therefore appears in several batches;
//! running batches in order still runs each vertex after everything it points
//! at has run at least once.
//!
//! # Errors
//! * [`GraphError::CycleDetected`]: [`schedule`] refuses cyclic graphs, on
//!   which peeling never terminates when a cycle reaches a sink.

use crate::algs::cycle::has_cycle;
use crate::graph_error::GraphError;
use crate::store::graph_like::GraphLike;

/// Lazy sequence of ready batches. Created by [`schedule`] or
/// [`Schedule::unchecked`].
pub struct Schedule<'a, G>
where
    G: GraphLike + ?Sized + 'a,
{
    graph: &'a G,
    last: Option<Vec<G::Vertex>>,
    started: bool,
}

impl<'a, G> Schedule<'a, G>
where
    G: GraphLike + ?Sized + 'a,
{
    /// Builds a schedule without checking for cycles.
    ///
    /// The caller guarantees `graph` is acyclic. On a cyclic graph the batches
    /// repeat forever if some cycle can reach a sink, and come out empty if no
    /// vertex is a sink.
    pub fn unchecked(graph: &'a G) -> Self {
        Self {
            graph,
            last: None,
            started: false,
        }
    }

    fn sinks(&self) -> Vec<G::Vertex> {
        self.graph
            .vertices()
            .filter(|v| self.graph.target_vertices(v).next().is_none())
            .collect()
    }
}

impl<'a, G> Iterator for Schedule<'a, G>
where
    G: GraphLike + ?Sized + 'a,
{
    type Item = Vec<G::Vertex>;

    fn next(&mut self) -> Option<Self::Item> {
        let batch = match self.last.take() {
            Some(prev) => prev
                .iter()
                .flat_map(|v| self.graph.source_vertices(v))
                .collect(),
            None if !self.started => {
                self.started = true;
                self.sinks()
            }
            None => return None,
        };
        if batch.is_empty() {
            return None;
        }
        self.last = Some(batch.clone());
        Some(batch)
    }
}

/// Ready batches of an acyclic `graph`, sinks first.
///
/// Checks for cycles up front (O(V + E)); use [`Schedule::unchecked`] to skip
/// the check.
///
/// # Example
/// ```rust
/// use hash_digraph::algs::schedule;
/// use hash_digraph::store::DirectedGraph;
/// let g = DirectedGraph::from_edges([(2, 1), (3, 2)]);
/// let batches: Vec<_> = schedule(&g).unwrap().collect();
/// assert_eq!(batches, vec![vec![1], vec![2], vec![3]]);
/// ```
pub fn schedule<G>(graph: &G) -> Result<Schedule<'_, G>, GraphError>
where
    G: GraphLike + ?Sized,
{
    if has_cycle(graph) {
        log::debug!(
            "schedule: refusing cyclic graph ({} vertices, {} edges)",
            graph.vertex_count(),
            graph.edge_count()
        );
        return Err(GraphError::CycleDetected);
    }
    Ok(Schedule::unchecked(graph))
}

#[cfg(test)]
mod tests {
    use super::{Schedule, schedule};
    use crate::graph_error::GraphError;
    use crate::store::DirectedGraph;

    #[test]
    fn peels_sinks_level_by_level() {
        let mut g = DirectedGraph::from_edges([(2, 1), (3, 2), (5, 2), (6, 4)]);
        g.add_vertex(8);
        let batches: Vec<_> = schedule(&g).unwrap().collect();
        assert_eq!(batches, vec![vec![1, 4, 8], vec![2, 6], vec![3, 5]]);
    }

    #[test]
    fn no_dedup_across_batches() {
        // a -> b -> c and a -> c: a is ready after c and again after b.
        let g = DirectedGraph::from_edges([("a", "b"), ("b", "c"), ("a", "c")]);
        let batches: Vec<_> = schedule(&g).unwrap().collect();
        assert_eq!(batches, vec![vec!["c"], vec!["b", "a"], vec!["a"]]);
    }

    #[test]
    fn cyclic_graph_is_refused() {
        let g = DirectedGraph::from_edges([(1, 2), (2, 1), (2, 3)]);
        assert_eq!(schedule(&g).err(), Some(GraphError::CycleDetected));
    }

    #[test]
    fn unchecked_on_sinkless_cycle_is_empty() {
        let g = DirectedGraph::from_edges([(1, 2), (2, 1)]);
        assert_eq!(Schedule::unchecked(&g).next(), None);
    }

    #[test]
    fn empty_graph_has_no_batches() {
        let g = DirectedGraph::<u8>::new();
        assert_eq!(schedule(&g).unwrap().count(), 0);
    }

    #[test]
    fn exhausted_schedule_stays_exhausted() {
        let g = DirectedGraph::from_edges([(1, 2)]);
        let mut s = schedule(&g).unwrap();
        assert_eq!(s.next(), Some(vec![2]));
        assert_eq!(s.next(), Some(vec![1]));
        assert_eq!(s.next(), None);
        assert_eq!(s.next(), None);
    }
}
