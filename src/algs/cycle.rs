//! Cycle detection by iterative depth-first search.
//!
//! A back-edge is an edge into a vertex that is still on the active DFS path.
//! Vertices whose subtree has been fully explored are marked done and never
//! count as back-edge targets, so two roots (or two branches) reaching the same
//! vertex do not report a false cycle.

use crate::store::bounds::VertexLike;
use crate::store::graph_like::GraphLike;
use hashbrown::HashMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Mark {
    /// On the active path.
    Active,
    /// Subtree fully explored.
    Done,
}

/// What an edge `v -> w` leads into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Reach {
    New,
    Active,
    Done,
}

/// Per-run vertex marks shared by the sync and async drivers.
#[derive(Debug)]
pub(crate) struct PathMarks<V> {
    marks: HashMap<V, Mark>,
}

impl<V: VertexLike> PathMarks<V> {
    pub(crate) fn new() -> Self {
        Self {
            marks: HashMap::new(),
        }
    }

    #[inline]
    pub(crate) fn is_seen(&self, v: &V) -> bool {
        self.marks.contains_key(v)
    }

    #[inline]
    pub(crate) fn enter(&mut self, v: V) {
        self.marks.insert(v, Mark::Active);
    }

    #[inline]
    pub(crate) fn reach(&self, w: &V) -> Reach {
        match self.marks.get(w) {
            None => Reach::New,
            Some(Mark::Active) => Reach::Active,
            Some(Mark::Done) => Reach::Done,
        }
    }

    #[inline]
    pub(crate) fn leave(&mut self, v: &V) {
        if let Some(m) = self.marks.get_mut(v) {
            *m = Mark::Done;
        }
    }
}

/// Returns `true` if `graph` contains a directed cycle (self-loops included).
///
/// Every vertex is tried as a root, so disconnected graphs are covered.
/// Stops at the first back-edge found. O(V + E).
///
/// # Example
/// ```rust
/// use hash_digraph::algs::has_cycle;
/// use hash_digraph::store::DirectedGraph;
/// let dag = DirectedGraph::from_edges([(1, 2), (3, 2), (4, 1), (4, 3)]);
/// assert!(!has_cycle(&dag));
/// let cyclic = DirectedGraph::from_edges([(1, 2), (2, 1)]);
/// assert!(has_cycle(&cyclic));
/// ```
pub fn has_cycle<G>(graph: &G) -> bool
where
    G: GraphLike + ?Sized,
{
    let mut marks = PathMarks::new();
    let mut frames: Vec<(G::Vertex, G::Targets<'_>)> = Vec::new();

    for root in graph.vertices() {
        if marks.is_seen(&root) {
            continue;
        }
        let targets = graph.target_vertices(&root);
        marks.enter(root.clone());
        frames.push((root, targets));

        while let Some((v, targets)) = frames.last_mut() {
            match targets.next() {
                Some(w) => match marks.reach(&w) {
                    Reach::Active => return true,
                    Reach::Done => {}
                    Reach::New => {
                        let next = graph.target_vertices(&w);
                        marks.enter(w.clone());
                        frames.push((w, next));
                    }
                },
                None => {
                    marks.leave(v);
                    frames.pop();
                }
            }
        }
    }
    false
}
