//! In-memory directed multigraph.
//!
//! This module provides [`DirectedGraph`], a hash-keyed multigraph with an
//! insertion-ordered vertex registry and two mirrored [`OrderedMultiIndex`]es
//! (forward: source -> targets, backward: target -> sources). Edges carry a
//! label of type `L`, which defaults to `()` for unlabeled graphs.

use super::bounds::{LabelLike, VertexLike};
use super::graph_like::GraphLike;
use super::multi_index::OrderedMultiIndex;
use crate::debug_invariants::DebugInvariants;
use crate::graph_error::GraphError;
use indexmap::IndexSet;
use itertools::Itertools;

/// A directed multigraph over hashable vertices.
///
/// Vertices are kept in the order they were first seen, whether through
/// [`add_vertex`](Self::add_vertex) or as an edge endpoint. Parallel edges
/// (and parallel edges with equal labels) are distinct instances.
///
/// # Type Parameters
/// - `V`: vertex type. Must implement [`VertexLike`].
/// - `L`: edge label type. Defaults to `()`.
///
/// Every borrowing iterator returned here holds a shared borrow of the graph,
/// so mutating the graph while one is alive is a compile error.
#[derive(Clone, Debug)]
pub struct DirectedGraph<V, L = ()>
where
    V: VertexLike,
{
    vertices: IndexSet<V>,
    forward: OrderedMultiIndex<V, V, L>,
    backward: OrderedMultiIndex<V, V, L>,
    edge_count: usize,
}

impl<V: VertexLike, L> Default for DirectedGraph<V, L> {
    fn default() -> Self {
        Self {
            vertices: IndexSet::new(),
            forward: OrderedMultiIndex::default(),
            backward: OrderedMultiIndex::default(),
            edge_count: 0,
        }
    }
}

impl<V: VertexLike> DirectedGraph<V> {
    /// Constructs an unlabeled graph by adding each `(source, target)` pair in turn.
    ///
    /// # Example
    /// ```rust
    /// use hash_digraph::store::DirectedGraph;
    /// let g = DirectedGraph::from_edges([(1, 2), (1, 2), (2, 3)]);
    /// assert_eq!(g.edge_count(), 3);
    /// assert_eq!(g.vertices().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
    /// ```
    pub fn from_edges<I: IntoIterator<Item = (V, V)>>(edges: I) -> Self {
        edges.into_iter().collect()
    }
}

impl<V: VertexLike, L: LabelLike> DirectedGraph<V, L> {
    /// Creates a new, empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Constructs a labeled graph by adding each `(source, target, label)` in turn.
    pub fn from_labeled_edges<I: IntoIterator<Item = (V, V, L)>>(edges: I) -> Self {
        edges.into_iter().collect()
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Registers `v` if it is not already known. Returns `true` when newly added.
    pub fn add_vertex(&mut self, v: V) -> bool {
        let added = self.vertices.insert(v);
        crate::debug_invariants!(self.validate_invariants(), "add_vertex");
        added
    }

    #[inline]
    pub fn has_vertex(&self, v: &V) -> bool {
        self.vertices.contains(v)
    }

    /// Adds one edge instance `source -> target` carrying `label`.
    ///
    /// Always succeeds; an existing identical edge just gains a sibling.
    ///
    /// # Example
    /// ```rust
    /// use hash_digraph::store::DirectedGraph;
    /// let mut g = DirectedGraph::<&str, char>::new();
    /// g.add_edge("a", "b", 'x');
    /// g.add_edge("a", "b", 'y');
    /// assert!(g.has_edge(&"a", &"b", Some(&'y')));
    /// assert_eq!(g.edge_count(), 2);
    /// ```
    pub fn add_edge(&mut self, source: V, target: V, label: L) {
        self.forward.add(source.clone(), target.clone(), label.clone());
        self.backward.add(target.clone(), source.clone(), label);
        self.edge_count += 1;

        self.vertices.insert(source);
        self.vertices.insert(target);

        crate::debug_invariants!(self.validate_invariants(), "add_edge");
    }

    /// Whether an edge `a -> b` exists, optionally restricted to `label`.
    #[inline]
    pub fn has_edge(&self, a: &V, b: &V, label: Option<&L>) -> bool {
        self.forward.has(a, Some(b), label)
    }

    /// Removes at most one edge instance `a -> b` (the first one in insertion
    /// order that matches `label`, if given). Returns whether one was removed.
    ///
    /// The backward mirror removed is the one carrying the same label as the
    /// forward instance, so both indices stay exact mirrors.
    pub fn delete_edge(&mut self, a: &V, b: &V, label: Option<&L>) -> bool {
        let Some((_, removed_label)) = self.forward.delete_one(a, b, label) else {
            return false;
        };
        self.backward.delete_one(b, a, Some(&removed_label));
        self.edge_count -= 1;
        crate::debug_invariants!(self.validate_invariants(), "delete_edge");
        true
    }

    /// Removes `v` and every edge instance incident to it. Returns the number of
    /// edge instances removed; `0` (and no other effect) for an unknown vertex.
    ///
    /// Self-loops and parallel edges are each counted exactly once.
    pub fn delete_vertex(&mut self, v: &V) -> usize {
        let mut removed = 0;

        // Outgoing first: each instance strikes its own backward mirror, which
        // also clears self-loop mirrors from `backward[v]`.
        for (target, label) in self.forward.delete_key(v) {
            self.backward.delete_one(&target, v, Some(&label));
            removed += 1;
        }
        // Whatever is left under `backward[v]` came from other sources.
        for (source, label) in self.backward.delete_key(v) {
            self.forward.delete_one(&source, v, Some(&label));
            removed += 1;
        }

        self.edge_count -= removed;
        let existed = self.vertices.shift_remove(v);
        log::trace!(
            "delete_vertex({v:?}): existed={existed}, removed {removed} edge instance(s)"
        );

        crate::debug_invariants!(self.validate_invariants(), "delete_vertex");
        removed
    }

    /// Registered vertices, in first-seen order.
    pub fn vertices(&self) -> indexmap::set::Iter<'_, V> {
        self.vertices.iter()
    }

    /// Sources of the edges pointing at `v` (one per instance).
    pub fn source_vertices<'a>(
        &'a self,
        v: &V,
    ) -> impl Iterator<Item = &'a V> + use<'a, V, L> {
        self.backward.get(v).iter().map(|(s, _)| s)
    }

    /// Targets of the edges leaving `v` (one per instance).
    pub fn target_vertices<'a>(
        &'a self,
        v: &V,
    ) -> impl Iterator<Item = &'a V> + use<'a, V, L> {
        self.forward.get(v).iter().map(|(t, _)| t)
    }

    /// `(source, label)` of every edge instance pointing at `v`.
    pub fn incoming_edges<'a>(
        &'a self,
        v: &V,
    ) -> impl Iterator<Item = (&'a V, &'a L)> + use<'a, V, L> {
        self.backward.get(v).iter().map(|(s, l)| (s, l))
    }

    /// `(target, label)` of every edge instance leaving `v`.
    pub fn outgoing_edges<'a>(
        &'a self,
        v: &V,
    ) -> impl Iterator<Item = (&'a V, &'a L)> + use<'a, V, L> {
        self.forward.get(v).iter().map(|(t, l)| (t, l))
    }

    /// Every edge instance exactly once: sources in registry order, then each
    /// source's outgoing instances in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (&V, &V, &L)> + '_ {
        self.vertices.iter().flat_map(move |s| {
            self.forward.get(s).iter().map(move |(t, l)| (s, t, l))
        })
    }
}

impl<V: VertexLike> FromIterator<(V, V)> for DirectedGraph<V> {
    fn from_iter<I: IntoIterator<Item = (V, V)>>(iter: I) -> Self {
        let mut g = Self::default();
        g.extend(iter);
        g
    }
}

impl<V: VertexLike> Extend<(V, V)> for DirectedGraph<V> {
    fn extend<I: IntoIterator<Item = (V, V)>>(&mut self, iter: I) {
        for (s, t) in iter {
            self.add_edge(s, t, ());
        }
    }
}

impl<V: VertexLike, L: LabelLike> FromIterator<(V, V, L)> for DirectedGraph<V, L> {
    fn from_iter<I: IntoIterator<Item = (V, V, L)>>(iter: I) -> Self {
        let mut g = Self::default();
        g.extend(iter);
        g
    }
}

impl<V: VertexLike, L: LabelLike> Extend<(V, V, L)> for DirectedGraph<V, L> {
    fn extend<I: IntoIterator<Item = (V, V, L)>>(&mut self, iter: I) {
        for (s, t, l) in iter {
            self.add_edge(s, t, l);
        }
    }
}

type NeighborIter<'a, V, L> =
    std::iter::Map<std::slice::Iter<'a, (V, L)>, fn(&'a (V, L)) -> V>;

fn neighbor_of<V: Clone, L>((v, _): &(V, L)) -> V {
    v.clone()
}

impl<V: VertexLike, L: LabelLike> GraphLike for DirectedGraph<V, L> {
    type Vertex = V;
    type Vertices<'a>
        = std::iter::Cloned<indexmap::set::Iter<'a, V>>
    where
        Self: 'a;
    type Sources<'a>
        = NeighborIter<'a, V, L>
    where
        Self: 'a;
    type Targets<'a>
        = NeighborIter<'a, V, L>
    where
        Self: 'a;

    fn vertices(&self) -> Self::Vertices<'_> {
        self.vertices.iter().cloned()
    }

    fn source_vertices(&self, v: &V) -> Self::Sources<'_> {
        let f: fn(&(V, L)) -> V = neighbor_of::<V, L>;
        self.backward.get(v).iter().map(f)
    }

    fn target_vertices(&self, v: &V) -> Self::Targets<'_> {
        let f: fn(&(V, L)) -> V = neighbor_of::<V, L>;
        self.forward.get(v).iter().map(f)
    }

    #[inline]
    fn edge_count(&self) -> usize {
        self.edge_count
    }

    #[inline]
    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }
}

/// Renders up to eight offending items for an error message.
fn examples<T: std::fmt::Debug>(items: &[T]) -> String {
    format!(
        "[{}] ({} total)",
        items
            .iter()
            .take(8)
            .format_with(", ", |x, f| f(&format_args!("{x:?}"))),
        items.len()
    )
}

impl<V: VertexLike, L: LabelLike> DebugInvariants for DirectedGraph<V, L> {
    fn debug_assert_invariants(&self) {
        if cfg!(debug_assertions) {
            if let Err(e) = self.validate_invariants() {
                panic!("[invariants] DirectedGraph: {e}");
            }
        }
    }

    /// Checks mirror symmetry (with labels and multiplicity), the edge
    /// counter, and endpoint registration.
    fn validate_invariants(&self) -> Result<(), GraphError> {
        let forward_len = self.forward.len();
        let backward_len = self.backward.len();
        if forward_len != self.edge_count || backward_len != self.edge_count {
            return Err(GraphError::EdgeCountMismatch {
                recorded: self.edge_count,
                actual: forward_len.max(backward_len),
            });
        }

        // Equal totals plus equal multiplicity of every forward instance in
        // the backward index means the two multisets are identical.
        let mut unmatched = Vec::new();
        for (s, t, l) in self.forward.iter() {
            let fwd = self
                .forward
                .get(s)
                .iter()
                .filter(|(t2, l2)| t2 == t && l2 == l)
                .count();
            let bwd = self
                .backward
                .get(t)
                .iter()
                .filter(|(s2, l2)| s2 == s && l2 == l)
                .count();
            if fwd != bwd {
                unmatched.push((s, t, l));
            }
        }
        if !unmatched.is_empty() {
            return Err(GraphError::MissingMirror(examples(&unmatched)));
        }

        let unregistered: Vec<&V> = self
            .forward
            .iter()
            .flat_map(|(s, t, _)| [s, t])
            .filter(|v| !self.vertices.contains(*v))
            .unique()
            .collect();
        if !unregistered.is_empty() {
            return Err(GraphError::UnregisteredEndpoint(examples(&unregistered)));
        }
        Ok(())
    }
}

#[cfg(test)]
mod graph_tests {
    use super::DirectedGraph;
    use crate::debug_invariants::DebugInvariants;

    #[test]
    fn parallel_edges_are_counted_separately() {
        let mut g = DirectedGraph::from_edges([(1, 2), (2, 3), (3, 4), (4, 1), (1, 2)]);
        assert_eq!(g.edge_count(), 5);
        assert!(g.has_edge(&1, &2, None));
        assert!(g.delete_edge(&1, &2, None));
        assert!(g.has_edge(&1, &2, None));
        assert!(g.delete_edge(&1, &2, None));
        assert!(!g.has_edge(&1, &2, None));
        assert!(!g.delete_edge(&1, &2, None));
        assert_eq!(g.edge_count(), 3);
        g.validate_invariants().unwrap();
    }

    #[test]
    fn vertices_keep_first_seen_order() {
        let mut g = DirectedGraph::<&str>::new();
        g.add_vertex("z");
        g.add_edge("b", "a", ());
        assert!(!g.add_vertex("b"));
        g.add_edge("z", "c", ());
        let order: Vec<_> = g.vertices().copied().collect();
        assert_eq!(order, vec!["z", "b", "a", "c"]);
        assert_eq!(g.vertex_count(), 4);
    }

    #[test]
    fn delete_vertex_removes_loops_and_parallels() {
        let mut g =
            DirectedGraph::from_edges([(1, 2), (2, 2), (2, 3), (3, 4), (4, 1), (1, 2), (2, 2)]);
        let removed = g.delete_vertex(&2);
        assert_eq!(removed, 5);
        assert_eq!(g.edge_count(), 2);
        assert!(!g.has_vertex(&2));
        assert!(!g.has_edge(&1, &2, None));
        assert!(!g.has_edge(&2, &2, None));
        assert!(g.has_edge(&3, &4, None));
        assert!(g.has_edge(&4, &1, None));
        assert!(g.target_vertices(&1).next().is_none());
        assert!(g.source_vertices(&3).next().is_none());
        g.validate_invariants().unwrap();
    }

    #[test]
    fn delete_unknown_vertex_is_noop() {
        let mut g = DirectedGraph::from_edges([(1, 2)]);
        assert_eq!(g.delete_vertex(&9), 0);
        assert_eq!(g.edge_count(), 1);
        assert_eq!(g.vertex_count(), 2);
    }

    #[test]
    fn unlabeled_delete_strikes_matching_label_mirror() {
        let mut g = DirectedGraph::from_labeled_edges([(1, 2, 'a'), (1, 2, 'b')]);
        assert!(g.delete_edge(&1, &2, None));
        let incoming: Vec<_> = g.incoming_edges(&2).map(|(s, l)| (*s, *l)).collect();
        assert_eq!(incoming, vec![(1, 'b')]);
        g.validate_invariants().unwrap();
    }

    #[test]
    fn labeled_delete_only_matches_label() {
        let mut g = DirectedGraph::from_labeled_edges([(1, 2, "x")]);
        assert!(!g.delete_edge(&1, &2, Some(&"y")));
        assert_eq!(g.edge_count(), 1);
        assert!(g.delete_edge(&1, &2, Some(&"x")));
        assert_eq!(g.edge_count(), 0);
        // vertices survive edge deletion
        assert_eq!(g.vertex_count(), 2);
    }

    #[test]
    fn edges_follow_registry_then_insertion_order() {
        let g = DirectedGraph::from_edges([(3, 1), (1, 2), (3, 2), (1, 3)]);
        let edges: Vec<_> = g.edges().map(|(s, t, _)| (*s, *t)).collect();
        assert_eq!(edges, vec![(3, 1), (3, 2), (1, 2), (1, 3)]);
    }

    #[test]
    fn validation_reports_counter_drift() {
        let mut g = DirectedGraph::from_edges([(1, 2)]);
        g.edge_count = 5;
        assert!(matches!(
            g.validate_invariants(),
            Err(crate::graph_error::GraphError::EdgeCountMismatch { recorded: 5, actual: 1 })
        ));
    }

    #[test]
    fn validation_reports_missing_mirror() {
        let mut g = DirectedGraph::from_edges([(1, 2)]);
        g.backward.delete_key(&2);
        g.backward.add(3, 1, ());
        let err = g.validate_invariants().unwrap_err();
        assert!(matches!(err, crate::graph_error::GraphError::MissingMirror(_)));
    }
}
