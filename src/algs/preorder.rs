//! Depth-first preorder over every vertex of a graph.
//!
//! Stack-based: all forward neighbors of a vertex are pushed in enumeration
//! order and the most recently pushed is visited next, so siblings come out in
//! reverse of their enumeration order.

use crate::store::graph_like::GraphLike;
use hashbrown::HashSet;

/// Lazy preorder traversal. Created by [`preorder`].
///
/// Roots are taken from [`GraphLike::vertices`] in order, skipping vertices
/// already emitted, so isolated vertices and separate components are covered.
pub struct Preorder<'a, G>
where
    G: GraphLike + ?Sized + 'a,
{
    graph: &'a G,
    roots: G::Vertices<'a>,
    stack: Vec<G::Vertex>,
    visited: HashSet<G::Vertex>,
}

impl<'a, G> Preorder<'a, G>
where
    G: GraphLike + ?Sized + 'a,
{
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            roots: graph.vertices(),
            stack: Vec::new(),
            visited: HashSet::new(),
        }
    }
}

impl<'a, G> Iterator for Preorder<'a, G>
where
    G: GraphLike + ?Sized + 'a,
{
    type Item = G::Vertex;

    fn next(&mut self) -> Option<G::Vertex> {
        loop {
            let v = match self.stack.pop() {
                Some(v) => v,
                None => self.roots.next()?,
            };
            if !self.visited.insert(v.clone()) {
                continue;
            }
            let visited = &self.visited;
            self.stack.extend(
                self.graph
                    .target_vertices(&v)
                    .filter(|w| !visited.contains(w)),
            );
            return Some(v);
        }
    }
}

/// Preorder of all vertices of `graph`. Each call starts a fresh traversal.
///
/// # Example
/// ```rust
/// use hash_digraph::algs::preorder;
/// use hash_digraph::store::DirectedGraph;
/// let g = DirectedGraph::from_edges([(1, 2), (1, 3), (3, 4)]);
/// let order: Vec<_> = preorder(&g).collect();
/// assert_eq!(order, vec![1, 3, 4, 2]);
/// ```
pub fn preorder<G>(graph: &G) -> Preorder<'_, G>
where
    G: GraphLike + ?Sized,
{
    Preorder::new(graph)
}
