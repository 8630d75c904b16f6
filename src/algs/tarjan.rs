//! Strongly connected components (Tarjan) and the derived topological order.
//!
//! The depth-first search runs on an explicit frame stack, so deep graphs do
//! not exhaust the native call stack. Each frame holds the vertex, its
//! position in the neighbor sequence, and its partially computed low-link.
//!
//! Components are emitted in reverse topological order of the condensation:
//! when an edge `u -> v` joins two components, `v`'s component is emitted
//! first. Flattening the output therefore lists every vertex after all the
//! vertices it (transitively) points at.

use crate::store::bounds::VertexLike;
use crate::store::graph_like::GraphLike;
use hashbrown::HashMap;

#[derive(Clone, Copy, Debug)]
struct Slot {
    index: usize,
    on_stack: bool,
}

/// Classification of an edge `v -> w` during the search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Link {
    /// `w` is undiscovered: descend.
    Tree,
    /// `w` is on the component stack; carries its discovery index.
    Back(usize),
    /// `w` already belongs to an emitted component.
    Cross,
}

/// One suspended `strongconnect(v)` call.
pub(crate) struct Frame<V, N> {
    pub(crate) vertex: V,
    pub(crate) index: usize,
    pub(crate) lowlink: usize,
    pub(crate) neighbors: N,
}

/// Discovery index / on-stack bookkeeping shared by the sync and async drivers.
#[derive(Debug)]
pub(crate) struct TarjanCore<V> {
    slots: HashMap<V, Slot>,
    next_index: usize,
    stack: Vec<V>,
}

impl<V: VertexLike> TarjanCore<V> {
    pub(crate) fn new() -> Self {
        Self {
            slots: HashMap::new(),
            next_index: 0,
            stack: Vec::new(),
        }
    }

    #[inline]
    pub(crate) fn is_discovered(&self, v: &V) -> bool {
        self.slots.contains_key(v)
    }

    /// Assigns the next discovery index to `v`, pushes it on the component
    /// stack and opens its frame.
    pub(crate) fn discover<N>(&mut self, v: V, neighbors: N) -> Frame<V, N> {
        let index = self.next_index;
        self.next_index += 1;
        self.slots.insert(
            v.clone(),
            Slot {
                index,
                on_stack: true,
            },
        );
        self.stack.push(v.clone());
        Frame {
            vertex: v,
            index,
            lowlink: index,
            neighbors,
        }
    }

    #[inline]
    pub(crate) fn link(&self, w: &V) -> Link {
        match self.slots.get(w) {
            None => Link::Tree,
            Some(slot) if slot.on_stack => Link::Back(slot.index),
            Some(_) => Link::Cross,
        }
    }

    /// Closes a finished frame: folds its low-link into the parent, and if the
    /// vertex is a component root pops the component off the stack.
    pub(crate) fn finish<N>(
        &mut self,
        done: Frame<V, N>,
        parent: Option<&mut Frame<V, N>>,
    ) -> Option<Vec<V>> {
        if let Some(parent) = parent {
            parent.lowlink = parent.lowlink.min(done.lowlink);
        }
        if done.lowlink != done.index {
            return None;
        }
        let mut component = Vec::new();
        while let Some(w) = self.stack.pop() {
            if let Some(slot) = self.slots.get_mut(&w) {
                slot.on_stack = false;
            }
            let is_root = w == done.vertex;
            component.push(w);
            if is_root {
                break;
            }
        }
        log::trace!(
            "tarjan: emitting component of {} rooted at {:?}",
            component.len(),
            done.vertex
        );
        Some(component)
    }
}

/// Lazy SCC decomposition. Created by [`strongly_connected_components`].
pub struct StronglyConnectedComponents<'a, G>
where
    G: GraphLike + ?Sized + 'a,
{
    graph: &'a G,
    roots: G::Vertices<'a>,
    core: TarjanCore<G::Vertex>,
    frames: Vec<Frame<G::Vertex, G::Targets<'a>>>,
}

impl<'a, G> StronglyConnectedComponents<'a, G>
where
    G: GraphLike + ?Sized + 'a,
{
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            roots: graph.vertices(),
            core: TarjanCore::new(),
            frames: Vec::new(),
        }
    }
}

impl<'a, G> Iterator for StronglyConnectedComponents<'a, G>
where
    G: GraphLike + ?Sized + 'a,
{
    type Item = Vec<G::Vertex>;

    fn next(&mut self) -> Option<Self::Item> {
        let graph = self.graph;
        loop {
            let Some(top) = self.frames.last_mut() else {
                let core = &self.core;
                let root = self.roots.find(|v| !core.is_discovered(v))?;
                let targets = graph.target_vertices(&root);
                self.frames.push(self.core.discover(root, targets));
                continue;
            };
            match top.neighbors.next() {
                Some(w) => match self.core.link(&w) {
                    Link::Tree => {
                        let targets = graph.target_vertices(&w);
                        self.frames.push(self.core.discover(w, targets));
                    }
                    Link::Back(index) => top.lowlink = top.lowlink.min(index),
                    Link::Cross => {}
                },
                None => {
                    let Some(done) = self.frames.pop() else {
                        continue;
                    };
                    if let Some(component) = self.core.finish(done, self.frames.last_mut()) {
                        return Some(component);
                    }
                }
            }
        }
    }
}

/// Strongly connected components of `graph`, one `Vec` per component.
///
/// The components partition the vertex set. See the module docs for the
/// emission order.
///
/// # Example
/// ```rust
/// use hash_digraph::algs::strongly_connected_components;
/// use hash_digraph::store::DirectedGraph;
/// let g = DirectedGraph::from_edges([(1, 2), (2, 1), (2, 3)]);
/// let sccs: Vec<_> = strongly_connected_components(&g).collect();
/// assert_eq!(sccs, vec![vec![3], vec![2, 1]]);
/// ```
pub fn strongly_connected_components<G>(graph: &G) -> StronglyConnectedComponents<'_, G>
where
    G: GraphLike + ?Sized,
{
    StronglyConnectedComponents::new(graph)
}

/// Flattened SCC output: every vertex appears after the vertices it points at.
///
/// This is a true topological order (dependencies first) only when the graph
/// is acyclic; vertices of one cyclic component come out in stack-unwinding
/// order.
///
/// # Example
/// ```rust
/// use hash_digraph::algs::toposort;
/// use hash_digraph::store::DirectedGraph;
/// let g = DirectedGraph::from_edges([(1, 2), (3, 2), (4, 1), (4, 3)]);
/// assert_eq!(toposort(&g).collect::<Vec<_>>(), vec![2, 1, 3, 4]);
/// ```
pub fn toposort<G>(graph: &G) -> impl Iterator<Item = G::Vertex> + '_
where
    G: GraphLike + ?Sized,
{
    strongly_connected_components(graph).flatten()
}
