//! Async drivers for cycle detection, preorder and Tarjan SCC.

use super::source::AsyncGraphLike;
use crate::algs::cycle::{PathMarks, Reach};
use crate::algs::tarjan::{Frame, Link, TarjanCore};
use futures::stream::{self, BoxStream, Stream, StreamExt};
use hashbrown::HashSet;

/// Async [`has_cycle`](crate::algs::has_cycle).
pub async fn has_cycle_async<G>(graph: &G) -> bool
where
    G: AsyncGraphLike + ?Sized,
{
    let mut marks = PathMarks::new();
    let mut frames: Vec<(G::Vertex, BoxStream<'_, G::Vertex>)> = Vec::new();
    let mut roots = graph.vertices();

    while let Some(root) = roots.next().await {
        if marks.is_seen(&root) {
            continue;
        }
        let targets = graph.target_vertices(&root);
        marks.enter(root.clone());
        frames.push((root, targets));

        while let Some((v, targets)) = frames.last_mut() {
            match targets.next().await {
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

struct PreorderState<'a, G>
where
    G: AsyncGraphLike + ?Sized,
{
    graph: &'a G,
    roots: BoxStream<'a, G::Vertex>,
    stack: Vec<G::Vertex>,
    visited: HashSet<G::Vertex>,
}

impl<G> PreorderState<'_, G>
where
    G: AsyncGraphLike + ?Sized,
{
    async fn advance(&mut self) -> Option<G::Vertex> {
        let graph = self.graph;
        loop {
            let v = match self.stack.pop() {
                Some(v) => v,
                None => self.roots.next().await?,
            };
            if !self.visited.insert(v.clone()) {
                continue;
            }
            let mut targets = graph.target_vertices(&v);
            while let Some(w) = targets.next().await {
                if !self.visited.contains(&w) {
                    self.stack.push(w);
                }
            }
            return Some(v);
        }
    }
}

/// Async [`preorder`](crate::algs::preorder()); same visiting order.
pub fn preorder_async<G>(graph: &G) -> impl Stream<Item = G::Vertex> + '_
where
    G: AsyncGraphLike + ?Sized,
{
    let state = PreorderState {
        graph,
        roots: graph.vertices(),
        stack: Vec::new(),
        visited: HashSet::new(),
    };
    stream::unfold(state, |mut state| async move {
        let v = state.advance().await?;
        Some((v, state))
    })
}

struct SccState<'a, G>
where
    G: AsyncGraphLike + ?Sized,
{
    graph: &'a G,
    roots: BoxStream<'a, G::Vertex>,
    core: TarjanCore<G::Vertex>,
    frames: Vec<Frame<G::Vertex, BoxStream<'a, G::Vertex>>>,
}

impl<G> SccState<'_, G>
where
    G: AsyncGraphLike + ?Sized,
{
    async fn advance(&mut self) -> Option<Vec<G::Vertex>> {
        let graph = self.graph;
        loop {
            let Some(top) = self.frames.last_mut() else {
                let root = loop {
                    let v = self.roots.next().await?;
                    if !self.core.is_discovered(&v) {
                        break v;
                    }
                };
                let targets = graph.target_vertices(&root);
                self.frames.push(self.core.discover(root, targets));
                continue;
            };
            match top.neighbors.next().await {
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

/// Async [`strongly_connected_components`](crate::algs::strongly_connected_components);
/// same components in the same emission order.
pub fn strongly_connected_components_async<G>(
    graph: &G,
) -> impl Stream<Item = Vec<G::Vertex>> + '_
where
    G: AsyncGraphLike + ?Sized,
{
    let state = SccState {
        graph,
        roots: graph.vertices(),
        core: TarjanCore::new(),
        frames: Vec::new(),
    };
    stream::unfold(state, |mut state| async move {
        let component = state.advance().await?;
        Some((component, state))
    })
}

/// Async [`toposort`](crate::algs::toposort).
pub fn toposort_async<G>(graph: &G) -> impl Stream<Item = G::Vertex> + '_
where
    G: AsyncGraphLike + ?Sized,
{
    strongly_connected_components_async(graph).flat_map(stream::iter)
}
