use hash_digraph::prelude::*;
use proptest::prelude::*;
use std::collections::HashMap;

#[derive(Clone, Debug)]
enum Op {
    AddVertex(u8),
    AddEdge(u8, u8, bool),
    DeleteEdge(u8, u8, Option<bool>),
    DeleteVertex(u8),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0u8..12).prop_map(Op::AddVertex),
        (0u8..12, 0u8..12, any::<bool>()).prop_map(|(a, b, l)| Op::AddEdge(a, b, l)),
        (0u8..12, 0u8..12, proptest::option::of(any::<bool>()))
            .prop_map(|(a, b, l)| Op::DeleteEdge(a, b, l)),
        (0u8..12).prop_map(Op::DeleteVertex),
    ]
}

fn apply(g: &mut DirectedGraph<u8, bool>, op: &Op) {
    match *op {
        Op::AddVertex(v) => {
            g.add_vertex(v);
        }
        Op::AddEdge(a, b, l) => g.add_edge(a, b, l),
        Op::DeleteEdge(a, b, l) => {
            g.delete_edge(&a, &b, l.as_ref());
        }
        Op::DeleteVertex(v) => {
            g.delete_vertex(&v);
        }
    }
}

fn dag_edges() -> impl Strategy<Value = Vec<(u16, u16)>> {
    proptest::collection::vec((0u16..40, 0u16..40), 0..120).prop_map(|pairs| {
        pairs
            .into_iter()
            .filter(|(a, b)| a != b)
            .map(|(a, b)| (a.max(b), a.min(b)))
            .collect()
    })
}

fn any_edges() -> impl Strategy<Value = Vec<(u16, u16)>> {
    proptest::collection::vec((0u16..30, 0u16..30), 0..90)
}

proptest! {
    #[test]
    fn mutations_keep_indices_consistent(ops in proptest::collection::vec(op(), 0..80)) {
        let mut g = DirectedGraph::new();
        for op in &ops {
            apply(&mut g, op);
            prop_assert!(g.validate_invariants().is_ok());
            prop_assert_eq!(g.edge_count(), g.edges().count());
            for (s, t, _) in g.edges() {
                prop_assert!(g.has_vertex(s) && g.has_vertex(t));
            }
        }
    }

    #[test]
    fn delete_vertex_leaves_no_trace(edges in any_edges(), victim in 0u16..30) {
        let mut g = DirectedGraph::from_edges(edges.iter().copied());
        let before = g.edge_count();
        let incident = edges.iter().filter(|(s, t)| *s == victim || *t == victim).count();
        prop_assert_eq!(g.delete_vertex(&victim), incident);
        prop_assert_eq!(g.edge_count(), before - incident);
        prop_assert!(!g.has_vertex(&victim));
        prop_assert!(g.edges().all(|(s, t, _)| *s != victim && *t != victim));
        prop_assert!(g.validate_invariants().is_ok());
    }

    #[test]
    fn components_partition_the_vertices(edges in any_edges()) {
        let g = DirectedGraph::from_edges(edges);
        let sccs: Vec<_> = strongly_connected_components(&g).collect();
        let mut owner = HashMap::new();
        for (i, scc) in sccs.iter().enumerate() {
            prop_assert!(!scc.is_empty());
            for v in scc {
                prop_assert!(owner.insert(*v, i).is_none(), "{} in two components", v);
            }
        }
        prop_assert_eq!(owner.len(), g.vertex_count());
        for (s, t, _) in g.edges() {
            prop_assert!(owner[t] <= owner[s]);
        }
        prop_assert_eq!(has_cycle(&g), sccs.len() < g.vertex_count() || g.edges().any(|(s, t, _)| s == t));
    }

    #[test]
    fn toposort_orders_random_dags(edges in dag_edges()) {
        let g = DirectedGraph::from_edges(edges);
        prop_assert!(!has_cycle(&g));
        let order: Vec<_> = toposort(&g).collect();
        prop_assert_eq!(order.len(), g.vertex_count());
        let pos: HashMap<_, _> = order.iter().enumerate().map(|(i, v)| (*v, i)).collect();
        for (s, t, _) in g.edges() {
            prop_assert!(pos[t] < pos[s]);
        }
    }

    #[test]
    fn schedule_runs_targets_before_sources(edges in dag_edges()) {
        let g = DirectedGraph::from_edges(edges);
        let batches: Vec<_> = schedule(&g).unwrap().collect();
        let mut last = HashMap::new();
        for (i, batch) in batches.iter().enumerate() {
            for v in batch {
                last.insert(*v, i);
            }
        }
        prop_assert_eq!(last.len(), g.vertex_count());
        for (s, t, _) in g.edges() {
            prop_assert!(last[t] < last[s]);
        }
    }

    #[test]
    fn preorder_visits_each_vertex_once(edges in any_edges()) {
        let g = DirectedGraph::from_edges(edges);
        let mut order: Vec<_> = preorder(&g).collect();
        prop_assert_eq!(order.len(), g.vertex_count());
        order.sort_unstable();
        order.dedup();
        prop_assert_eq!(order.len(), g.vertex_count());
    }
}
