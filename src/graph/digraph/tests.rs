//! Tests for the digraph implementation.

use super::*;
use crate::graph::{heuristic, Decoration, VertexState};

fn uid(raw: i64) -> Uid {
    Uid::new(raw)
}

/// Builds a graph with vertices `1..=n` (payload = id) and the given edges.
fn graph_from(n: i64, edges: &[(i64, i64, f64)]) -> Digraph<i64> {
    let mut g = Digraph::new();
    for id in 1..=n {
        g.add_vertex(uid(id), id).unwrap();
    }
    for &(from, to, weight) in edges {
        g.add_edge(uid(from), uid(to), weight).unwrap();
    }
    g
}

fn unweighted(n: i64, edges: &[(i64, i64)]) -> Digraph<i64> {
    let weighted: Vec<_> = edges.iter().map(|&(a, b)| (a, b, 1.0)).collect();
    graph_from(n, &weighted)
}

fn ids(raw: &[i64]) -> Vec<Uid> {
    raw.iter().copied().map(uid).collect()
}

#[test]
fn test_add_vertex_rejects_duplicate() {
    let mut g = graph_from(2, &[]);
    assert_eq!(g.add_vertex(uid(1), 99).unwrap_err(), GraphError::DuplicateKey(uid(1)));
    assert_eq!(g.len(), 2);
    assert_eq!(*g.vertex(uid(1)).unwrap().value(), 1);
}

#[test]
fn test_add_edge_errors() {
    let mut g = unweighted(2, &[(1, 2)]);
    assert_eq!(
        g.add_edge(uid(1), uid(2), 5.0).unwrap_err(),
        GraphError::DuplicateEdge { from: uid(1), to: uid(2) }
    );
    assert_eq!(g.add_edge(uid(1), uid(7), 1.0).unwrap_err(), GraphError::MissingVertex(uid(7)));
    assert_eq!(g.add_edge(uid(7), uid(1), 1.0).unwrap_err(), GraphError::MissingVertex(uid(7)));
    assert_eq!(g.edge(uid(1), uid(2)).unwrap().weight(), 1.0);
}

#[test]
fn test_default_edge_weight_is_unset() {
    let mut g = graph_from(2, &[]);
    g.add_edge_default(uid(1), uid(2)).unwrap();
    let edge = g.edge(uid(1), uid(2)).unwrap();
    assert!(edge.is_unset());
    assert_eq!(edge.weight(), f64::MAX);
}

#[test]
fn test_degree_counters_follow_edges() {
    let mut g = unweighted(3, &[(1, 2), (1, 3), (2, 3)]);
    let d = |g: &Digraph<i64>, id| g.vertex(uid(id)).unwrap().decoration().clone();
    assert_eq!(d(&g, 1).out_degree(), 2);
    assert_eq!(d(&g, 3).in_degree(), 2);
    assert_eq!(g.vertex(uid(2)).unwrap().grade(), 2);

    assert!(g.remove_edge(uid(1), uid(3)).is_some());
    assert_eq!(d(&g, 1).out_degree(), 1);
    assert_eq!(d(&g, 3).in_degree(), 1);
    assert!(g.remove_edge(uid(1), uid(3)).is_none());
    assert!(g.validate_invariants());
}

#[test]
fn test_remove_edge_where_takes_first_match() {
    let mut g = graph_from(4, &[(1, 2, 5.0), (1, 3, 1.0), (1, 4, 1.0)]);
    let removed = g.remove_edge_where(uid(1), |e| e.weight() < 2.0).unwrap();
    assert_eq!(removed.target(), uid(3));
    assert_eq!(g.vertex(uid(1)).unwrap().edges().len(), 2);
    assert!(g.remove_edge_where(uid(1), |e| e.weight() > 10.0).is_none());
    assert!(g.validate_invariants());
}

#[test]
fn test_remove_vertex_clears_only_its_own_edges() {
    let mut g = unweighted(4, &[(1, 2), (2, 3), (3, 2), (4, 1)]);
    let removed = g.remove_vertex(uid(2)).unwrap();

    assert_eq!(g.len(), 3);
    assert!(removed.edges().is_empty());
    assert_eq!(removed.decoration().out_degree(), 0);
    assert_eq!(g.vertex(uid(3)).unwrap().decoration().in_degree(), 0);
    // 1 -> 2 and 3 -> 2 stay behind, dangling.
    assert!(g.edge(uid(1), uid(2)).is_some());
    assert!(g.edge(uid(3), uid(2)).is_some());
    assert_eq!(g.vertex(uid(4)).unwrap().edges().len(), 1);
    assert!(g.validate_invariants());

    assert!(g.remove_vertex(uid(2)).is_none());
}

#[test]
fn test_remove_vertex_where() {
    let mut g = graph_from(5, &[]);
    let removed = g.remove_vertex_where(|v| *v.value() % 2 == 0).unwrap();
    assert_eq!(removed.id(), uid(2));
    assert_eq!(g.len(), 4);
    assert!(g.remove_vertex_where(|v| *v.value() > 100).is_none());
}

#[test]
fn test_reinserted_vertex_recovers_dangling_in_degree() {
    let mut g = unweighted(3, &[(1, 2), (3, 2), (2, 2)]);
    let vertex = g.remove_vertex(uid(2)).unwrap();
    assert!(g.validate_invariants());

    g.insert_vertex(vertex).unwrap();
    assert_eq!(g.vertex(uid(2)).unwrap().decoration().in_degree(), 2);
    assert!(g.validate_invariants());
    assert_eq!(g.bfs_all(uid(1)).unwrap(), ids(&[1, 2]));
}

#[test]
fn test_prune_dangling_edges() {
    let mut g = unweighted(3, &[(1, 2), (3, 2), (1, 3)]);
    g.remove_vertex(uid(2));
    assert_eq!(g.prune_dangling_edges(), 2);
    assert_eq!(g.edge_count(), 1);
    assert_eq!(g.vertex(uid(1)).unwrap().decoration().out_degree(), 1);
    assert!(g.validate_invariants());
}

#[test]
fn test_lookups() {
    let g = graph_from(4, &[]);
    assert_eq!(g.find_vertex(|v| *v.value() > 2).unwrap().id(), uid(3));
    let odd: Vec<_> = g.vertices_where(|v| *v.value() % 2 == 1).iter().map(|v| v.id()).collect();
    assert_eq!(odd, ids(&[1, 3]));
    assert!(g.vertex(uid(9)).is_none());
    assert!(g.find_vertex(|_| false).is_none());
}

#[test]
fn test_reset_restores_defaults() {
    let mut g = unweighted(3, &[(1, 2), (2, 3)]);
    g.dfs();
    g.reset();
    for v in g.vertices() {
        assert_eq!(v.decoration().state(), VertexState::Unvisited);
        assert_eq!(v.decoration().distance(), Decoration::INFINITE);
        assert_eq!(v.decoration().ancestor(), None);
        assert_eq!(v.decoration().discovered(), 0);
    }
    assert_eq!(g.vertex(uid(2)).unwrap().decoration().grade(), 2);
}

#[test]
fn test_bfs_cycle_distances() {
    let mut g = unweighted(4, &[(1, 2), (2, 3), (3, 4), (4, 1)]);
    let distances = g.bfs_distances(uid(1)).unwrap();
    let expected: BTreeMap<Uid, u64> =
        [(uid(1), 0), (uid(2), 1), (uid(3), 2), (uid(4), 3)].into_iter().collect();
    assert_eq!(distances, expected);
    assert_eq!(g.vertex(uid(4)).unwrap().decoration().ancestor(), Some(uid(3)));
}

#[test]
fn test_bfs_predicate_in_visitation_order() {
    // 1 -> 2, 1 -> 3, 2 -> 4, 3 -> 5
    let mut g = unweighted(6, &[(1, 2), (1, 3), (2, 4), (3, 5)]);
    assert_eq!(g.bfs_all(uid(1)).unwrap(), ids(&[1, 2, 3, 4, 5]));
    assert_eq!(g.bfs(uid(1), |v| *v.value() >= 3).unwrap(), ids(&[3, 4, 5]));
    assert_eq!(g.vertex(uid(6)).unwrap().decoration().state(), VertexState::Unvisited);
    assert_eq!(g.bfs_all(uid(42)).unwrap_err(), GraphError::MissingVertex(uid(42)));
}

#[test]
fn test_bfs_skips_dangling_edges() {
    let mut g = unweighted(3, &[(1, 2), (2, 3)]);
    g.remove_vertex(uid(2));
    assert_eq!(g.bfs_all(uid(1)).unwrap(), ids(&[1]));
}

#[test]
fn test_shortest_path_bfs() {
    let mut g = unweighted(5, &[(1, 2), (2, 3), (3, 4), (1, 4), (4, 5)]);
    let path = g.shortest_path_bfs(uid(1), uid(5)).unwrap().unwrap();
    assert_eq!(path.vertices(), ids(&[5, 4, 1]).as_slice());
    assert_eq!(path.forward(), ids(&[1, 4, 5]));
    assert_eq!(path.cost(), 2.0);
    assert_eq!(path.hops(), 2);

    assert!(g.shortest_path_bfs(uid(5), uid(1)).unwrap().is_none());

    let trivial = g.shortest_path_bfs(uid(3), uid(3)).unwrap().unwrap();
    assert_eq!(trivial.vertices(), ids(&[3]).as_slice());
    assert_eq!(trivial.cost(), 0.0);
}

#[test]
fn test_dfs_timestamps_and_ancestors() {
    // 1 -> 2 -> 3, 1 -> 4
    let mut g = unweighted(4, &[(1, 2), (2, 3), (1, 4)]);
    g.dfs();
    let d = |id| g.vertex(uid(id)).unwrap().decoration().clone();

    assert_eq!((d(1).discovered(), d(1).closed()), (1, 8));
    assert_eq!((d(2).discovered(), d(2).closed()), (2, 5));
    assert_eq!((d(3).discovered(), d(3).closed()), (3, 4));
    assert_eq!((d(4).discovered(), d(4).closed()), (6, 7));
    assert_eq!(d(3).ancestor(), Some(uid(2)));
    assert_eq!(d(4).ancestor(), Some(uid(1)));
    assert_eq!(d(1).ancestor(), None);
    assert!(g.vertices().all(|v| v.decoration().state() == VertexState::Closed));
}

#[test]
fn test_is_acyclic() {
    let mut cyclic = unweighted(3, &[(1, 2), (2, 3), (3, 1)]);
    assert!(!cyclic.is_acyclic());
    assert!(!cyclic.last_dfs_acyclic());

    let mut chain = unweighted(3, &[(1, 2), (2, 3)]);
    assert!(chain.is_acyclic());

    // Cross edges into closed vertices are not cycles.
    let mut diamond = unweighted(4, &[(1, 2), (1, 3), (2, 4), (3, 4)]);
    assert!(diamond.is_acyclic());

    let mut self_loop = unweighted(1, &[(1, 1)]);
    assert!(!self_loop.is_acyclic());
}

#[test]
fn test_acyclic_flag_is_per_run() {
    let mut g = unweighted(2, &[(1, 2), (2, 1)]);
    assert!(!g.is_acyclic());
    g.remove_edge(uid(2), uid(1));
    assert!(g.is_acyclic());
}

#[test]
fn test_is_connected_counts_dfs_roots() {
    let mut chain = unweighted(3, &[(1, 2), (2, 3)]);
    assert!(chain.is_connected());

    let mut split = unweighted(4, &[(1, 2), (3, 4)]);
    assert!(!split.is_connected());

    // Reachable only backwards from the lowest id: approximate answer.
    let mut reversed = unweighted(2, &[(2, 1)]);
    assert!(!reversed.is_connected());

    let mut empty: Digraph<i64> = Digraph::new();
    assert!(empty.is_connected());
}

#[test]
fn test_dijkstra_prefers_cheaper_route() {
    // A=1, B=2, C=3, D=4
    let mut g = graph_from(4, &[(1, 2, 1.0), (2, 4, 4.0), (1, 3, 2.0), (3, 4, 1.0)]);
    let path = g.shortest_path_dijkstra(uid(1), uid(4)).unwrap().unwrap();
    assert_eq!(path.cost(), 3.0);
    assert_eq!(path.forward(), ids(&[1, 3, 4]));
    assert_eq!(g.vertex(uid(4)).unwrap().decoration().distance(), 3);
}

#[test]
fn test_dijkstra_unreachable_and_unset_weights() {
    let mut g = graph_from(3, &[(1, 2, 1.0)]);
    g.add_edge_default(uid(2), uid(3)).unwrap();
    assert!(g.shortest_path_dijkstra(uid(1), uid(3)).unwrap().is_none());
    assert!(g.shortest_path_dijkstra(uid(3), uid(1)).unwrap().is_none());
}

#[test]
fn test_dijkstra_rejects_bad_input() {
    let mut g = graph_from(2, &[(1, 2, -1.0)]);
    assert_eq!(
        g.shortest_path_dijkstra(uid(1), uid(2)).unwrap_err(),
        GraphError::InvalidWeight { from: uid(1), to: uid(2), weight: -1.0 }
    );
    assert_eq!(
        g.shortest_path_dijkstra(uid(1), uid(9)).unwrap_err(),
        GraphError::MissingVertex(uid(9))
    );
}

#[test]
fn test_a_star_matches_dijkstra() {
    // Line 1..=6 with a costly shortcut 1 -> 6.
    let mut g = graph_from(
        6,
        &[(1, 2, 1.0), (2, 3, 1.0), (3, 4, 1.0), (4, 5, 1.0), (5, 6, 1.0), (1, 6, 10.0)],
    );
    let a = g.a_star(uid(1), uid(6), heuristic::id_distance).unwrap().unwrap();
    let d = g.shortest_path_dijkstra(uid(1), uid(6)).unwrap().unwrap();
    assert_eq!(a.cost(), 5.0);
    assert_eq!(a, d);

    let zero = g.a_star(uid(1), uid(6), heuristic::zero).unwrap().unwrap();
    assert_eq!(zero.cost(), 5.0);
}

#[test]
fn test_weighted_a_star() {
    let mut g = graph_from(3, &[(1, 2, 1.0), (2, 3, 1.0), (1, 3, 3.0)]);
    let exact = g.weighted_a_star(uid(1), uid(3), heuristic::zero, 1.0).unwrap().unwrap();
    assert_eq!(exact.cost(), 2.0);

    assert_eq!(
        g.weighted_a_star(uid(1), uid(3), heuristic::zero, f64::NAN).unwrap_err().to_string(),
        "heuristic inflation factor NaN must be finite and >= 0"
    );
    assert!(g.weighted_a_star(uid(1), uid(3), heuristic::zero, -1.0).is_err());
}

#[test]
fn test_weighted_a_star_inflation_trades_cost_for_greed() {
    // 1 -> 2 -> 5 costs 4 but passes vertex 2, far from 5 by id;
    // 1 -> 4 -> 5 costs 5 but passes vertex 4, next to 5 by id.
    // `id_distance` is admissible here.
    let mut g = graph_from(5, &[(1, 2, 1.0), (2, 5, 3.0), (1, 4, 1.0), (4, 5, 4.0)]);

    let optimal = g.a_star(uid(1), uid(5), heuristic::id_distance).unwrap().unwrap();
    assert_eq!(optimal.forward(), ids(&[1, 2, 5]));
    assert_eq!(optimal.cost(), 4.0);

    let greedy = g
        .weighted_a_star(uid(1), uid(5), heuristic::id_distance, 3.0)
        .unwrap()
        .unwrap();
    assert_eq!(greedy.forward(), ids(&[1, 4, 5]));
    assert_eq!(greedy.cost(), 5.0);
    assert!(greedy.cost() <= 3.0 * optimal.cost());
}

#[test]
fn test_weighted_a_star_zero_epsilon_ignores_infinite_heuristic() {
    let mut g = graph_from(
        5,
        &[(1, 2, 1.0), (2, 5, 3.0), (1, 4, 1.0), (4, 5, 4.0), (1, 3, 2.0), (3, 5, 1.0)],
    );
    let odd_infinite = |v: &Vertex<i64>, _: &Vertex<i64>| {
        if v.id().get() % 2 == 1 {
            f64::INFINITY
        } else {
            0.0
        }
    };

    let dijkstra = g.shortest_path_dijkstra(uid(1), uid(5)).unwrap().unwrap();
    let relaxed = g
        .weighted_a_star(uid(1), uid(5), odd_infinite, 0.0)
        .unwrap()
        .unwrap();
    assert_eq!(relaxed, dijkstra);
    assert_eq!(relaxed.forward(), ids(&[1, 3, 5]));
    assert_eq!(relaxed.cost(), 3.0);
}

#[test]
fn test_nan_heuristic_leaves_vertex_unreached() {
    let mut g = graph_from(
        5,
        &[(1, 2, 1.0), (2, 5, 3.0), (1, 4, 1.0), (4, 5, 4.0), (1, 3, 2.0), (3, 5, 1.0)],
    );
    let nan_on_three = |v: &Vertex<i64>, _: &Vertex<i64>| {
        if v.id() == uid(3) {
            f64::NAN
        } else {
            0.0
        }
    };

    // Vertex 3 is skipped; the search still settles on the best other route.
    let path = g.a_star(uid(1), uid(5), nan_on_three).unwrap().unwrap();
    assert_eq!(path.forward(), ids(&[1, 2, 5]));
    assert_eq!(path.cost(), 4.0);
    assert_eq!(g.vertex(uid(3)).unwrap().decoration().state(), VertexState::Unvisited);
}

#[test]
fn test_transpose_reverses_edges() {
    let g = graph_from(3, &[(1, 2, 2.0), (2, 3, 3.0)]);
    let t = g.transpose();
    assert_eq!(t.len(), 3);
    assert_eq!(t.edge(uid(2), uid(1)).unwrap().weight(), 2.0);
    assert_eq!(t.edge(uid(3), uid(2)).unwrap().weight(), 3.0);
    assert!(t.edge(uid(1), uid(2)).is_none());
    assert_eq!(t.vertex(uid(1)).unwrap().decoration().in_degree(), 1);
    assert!(t.validate_invariants());

    let back = t.transpose();
    assert_eq!(back.edge(uid(1), uid(2)).unwrap().weight(), 2.0);
    assert_eq!(back.edge_count(), g.edge_count());
}

#[test]
fn test_topological_sort() {
    let g = unweighted(5, &[(1, 3), (2, 3), (3, 4), (5, 4)]);
    let order = g.topological_sort().unwrap();
    assert_eq!(order, ids(&[1, 2, 5, 3, 4]));

    let cyclic = unweighted(3, &[(1, 2), (2, 3), (3, 2)]);
    assert!(cyclic.topological_sort().is_none());

    let empty: Digraph<i64> = Digraph::new();
    assert_eq!(empty.topological_sort(), Some(Vec::new()));
}

#[test]
fn test_topological_sort_leaves_degrees_untouched() {
    let g = unweighted(3, &[(1, 2), (2, 3)]);
    g.topological_sort();
    assert_eq!(g.vertex(uid(3)).unwrap().decoration().in_degree(), 1);
}

#[test]
fn test_scc_two_disjoint_cycles() {
    let mut g = unweighted(4, &[(1, 2), (2, 1), (3, 4), (4, 3)]);
    let components = g.strongly_connected_components();
    assert_eq!(components.len(), 2);

    let mut members: Vec<Vec<Uid>> = components.iter().map(Digraph::vertex_ids).collect();
    members.sort();
    assert_eq!(members, vec![ids(&[1, 2]), ids(&[3, 4])]);
}

#[test]
fn test_scc_keeps_internal_transposed_edges() {
    // Cycle 1 -> 2 -> 3 -> 1 feeding 4.
    let mut g = unweighted(4, &[(1, 2), (2, 3), (3, 1), (3, 4)]);
    let components = g.strongly_connected_components();
    assert_eq!(components.len(), 2);

    let cycle = components.iter().find(|c| c.len() == 3).unwrap();
    assert!(cycle.edge(uid(2), uid(1)).is_some());
    assert!(cycle.edge(uid(1), uid(3)).is_some());
    assert_eq!(cycle.edge_count(), 3);

    let single = components.iter().find(|c| c.len() == 1).unwrap();
    assert_eq!(single.vertex_ids(), ids(&[4]));
    assert_eq!(single.edge_count(), 0);
}
