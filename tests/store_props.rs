//! Property tests for the graph store invariants.

use std::collections::HashSet;

use proptest::prelude::*;

use quiver::digraph::Digraph;
use quiver::ungraph::Ungraph;
use quiver::vertex::VertexId;

const VERTICES: usize = 6;

fn arb_edges() -> impl Strategy<Value = Vec<(usize, usize)>> {
    prop::collection::vec((0..VERTICES, 0..VERTICES), 0..40)
}

fn digraph_with(edges: &[(usize, usize)]) -> (Digraph, Vec<VertexId>) {
    let mut graph = Digraph::new();
    let ids: Vec<_> = (0..VERTICES)
        .map(|i| graph.insert_vertex(format!("v{i}")))
        .collect();
    for &(a, b) in edges {
        graph.insert_arc(ids[a], ids[b]);
    }
    (graph, ids)
}

proptest! {
    #[test]
    fn undirected_arc_count_matches_distinct_pairs(edges in arb_edges()) {
        let mut graph = Ungraph::new();
        let ids: Vec<_> = (0..VERTICES)
            .map(|i| graph.insert_vertex(format!("v{i}")))
            .collect();

        let mut fresh = HashSet::new();
        for &(a, b) in &edges {
            graph.insert_arc(ids[a], ids[b]);
            let pair = if a <= b { (a, b) } else { (b, a) };
            fresh.insert(pair);
        }

        prop_assert_eq!(graph.arc_count(), fresh.len());

        // Symmetry: u in adjacency(v) exactly as often as v in adjacency(u).
        for &u in &ids {
            for &v in &ids {
                let forward = graph.adjacent(u).filter(|&n| n == v).count();
                let backward = graph.adjacent(v).filter(|&n| n == u).count();
                prop_assert_eq!(forward, backward);
            }
        }
    }

    #[test]
    fn directed_degrees_match_adjacency(edges in arb_edges()) {
        let (graph, ids) = digraph_with(&edges);

        prop_assert_eq!(graph.arc_count(), edges.len());
        prop_assert_eq!(graph.total_out_degree(), edges.len());
        prop_assert_eq!(graph.total_in_degree(), edges.len());

        for &v in &ids {
            prop_assert_eq!(graph.in_degree(v), graph.in_adjacent(v).count());
            prop_assert_eq!(graph.out_degree(v), graph.out_adjacent(v).count());
        }
    }

    #[test]
    fn reverse_twice_restores_adjacency(
        edges in arb_edges(),
        pick in any::<prop::sample::Index>(),
    ) {
        prop_assume!(!edges.is_empty());

        let (mut graph, ids) = digraph_with(&edges);
        let arc = graph.arc_ids().nth(pick.index(edges.len())).unwrap();

        // Parallel arcs make the per-list order unobservable, so adjacency
        // is compared as sorted multisets.
        let snapshot = |graph: &Digraph| -> Vec<(Vec<VertexId>, Vec<VertexId>)> {
            ids.iter()
                .map(|&v| {
                    let mut out: Vec<VertexId> = graph.out_adjacent(v).collect();
                    let mut inn: Vec<VertexId> = graph.in_adjacent(v).collect();
                    out.sort();
                    inn.sort();
                    (out, inn)
                })
                .collect()
        };

        let before = snapshot(&graph);

        graph.reverse_direction(arc);
        graph.reverse_direction(arc);

        prop_assert_eq!(snapshot(&graph), before);
    }

    #[test]
    fn removal_preserves_index_consistency(
        edges in arb_edges(),
        victim in 0..VERTICES,
    ) {
        let (mut graph, ids) = digraph_with(&edges);

        graph.remove_vertex(ids[victim]);

        let victim_name = format!("v{victim}");
        prop_assert!(graph.vertex_id(&victim_name).is_none());
        prop_assert_eq!(graph.vertex_count(), VERTICES - 1);

        let mut arcs_seen = 0;
        for &v in &ids {
            prop_assert_eq!(graph.in_degree(v), graph.in_adjacent(v).count());
            prop_assert_eq!(graph.out_degree(v), graph.out_adjacent(v).count());
            prop_assert!(graph.out_adjacent(v).all(|n| n != ids[victim]));
            arcs_seen += graph.out_degree(v);
        }
        prop_assert_eq!(arcs_seen, graph.arc_count());
    }
}
