use petgraph::algo::connected_components;
use petgraph::graph::UnGraph;
use proptest::prelude::*;
use satcolor::Graph;

/// Symmetric adjacency entries over `0..n` without self-links or repeated neighbors.
fn symmetric_entries(n: usize, edges: &[(usize, usize)]) -> Vec<(usize, Vec<usize>)> {
    let mut adjacency = vec![Vec::new(); n];
    for &(a, b) in edges {
        let (u, v) = (a % n, b % n);
        if u == v || adjacency[u].contains(&v) {
            continue;
        }
        adjacency[u].push(v);
        adjacency[v].push(u);
    }
    adjacency.into_iter().enumerate().collect()
}

fn component_count(entries: &[(usize, Vec<usize>)]) -> usize {
    let mut oracle = UnGraph::<(), ()>::default();
    let nodes: Vec<_> = entries.iter().map(|_| oracle.add_node(())).collect();
    for (u, nbrs) in entries {
        for &v in nbrs {
            if *u < v {
                oracle.add_edge(nodes[*u], nodes[v], ());
            }
        }
    }
    connected_components(&oracle)
}

fn graph_input() -> impl Strategy<Value = Vec<(usize, Vec<usize>)>> {
    (1usize..40).prop_flat_map(|n| {
        proptest::collection::vec((0..n, 0..n), 0..120).prop_map(move |edges| symmetric_entries(n, &edges))
    })
}

proptest! {
    #[test]
    fn coloring_is_proper(entries in graph_input()) {
        let mut graph = Graph::from_adjacency(entries).unwrap();
        graph.colorize().unwrap();
        prop_assert!(graph.is_proper());

        graph.colorize_all_components().unwrap();
        prop_assert!(graph.is_proper());
        prop_assert_eq!(graph.uncolored_count(), 0);
    }

    #[test]
    fn colors_are_locally_minimal_in_assignment_order(entries in graph_input()) {
        let mut graph = Graph::from_adjacency(entries.clone()).unwrap();
        graph.colorize_all_components().unwrap();

        let mut replay: Vec<Option<usize>> = vec![None; entries.len()];
        for &v in graph.coloring_order() {
            let taken: Vec<usize> = entries[v].1.iter().filter_map(|&n| replay[n]).collect();
            let expected = (0..).find(|c| !taken.contains(c)).unwrap();
            prop_assert_eq!(graph.color_of(&v), Some(expected));
            replay[v] = Some(expected);
        }
    }

    #[test]
    fn coloring_is_deterministic(entries in graph_input()) {
        let mut first = Graph::from_adjacency(entries.clone()).unwrap();
        let mut second = Graph::from_adjacency(entries).unwrap();
        first.colorize().unwrap();
        second.colorize().unwrap();

        let a: Vec<_> = first.colors().collect();
        let b: Vec<_> = second.colors().collect();
        prop_assert_eq!(a, b);
        prop_assert!(first.coloring_order().eq(second.coloring_order()));
    }

    #[test]
    fn connected_graphs_are_fully_colored(entries in graph_input()) {
        let components = component_count(&entries);
        let mut graph = Graph::from_adjacency(entries).unwrap();
        graph.colorize().unwrap();

        if components == 1 {
            prop_assert_eq!(graph.uncolored_count(), 0);
        } else {
            prop_assert!(graph.uncolored_count() > 0);
        }
    }

    #[test]
    fn one_seed_per_component(entries in graph_input()) {
        let components = component_count(&entries);
        let mut graph = Graph::from_adjacency(entries).unwrap();
        prop_assert_eq!(graph.colorize_all_components().unwrap(), components);
    }

    #[test]
    fn colors_stay_below_max_degree_plus_one(entries in graph_input()) {
        let max_degree = entries.iter().map(|(_, nbrs)| nbrs.len()).max().unwrap_or(0);
        let mut graph = Graph::from_adjacency(entries).unwrap();
        graph.colorize_all_components().unwrap();
        prop_assert!(graph.color_count() <= max_degree + 1);
    }
}
