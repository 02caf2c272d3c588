use pareto_paths::{
    bi_criteria::{boa_star::BOAStar, ordering::QueueOrdering},
    graphs::{adjacency_list_graph::AdjacencyListGraph, BiWeightedEdge},
    heuristics::{shortest_path_heuristic::ShortestPathHeuristic, ZeroHeuristic},
};

fn build(
    number_of_vertices: usize,
    edges: &[(u32, u32, [u32; 2])],
) -> (AdjacencyListGraph, AdjacencyListGraph) {
    let edges = edges
        .iter()
        .map(|&(tail, head, cost)| BiWeightedEdge::new(tail, head, cost))
        .collect::<Vec<_>>();
    (
        AdjacencyListGraph::new(number_of_vertices, &edges),
        AdjacencyListGraph::inverted(number_of_vertices, &edges),
    )
}

#[test]
fn chain_query_returns_the_single_pareto_path() {
    let (graph, inverted_graph) = build(4, &[(1, 2, [1, 5]), (2, 3, [2, 1])]);
    let heuristic = ShortestPathHeuristic::with_relaxation_factor(3, &inverted_graph, 1.0);

    let boa_star = BOAStar::new(&graph, [0.0, 0.0], [100, 100], QueueOrdering::Lexicographic);
    let outcome = boa_star.search(1, 3, &heuristic);

    assert_eq!(outcome.solutions.len(), 1);
    assert_eq!(outcome.solutions[0].g, [3, 6]);
    assert_eq!(outcome.solutions[0].path(), vec![1, 2, 3]);
    assert_eq!(outcome.expanded, 2);
    assert_eq!(outcome.generated, 3);
}

#[test]
fn unreachable_target_returns_no_solutions() {
    // Vertex 2 exists but no edge reaches it.
    let (graph, inverted_graph) = build(3, &[(0, 1, [1, 1])]);
    let heuristic = ShortestPathHeuristic::with_relaxation_factor(2, &inverted_graph, 1.0);

    let boa_star = BOAStar::new(&graph, [0.0, 0.0], [100, 100], QueueOrdering::Lexicographic);
    let outcome = boa_star.search(0, 2, &heuristic);

    // The sentinel estimate already prunes the root when it is popped.
    assert!(outcome.solutions.is_empty());
    assert_eq!(outcome.expanded, 0);
    assert_eq!(outcome.generated, 1);
}

#[test]
fn duplicate_parallel_edges_are_generated_separately() {
    let (graph, _) = build(2, &[(0, 1, [4, 4]), (0, 1, [4, 4])]);

    let boa_star = BOAStar::new(&graph, [0.0, 0.0], [100, 100], QueueOrdering::Lexicographic);
    let outcome = boa_star.search(0, 1, &ZeroHeuristic {});

    // Both copies pass the generation checks, only one settles on the target.
    assert_eq!(outcome.solutions.len(), 1);
    assert_eq!(outcome.solutions[0].g, [4, 4]);
    assert_eq!(outcome.expanded, 1);
    assert_eq!(outcome.generated, 3);
}

#[test]
fn epsilon_accepts_a_bounded_detour_in_the_second_criterion() {
    // Direct edge [3, 12] against a two-hop path totalling [5, 10]. The first
    // criterion decides under the lexicographic order, and 12 stays within a
    // factor 1.5 of the alternative's 10.
    let (graph, _) = build(3, &[(0, 2, [3, 12]), (0, 1, [1, 5]), (1, 2, [4, 5])]);

    let boa_star = BOAStar::new(&graph, [0.5, 0.5], [100, 100], QueueOrdering::Lexicographic);
    let outcome = boa_star.search(0, 2, &ZeroHeuristic {});

    assert_eq!(outcome.solutions.len(), 1);
    assert_eq!(outcome.solutions[0].g, [3, 12]);
    assert!(outcome.solutions[0].g[1] as f64 <= 1.5 * 10.0);
}

#[test]
fn settled_second_criterion_cost_prunes_later_arrivals() {
    // Two routes into the middle vertex 3. The cheaper one settles first, so
    // the arrival over vertex 2 is dropped at generation time.
    let (graph, _) = build(
        5,
        &[
            (0, 1, [1, 1]),
            (1, 3, [1, 1]),
            (0, 2, [3, 3]),
            (2, 3, [1, 1]),
            (3, 4, [10, 10]),
        ],
    );

    let boa_star = BOAStar::new(&graph, [0.0, 0.0], [100, 100], QueueOrdering::Lexicographic);
    let outcome = boa_star.search(0, 4, &ZeroHeuristic {});

    assert_eq!(outcome.solutions.len(), 1);
    assert_eq!(outcome.solutions[0].g, [12, 12]);
    assert_eq!(outcome.solutions[0].path(), vec![0, 1, 3, 4]);
    assert_eq!(outcome.expanded, 4);
    assert_eq!(outcome.generated, 5);
}

#[test]
fn labels_beyond_the_bounds_are_never_generated() {
    // The direct edge busts the first-criterion bound, the detour stays in.
    let (graph, _) = build(3, &[(0, 1, [10, 1]), (0, 2, [1, 1]), (2, 1, [1, 1])]);

    let boa_star = BOAStar::new(&graph, [0.0, 0.0], [5, 5], QueueOrdering::Lexicographic);
    let outcome = boa_star.search(0, 1, &ZeroHeuristic {});

    assert_eq!(outcome.solutions.len(), 1);
    assert_eq!(outcome.solutions[0].g, [2, 2]);
    assert_eq!(outcome.solutions[0].path(), vec![0, 2, 1]);
    assert_eq!(outcome.expanded, 2);
    assert_eq!(outcome.generated, 3);
}

#[test]
fn bound_below_the_source_estimate_drains_to_empty() {
    let (graph, inverted_graph) = build(2, &[(0, 1, [5, 5])]);
    let heuristic = ShortestPathHeuristic::with_relaxation_factor(1, &inverted_graph, 1.0);

    let boa_star = BOAStar::new(&graph, [0.0, 0.0], [3, 3], QueueOrdering::Lexicographic);
    let outcome = boa_star.search(0, 1, &heuristic);

    assert!(outcome.solutions.is_empty());
    assert_eq!(outcome.expanded, 1);
    assert_eq!(outcome.generated, 1);
}

#[test]
fn lexicographic_order_returns_the_cheapest_first_criterion() {
    // Three pareto-incomparable routes; [2, 18] wins the first criterion.
    let (graph, inverted_graph) = build(
        4,
        &[
            (0, 1, [1, 9]),
            (1, 3, [1, 9]),
            (0, 2, [5, 1]),
            (2, 3, [5, 1]),
            (0, 3, [9, 9]),
        ],
    );
    let heuristic = ShortestPathHeuristic::with_relaxation_factor(3, &inverted_graph, 1.0);

    let boa_star = BOAStar::new(&graph, [0.0, 0.0], [100, 100], QueueOrdering::Lexicographic);
    let outcome = boa_star.search(0, 3, &heuristic);

    assert_eq!(outcome.solutions.len(), 1);
    assert_eq!(outcome.solutions[0].g, [2, 18]);
    assert_eq!(outcome.solutions[0].path(), vec![0, 1, 3]);
}

#[test]
fn source_equal_to_target_yields_the_empty_path() {
    let (graph, _) = build(3, &[(0, 1, [1, 1]), (1, 2, [1, 1])]);

    let boa_star = BOAStar::new(&graph, [0.0, 0.0], [100, 100], QueueOrdering::Lexicographic);
    let outcome = boa_star.search(1, 1, &ZeroHeuristic {});

    assert_eq!(outcome.solutions.len(), 1);
    assert_eq!(outcome.solutions[0].g, [0, 0]);
    assert_eq!(outcome.solutions[0].path(), vec![1]);
    assert_eq!(outcome.expanded, 0);
    assert_eq!(outcome.generated, 1);
}

#[test]
fn ratio_ordering_finds_the_only_path_too() {
    let (graph, _) = build(4, &[(1, 2, [1, 5]), (2, 3, [2, 1])]);

    let boa_star = BOAStar::new(&graph, [0.0, 0.0], [100, 100], QueueOrdering::RatioMax);
    let outcome = boa_star.search(1, 3, &ZeroHeuristic {});

    assert_eq!(outcome.solutions.len(), 1);
    assert_eq!(outcome.solutions[0].g, [3, 6]);
    assert_eq!(outcome.solutions[0].path(), vec![1, 2, 3]);
}

#[test]
fn relaxed_heuristic_returns_the_same_solution() {
    let (graph, inverted_graph) = build(4, &[(1, 2, [1, 5]), (2, 3, [2, 1])]);
    let exact = ShortestPathHeuristic::with_relaxation_factor(3, &inverted_graph, 1.0);
    let relaxed = ShortestPathHeuristic::new(3, &inverted_graph);

    let boa_star = BOAStar::new(&graph, [0.0, 0.0], [100, 100], QueueOrdering::Lexicographic);
    let exact_outcome = boa_star.search(1, 3, &exact);
    let relaxed_outcome = boa_star.search(1, 3, &relaxed);

    assert_eq!(exact_outcome.solutions[0].g, relaxed_outcome.solutions[0].g);
    assert_eq!(exact_outcome.solutions[0].path(), relaxed_outcome.solutions[0].path());
}

#[test]
fn solution_costs_match_the_path_edges() {
    let (graph, inverted_graph) = build(
        5,
        &[
            (0, 1, [1, 8]),
            (1, 3, [2, 4]),
            (0, 2, [3, 3]),
            (2, 3, [1, 1]),
            (3, 4, [10, 2]),
        ],
    );
    let heuristic = ShortestPathHeuristic::with_relaxation_factor(4, &inverted_graph, 1.0);

    let boa_star = BOAStar::new(&graph, [0.0, 0.0], [100, 100], QueueOrdering::Lexicographic);
    let outcome = boa_star.search(0, 4, &heuristic);

    // Re-walk the returned path and sum the edge costs per criterion.
    let path = outcome.solutions[0].path();
    let mut total = [0u32, 0];
    for hop in path.windows(2) {
        let edge = graph
            .out_edges(hop[0])
            .iter()
            .find(|edge| edge.head == hop[1])
            .unwrap();
        total[0] += edge.cost[0];
        total[1] += edge.cost[1];
    }
    assert_eq!(total, outcome.solutions[0].g);
}

#[test]
fn out_of_range_endpoints_return_empty() {
    let (graph, _) = build(2, &[(0, 1, [1, 1])]);

    let boa_star = BOAStar::new(&graph, [0.0, 0.0], [100, 100], QueueOrdering::Lexicographic);
    let outcome = boa_star.search(0, 7, &ZeroHeuristic {});

    assert!(outcome.solutions.is_empty());
    assert_eq!(outcome.expanded, 0);
    assert_eq!(outcome.generated, 0);
}
