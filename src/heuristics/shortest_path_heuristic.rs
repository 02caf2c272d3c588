use super::Heuristic;
use crate::{
    graphs::{adjacency_list_graph::AdjacencyListGraph, Cost, CostPair, Vertex, MAX_COST},
    queue::{radix_queue::RadixQueue, DijkstraQueueElement},
};

/// Default scaling applied to every estimate. Values below 1.0 deliberately
/// weaken the bound to speed up the search; 1.0 keeps it admissible.
pub const DEFAULT_RELAXATION_FACTOR: f64 = 0.9;

/// Exact per-criterion shortest-path costs from every vertex to a fixed
/// target, precomputed over the inverted graph and scaled by a relaxation
/// factor at lookup time.
///
/// One instance serves any number of searches against its target; lookups
/// are read-only and thread-safe.
pub struct ShortestPathHeuristic {
    lower_bounds: Vec<CostPair>,
    relaxation_factor: f64,
}

impl ShortestPathHeuristic {
    pub fn new(target: Vertex, inverted_graph: &AdjacencyListGraph) -> ShortestPathHeuristic {
        Self::with_relaxation_factor(target, inverted_graph, DEFAULT_RELAXATION_FACTOR)
    }

    pub fn with_relaxation_factor(
        target: Vertex,
        inverted_graph: &AdjacencyListGraph,
        relaxation_factor: f64,
    ) -> ShortestPathHeuristic {
        // The two runs share no state, one per criterion.
        let (first, second) = rayon::join(
            || Self::compute(inverted_graph, target, 0),
            || Self::compute(inverted_graph, target, 1),
        );

        let lower_bounds = first
            .into_iter()
            .zip(second)
            .map(|(first_cost, second_cost)| [first_cost, second_cost])
            .collect();

        ShortestPathHeuristic {
            lower_bounds,
            relaxation_factor,
        }
    }

    pub fn relaxation_factor(&self) -> f64 {
        self.relaxation_factor
    }

    /// Single-source Dijkstra over the inverted graph weighted by one cost
    /// component. Unreached vertices keep the `MAX_COST` sentinel.
    fn compute(
        inverted_graph: &AdjacencyListGraph,
        target: Vertex,
        cost_index: usize,
    ) -> Vec<Cost> {
        let mut costs = vec![MAX_COST; inverted_graph.number_of_vertices()];
        if (target as usize) >= costs.len() {
            return costs;
        }

        let mut queue = RadixQueue::new();
        costs[target as usize] = 0;
        queue.push(DijkstraQueueElement::new(0, target));

        while let Some(element) = queue.pop() {
            if element.cost > costs[element.vertex as usize] {
                // A cheaper entry for this vertex was already popped.
                continue;
            }

            for edge in inverted_graph.out_edges(element.vertex) {
                let tentative = element.cost.saturating_add(edge.cost[cost_index]);
                if tentative < costs[edge.head as usize] {
                    costs[edge.head as usize] = tentative;
                    queue.push(DijkstraQueueElement::new(tentative, edge.head));
                }
            }
        }

        costs
    }
}

impl Heuristic for ShortestPathHeuristic {
    fn estimate(&self, vertex: Vertex) -> CostPair {
        let exact = self
            .lower_bounds
            .get(vertex as usize)
            .copied()
            .unwrap_or([MAX_COST, MAX_COST]);

        // The sentinel must stay "never better"; scaling it would turn an
        // unreachable vertex into one with a huge finite estimate.
        exact.map(|cost| {
            if cost == MAX_COST {
                MAX_COST
            } else {
                (self.relaxation_factor * cost as f64) as Cost
            }
        })
    }
}
