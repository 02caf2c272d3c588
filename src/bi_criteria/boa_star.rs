use std::{collections::BinaryHeap, sync::Arc};

use crate::{
    graphs::{adjacency_list_graph::AdjacencyListGraph, Cost, CostPair, Vertex, MAX_COST},
    heuristics::Heuristic,
    logging::{NoOpLogger, SearchFinishRecord, SearchLogger, SearchStartRecord, SolutionRecord},
};

use super::{
    label::Label,
    ordering::{OpenEntry, QueueOrdering},
    EpsPair, SolutionSet,
};

/// Bi-criteria label-setting search over a graph with two cost components per
/// edge.
///
/// Labels are expanded in the order the configured [`QueueOrdering`] dictates
/// and pruned against the best settled second-criterion cost, both at their
/// own vertex and, relaxed by `eps[1]`, at the target. Any label whose
/// estimated total exceeds `bounds` in either criterion is discarded. The
/// search stops at the first label that settles on the target, so it returns
/// at most one solution per call.
pub struct BOAStar<'a> {
    graph: &'a AdjacencyListGraph,
    eps: EpsPair,
    bounds: CostPair,
    ordering: QueueOrdering,
}

/// Result of one search call: the surviving target labels plus the number of
/// labels taken from and pushed to the open queue.
#[derive(Debug)]
pub struct SearchOutcome {
    pub solutions: SolutionSet,
    pub expanded: usize,
    pub generated: usize,
}

impl<'a> BOAStar<'a> {
    pub fn new(
        graph: &'a AdjacencyListGraph,
        eps: EpsPair,
        bounds: CostPair,
        ordering: QueueOrdering,
    ) -> BOAStar<'a> {
        BOAStar {
            graph,
            eps,
            bounds,
            ordering,
        }
    }

    pub fn search(
        &self,
        source: Vertex,
        target: Vertex,
        heuristic: &dyn Heuristic,
    ) -> SearchOutcome {
        self.search_with_logger(source, target, heuristic, &mut NoOpLogger {})
    }

    /// Runs the search and reports a start and a finish event to `logger`,
    /// exactly one of each per call.
    pub fn search_with_logger(
        &self,
        source: Vertex,
        target: Vertex,
        heuristic: &dyn Heuristic,
        logger: &mut dyn SearchLogger,
    ) -> SearchOutcome {
        logger.start_search(
            source,
            target,
            &SearchStartRecord {
                name: "BOAStar",
                eps: self.eps,
                bounds: self.bounds,
            },
        );

        let outcome = self.run(source, target, heuristic);

        logger.finish_search(&SearchFinishRecord {
            expanded_count: outcome.expanded,
            generated_count: outcome.generated,
            solutions: outcome
                .solutions
                .iter()
                .map(|label| SolutionRecord { g: label.g })
                .collect(),
            amount_of_solutions: outcome.solutions.len(),
        });

        outcome
    }

    fn run(&self, source: Vertex, target: Vertex, heuristic: &dyn Heuristic) -> SearchOutcome {
        let mut outcome = SearchOutcome {
            solutions: Vec::new(),
            expanded: 0,
            generated: 0,
        };

        let number_of_vertices = self.graph.number_of_vertices();
        if source as usize >= number_of_vertices || target as usize >= number_of_vertices {
            return outcome;
        }

        // Smallest second-criterion cost settled per vertex so far.
        let mut min_g2 = vec![MAX_COST; number_of_vertices];

        // Popped labels are parked here until the search returns so their
        // parent chains are not torn down inside the loop. Never read back.
        let mut retired: Vec<Arc<Label>> = Vec::new();

        let mut open = BinaryHeap::new();
        let root = Arc::new(Label::new(
            source,
            [0, 0],
            heuristic.estimate(source),
            self.bounds,
            None,
        ));
        open.push(OpenEntry::new(self.ordering, root));
        outcome.generated += 1;

        while let Some(entry) = open.pop() {
            let label = entry.label;

            if self.dominated(&min_g2, target, label.vertex, label.g[1], label.h[1]) {
                retired.push(label);
                continue;
            }
            min_g2[label.vertex as usize] = label.g[1];

            if label.vertex == target {
                outcome.solutions.push(label);
                return outcome;
            }

            for edge in self.graph.out_edges(label.vertex) {
                let next_g = [
                    label.g[0].saturating_add(edge.cost[0]),
                    label.g[1].saturating_add(edge.cost[1]),
                ];
                let next_h = heuristic.estimate(edge.head);

                if next_g[0].saturating_add(next_h[0]) > self.bounds[0]
                    || next_g[1].saturating_add(next_h[1]) > self.bounds[1]
                {
                    continue;
                }
                if self.dominated(&min_g2, target, edge.head, next_g[1], next_h[1]) {
                    continue;
                }

                let next = Arc::new(Label::new(
                    edge.head,
                    next_g,
                    next_h,
                    self.bounds,
                    Some(label.clone()),
                ));
                open.push(OpenEntry::new(self.ordering, next));
                outcome.generated += 1;
            }
            outcome.expanded += 1;
            retired.push(label);
        }

        outcome
    }

    // A label is dominated once an epsilon-relaxed version of its estimated
    // second-criterion total can no longer beat the best settled target cost,
    // or once its own vertex has settled a second-criterion cost at most as
    // large.
    fn dominated(
        &self,
        min_g2: &[Cost],
        target: Vertex,
        vertex: Vertex,
        g2: Cost,
        h2: Cost,
    ) -> bool {
        let f2 = g2.saturating_add(h2);
        (1.0 + self.eps[1]) * f2 as f64 >= min_g2[target as usize] as f64
            || g2 >= min_g2[vertex as usize]
    }
}
