use crate::graphs::{CostPair, Vertex};

pub mod shortest_path_heuristic;

/// Per-vertex estimate of the remaining cost to a fixed target, one component
/// per criterion. Implementations are pure: calling `estimate` has no side
/// effects and is safe from multiple threads.
pub trait Heuristic: Send + Sync {
    fn estimate(&self, vertex: Vertex) -> CostPair;
}

/// Estimates zero remaining cost everywhere, turning the search into plain
/// bi-criteria Dijkstra.
pub struct ZeroHeuristic {}

impl Heuristic for ZeroHeuristic {
    fn estimate(&self, _vertex: Vertex) -> CostPair {
        [0, 0]
    }
}
