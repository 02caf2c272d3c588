use serde::{Deserialize, Serialize};

pub mod adjacency_list_graph;
pub mod graph_factory;

pub type Vertex = u32;
pub type Cost = u32;

/// Per-edge and per-path cost under the two criteria, indexed by criterion.
pub type CostPair = [Cost; 2];

/// Sentinel for "infinite/unknown" cost. Never compares as better than any
/// real cost; accumulation saturates at this value instead of wrapping.
pub const MAX_COST: Cost = Cost::MAX;

/// A directed edge carrying one cost per criterion.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BiWeightedEdge {
    pub tail: Vertex,
    pub head: Vertex,
    pub cost: CostPair,
}

impl BiWeightedEdge {
    pub fn new(tail: Vertex, head: Vertex, cost: CostPair) -> BiWeightedEdge {
        BiWeightedEdge { tail, head, cost }
    }

    /// The same edge traversed backwards, cost unchanged. Used to build the
    /// inverted graph for backward heuristic computation.
    pub fn reversed(&self) -> BiWeightedEdge {
        BiWeightedEdge {
            tail: self.head,
            head: self.tail,
            cost: self.cost,
        }
    }
}
