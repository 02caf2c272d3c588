use crate::graphs::{Cost, Vertex};

pub mod radix_queue;

#[derive(Copy, Clone, Eq, PartialEq)]
pub struct DijkstraQueueElement {
    pub cost: Cost,
    pub vertex: Vertex,
}

impl DijkstraQueueElement {
    pub fn new(cost: Cost, vertex: Vertex) -> DijkstraQueueElement {
        DijkstraQueueElement { cost, vertex }
    }
}
