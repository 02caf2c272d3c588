use radix_heap::RadixHeapMap;

use super::DijkstraQueueElement;
use crate::graphs::{Cost, Vertex};

/// Monotone priority queue. Pushed costs must never undercut the last popped
/// cost, which Dijkstra relaxations guarantee; in exchange pops are cheaper
/// than a binary heap's.
///
/// Costs are negated into `i64` keys so the whole `Cost` domain fits without
/// wrapping.
#[derive(Clone)]
pub struct RadixQueue {
    heap: RadixHeapMap<i64, Vertex>,
}

impl Default for RadixQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl RadixQueue {
    pub fn new() -> RadixQueue {
        RadixQueue {
            heap: RadixHeapMap::new(),
        }
    }

    pub fn push(&mut self, state: DijkstraQueueElement) {
        self.heap.push(-(state.cost as i64), state.vertex);
    }

    pub fn pop(&mut self) -> Option<DijkstraQueueElement> {
        let (negative_cost, vertex) = self.heap.pop()?;
        Some(DijkstraQueueElement {
            cost: -negative_cost as Cost,
            vertex,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn clear(&mut self) {
        self.heap.clear();
    }
}
