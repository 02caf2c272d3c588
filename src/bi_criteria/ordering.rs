use std::{cmp::Ordering, sync::Arc};

use clap::ValueEnum;

use super::label::Label;

/// Expansion-order strategy for the open queue. Swapping the strategy never
/// affects which labels survive pruning, only the order they are expanded in
/// and therefore which non-dominated label reaches the target first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum QueueOrdering {
    /// Total first-criterion cost, ties broken on the second.
    Lexicographic,
    /// Smaller of the two total-cost components.
    CostMin,
    /// Larger of the two total-cost components.
    CostMax,
    /// Mean of the two total-cost components.
    CostAvg,
    /// Smaller of the two cost-to-bound ratio components.
    RatioMin,
    /// Larger of the two cost-to-bound ratio components.
    RatioMax,
    /// Mean of the two cost-to-bound ratio components.
    RatioAvg,
}

impl QueueOrdering {
    pub fn key_of(&self, label: &Label) -> QueueKey {
        let first = label.total_cost(0) as f64;
        let second = label.total_cost(1) as f64;

        match self {
            QueueOrdering::Lexicographic => QueueKey(first, second),
            QueueOrdering::CostMin => QueueKey(first.min(second), 0.0),
            QueueOrdering::CostMax => QueueKey(first.max(second), 0.0),
            QueueOrdering::CostAvg => QueueKey((first + second) / 2.0, 0.0),
            QueueOrdering::RatioMin => QueueKey(label.f[0].min(label.f[1]), 0.0),
            QueueOrdering::RatioMax => QueueKey(label.f[0].max(label.f[1]), 0.0),
            QueueOrdering::RatioAvg => QueueKey((label.f[0] + label.f[1]) / 2.0, 0.0),
        }
    }
}

/// Two-component priority key compared lexicographically. `total_cmp` keeps
/// the order total even when a ratio component is infinite or NaN (a label
/// sitting exactly on its bound), so the key is safe to feed a binary heap.
#[derive(Clone, Copy, Debug)]
pub struct QueueKey(pub f64, pub f64);

impl PartialEq for QueueKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for QueueKey {}

impl Ord for QueueKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .total_cmp(&other.0)
            .then_with(|| self.1.total_cmp(&other.1))
    }
}

impl PartialOrd for QueueKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Open-queue entry: the label plus its precomputed strategy key.
pub struct OpenEntry {
    pub key: QueueKey,
    pub label: Arc<Label>,
}

impl OpenEntry {
    pub fn new(ordering: QueueOrdering, label: Arc<Label>) -> OpenEntry {
        OpenEntry {
            key: ordering.key_of(&label),
            label,
        }
    }
}

impl PartialEq for OpenEntry {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for OpenEntry {}

// The heap depends on `Ord`; flip the comparison so `BinaryHeap` pops the
// entry with the smallest key.
impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other.key.cmp(&self.key)
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
