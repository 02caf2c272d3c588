use std::sync::Arc;

use crate::graphs::{Cost, CostPair, Vertex};

/// Search state for one partial path from the search source to `vertex`.
///
/// `g` is the cost accumulated along this specific path, `h` the heuristic
/// estimate of the remaining cost, and `f` the derived priority value: the
/// cost-to-bound ratio `h[i] / (bound[i] - g[i])` per criterion. A smaller
/// ratio means more slack remains before that criterion's bound is exhausted.
///
/// Every field is fixed at construction. Parents are shared through `Arc`:
/// a label stays alive as long as any queue entry, solution, or descendant
/// still references it, and chains are acyclic because a label can only ever
/// point at a previously constructed one.
#[derive(Debug)]
pub struct Label {
    pub vertex: Vertex,
    pub g: CostPair,
    pub h: CostPair,
    pub f: [f64; 2],
    pub parent: Option<Arc<Label>>,
}

impl Label {
    pub fn new(
        vertex: Vertex,
        g: CostPair,
        h: CostPair,
        bounds: CostPair,
        parent: Option<Arc<Label>>,
    ) -> Label {
        let ratio = |criterion: usize| {
            h[criterion] as f64 / (bounds[criterion] as f64 - g[criterion] as f64)
        };
        Label {
            vertex,
            g,
            h,
            f: [ratio(0), ratio(1)],
            parent,
        }
    }

    /// Total estimated cost `g + h` in one criterion, saturating at the
    /// sentinel.
    pub fn total_cost(&self, criterion: usize) -> Cost {
        self.g[criterion].saturating_add(self.h[criterion])
    }

    /// The vertex sequence of this partial path, source first.
    pub fn path(&self) -> Vec<Vertex> {
        let mut vertices = vec![self.vertex];

        let mut current = self;
        while let Some(parent) = current.parent.as_deref() {
            current = parent;
            vertices.push(current.vertex);
        }

        vertices.reverse();
        vertices
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_ratio_is_cost_to_bound() {
        let label = Label::new(7, [2, 90], [4, 5], [10, 100], None);

        assert_eq!(label.f[0], 0.5); // 4 / (10 - 2)
        assert_eq!(label.f[1], 0.5); // 5 / (100 - 90)
    }

    #[test]
    fn path_walks_the_parent_chain_source_first() {
        let root = Arc::new(Label::new(3, [0, 0], [5, 5], [100, 100], None));
        let middle = Arc::new(Label::new(8, [1, 2], [4, 3], [100, 100], Some(root)));
        let tip = Label::new(2, [3, 4], [0, 0], [100, 100], Some(middle));

        assert_eq!(tip.path(), vec![3, 8, 2]);
    }

    #[test]
    fn total_cost_saturates_at_the_sentinel() {
        use crate::graphs::MAX_COST;

        let label = Label::new(0, [10, MAX_COST], [MAX_COST, 3], [100, 100], None);

        assert_eq!(label.total_cost(0), MAX_COST);
        assert_eq!(label.total_cost(1), MAX_COST);
    }
}
