use std::sync::Arc;

use self::label::Label;

pub mod boa_star;
pub mod label;
pub mod ordering;
pub mod path_pair;

/// Per-criterion dominance slack. A label whose second-criterion estimate
/// scaled by `1 + eps[1]` cannot beat the best settled cost is pruned; the
/// first component is carried through to the logs but takes no part in
/// pruning.
pub type EpsPair = [f64; 2];

/// Non-dominated labels that reached the target, in discovery order.
pub type SolutionSet = Vec<Arc<Label>>;
