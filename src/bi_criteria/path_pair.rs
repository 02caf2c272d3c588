use std::sync::Arc;

use crate::graphs::Vertex;

use super::{label::Label, EpsPair};

/// Two extreme labels standing in for a whole segment of the Pareto frontier
/// at one vertex: `top_left` is cheapest in the first criterion,
/// `bottom_right` cheapest in the second. Pair-based search variants expand
/// one such pair where the label-setting search expands every label
/// separately.
///
/// Only the bookkeeping shell exists so far. The merge rule is the open part;
/// until it lands, nothing constructs pairs outside of tests.
pub struct PathPair {
    pub vertex: Vertex,
    pub top_left: Arc<Label>,
    pub bottom_right: Arc<Label>,
    pub parent: Option<Arc<Label>>,
    pub is_active: bool,
}

impl PathPair {
    pub fn new(top_left: Arc<Label>, bottom_right: Arc<Label>) -> PathPair {
        PathPair {
            vertex: top_left.vertex,
            parent: top_left.parent.clone(),
            top_left,
            bottom_right,
            is_active: true,
        }
    }

    /// Widens this pair's extremes with `other`'s, provided the widened pair
    /// still spans at most an `eps`-bounded stretch of the frontier.
    pub fn update_by_merge_if_bounded(&mut self, _other: &PathPair, _eps: EpsPair) -> bool {
        unimplemented!("pair merging is not implemented yet")
    }
}
