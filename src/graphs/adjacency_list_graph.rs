use serde::{Deserialize, Serialize};

use super::{BiWeightedEdge, Vertex};

/// Adjacency structure over bi-weighted edges: one slot per vertex id holding
/// the ordered outgoing edges of that vertex. Built once from an edge list
/// and immutable afterwards.
///
/// Duplicate and self-loop edges are stored verbatim; the search's dominance
/// rule is what discards redundant parallel edges, not construction.
#[derive(Clone, Serialize, Deserialize)]
pub struct AdjacencyListGraph {
    edges: Vec<Vec<BiWeightedEdge>>,
}

impl AdjacencyListGraph {
    /// Builds the forward graph: every edge lands in the slot of its tail.
    pub fn new(number_of_vertices: usize, edges: &[BiWeightedEdge]) -> AdjacencyListGraph {
        Self::build(number_of_vertices, edges, false)
    }

    /// Builds the inverted graph: every edge is stored reversed, so a
    /// forward edge lands in the slot of its head. Searching this graph from
    /// a vertex walks the original edges backwards.
    pub fn inverted(number_of_vertices: usize, edges: &[BiWeightedEdge]) -> AdjacencyListGraph {
        Self::build(number_of_vertices, edges, true)
    }

    fn build(
        number_of_vertices: usize,
        edges: &[BiWeightedEdge],
        invert: bool,
    ) -> AdjacencyListGraph {
        let mut slots: Vec<Vec<BiWeightedEdge>> = vec![Vec::new(); number_of_vertices];

        for edge in edges {
            let edge = if invert { edge.reversed() } else { edge.clone() };
            let max_endpoint = std::cmp::max(edge.tail, edge.head) as usize;
            if max_endpoint >= slots.len() {
                slots.resize(max_endpoint + 1, Vec::new());
            }
            slots[edge.tail as usize].push(edge);
        }

        AdjacencyListGraph { edges: slots }
    }

    pub fn number_of_vertices(&self) -> usize {
        self.edges.len()
    }

    pub fn number_of_edges(&self) -> usize {
        self.edges.iter().map(Vec::len).sum()
    }

    /// Outgoing edges of `vertex`, in insertion order. Empty for a vertex id
    /// outside the graph.
    pub fn out_edges(&self, vertex: Vertex) -> &[BiWeightedEdge] {
        self.edges.get(vertex as usize).map(Vec::as_slice).unwrap_or(&[])
    }
}
