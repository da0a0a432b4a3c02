use std::ops::Range;

use crate::*;

/// Provides getters pertaining to the vertex-size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of vertices of the graph
    fn number_of_nodes(&self) -> VertexId;

    /// Returns an iterator over V in ascending order
    fn vertices(&self) -> Range<VertexId> {
        0..self.number_of_nodes()
    }
}

/// Provides getters pertaining to the edge-size of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of **directed** adjacency entries of the graph.
    ///
    /// For an undirected graph stored symmetrically this is twice the number of edges.
    fn number_of_edges(&self) -> NumEdges;
}

/// Getters for weighted neighborhoods.
///
/// Neighborhoods are reported in the order they are stored, which is not necessarily sorted.
pub trait WeightedAdjacencyList: GraphNodeOrder + GraphEdgeOrder + Sized {
    /// Returns the neighbors of `u` as a slice.
    /// ** Panics if `u >= n` **
    fn neighbors_slice(&self, u: VertexId) -> &[VertexId];

    /// Returns the weights of the adjacency entries of `u`, position-for-position
    /// matching [`WeightedAdjacencyList::neighbors_slice`].
    /// ** Panics if `u >= n` **
    fn weights_slice(&self, u: VertexId) -> &[Weight];

    /// Returns the number of adjacency entries of `u`
    /// ** Panics if `u >= n` **
    fn degree_of(&self, u: VertexId) -> NumEdges {
        self.neighbors_slice(u).len() as NumEdges
    }

    /// Returns an iterator over `(neighbor, weight)` pairs of `u`.
    /// ** Panics if `u >= n` **
    fn weighted_neighbors(&self, u: VertexId) -> impl Iterator<Item = (VertexId, Weight)> + '_ {
        self.neighbors_slice(u)
            .iter()
            .copied()
            .zip(self.weights_slice(u).iter().copied())
    }

    /// Returns an iterator over the degrees of all vertices
    fn degrees(&self) -> impl Iterator<Item = NumEdges> + '_ {
        self.vertices().map(|u| self.degree_of(u))
    }

    /// Returns the largest degree in the graph (`0` for a graph without edges)
    fn max_degree(&self) -> NumEdges {
        self.degrees().max().unwrap_or(0)
    }
}
