/*!
# Vertices, Edges & Weights

Vertices are plain `u64` identifiers. Graph500 scales go up to `2^42` vertices, so unlike most
in-memory graph libraries we cannot get away with `u32`.

An [`Edge`] is an unordered pair of vertices. A generated graph is handed around as a
[`WeightedEdgeList`]: the edges together with a parallel array of weights in `[0, 1)`.
*/

use std::fmt::{Debug, Display};

use crate::error::{Result, raise_invalid_unless};

/// Vertices are numbered densely from `0`
pub type VertexId = u64;

/// Number of (directed) adjacency entries
pub type NumEdges = u64;

/// Edge weights, drawn uniformly from `[0, 1)` by the generator
pub type Weight = f32;

/// An edge is defined by two endpoints.
/// Whether it is directed is up to the consumer; the CSR conversion treats it as undirected.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Edge(pub VertexId, pub VertexId);

impl Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.0, self.1)
    }
}

impl Debug for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl Edge {
    /// Normalizes the edge such that the endpoint with smaller value comes first
    pub fn normalized(&self) -> Self {
        Edge(self.0.min(self.1), self.0.max(self.1))
    }

    /// Returns true if both endpoints are equal
    pub fn is_loop(&self) -> bool {
        self.0 == self.1
    }

    /// Reverses the edge by switching the endpoints
    pub fn reverse(&self) -> Self {
        Edge(self.1, self.0)
    }

    /// Returns the larger of both endpoints
    pub fn max_vertex(&self) -> VertexId {
        self.0.max(self.1)
    }
}

impl From<(VertexId, VertexId)> for Edge {
    fn from(value: (VertexId, VertexId)) -> Self {
        Edge(value.0, value.1)
    }
}

impl From<&(VertexId, VertexId)> for Edge {
    fn from(value: &(VertexId, VertexId)) -> Self {
        Edge(value.0, value.1)
    }
}

/// Edges of a generated graph together with one weight per edge.
///
/// Both arrays always have the same length; `weights()[i]` belongs to `edges()[i]`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeightedEdgeList {
    edges: Vec<Edge>,
    weights: Vec<Weight>,
}

impl WeightedEdgeList {
    /// Pairs up `edges` and `weights`.
    ///
    /// # Errors
    /// Returns [`Error::InvalidArgument`](crate::error::Error::InvalidArgument) if the lengths differ.
    ///
    /// # Example
    /// ```
    /// use kroncsr::prelude::*;
    ///
    /// let list = WeightedEdgeList::new(vec![Edge(0, 1), Edge(1, 2)], vec![0.5, 0.25]).unwrap();
    /// assert_eq!(list.len(), 2);
    ///
    /// assert!(WeightedEdgeList::new(vec![Edge(0, 1)], vec![]).is_err());
    /// ```
    pub fn new(edges: Vec<Edge>, weights: Vec<Weight>) -> Result<Self> {
        raise_invalid_unless!(
            edges.len() == weights.len(),
            "got {} edges but {} weights",
            edges.len(),
            weights.len()
        );

        Ok(Self { edges, weights })
    }

    /// Number of (undirected) edges
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn weights(&self) -> &[Weight] {
        &self.weights
    }

    /// Iterates over all edges in input order, each paired with its weight
    pub fn iter(&self) -> impl Iterator<Item = (Edge, Weight)> + '_ {
        self.edges.iter().copied().zip(self.weights.iter().copied())
    }

    /// Splits the list back into its two arrays
    pub fn into_parts(self) -> (Vec<Edge>, Vec<Weight>) {
        (self.edges, self.weights)
    }
}

impl FromIterator<(Edge, Weight)> for WeightedEdgeList {
    fn from_iter<T: IntoIterator<Item = (Edge, Weight)>>(iter: T) -> Self {
        let (edges, weights) = iter.into_iter().unzip();
        Self { edges, weights }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn edge_helpers() {
        assert_eq!(Edge(4, 2).normalized(), Edge(2, 4));
        assert_eq!(Edge(2, 4).normalized(), Edge(2, 4));
        assert_eq!(Edge(4, 2).reverse(), Edge(2, 4));
        assert!(Edge(3, 3).is_loop());
        assert!(!Edge(3, 4).is_loop());
        assert_eq!(Edge(9, 2).max_vertex(), 9);
        assert_eq!(Edge::from((1, 5)), Edge(1, 5));
        assert_eq!(format!("{:?}", Edge(1, 5)), "(1,5)");
    }

    #[test]
    fn edge_list_pairs_weights() {
        let list: WeightedEdgeList = [(Edge(0, 1), 0.5), (Edge(1, 2), 0.25)]
            .into_iter()
            .collect();

        assert_eq!(list.len(), 2);
        assert!(!list.is_empty());
        assert_eq!(list.edges(), &[Edge(0, 1), Edge(1, 2)]);
        assert_eq!(list.weights(), &[0.5, 0.25]);
        assert_eq!(
            list.iter().collect_vec(),
            vec![(Edge(0, 1), 0.5), (Edge(1, 2), 0.25)]
        );

        let (edges, weights) = list.into_parts();
        assert_eq!(edges.len(), weights.len());
    }

    #[test]
    fn edge_list_rejects_mismatch() {
        assert!(WeightedEdgeList::new(vec![], vec![]).unwrap().is_empty());
        assert!(WeightedEdgeList::new(vec![Edge(0, 0)], vec![0.1, 0.2]).is_err());
    }
}
