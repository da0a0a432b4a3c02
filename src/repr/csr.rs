/*!
# Compressed Sparse Row (CSR) Representation

[`CsrGraph`] stores an undirected weighted graph as a symmetric directed adjacency:
every undirected edge `{u, v}` appears once in the neighborhood of `u` and once in the
neighborhood of `v`.

Three buffers make up the representation:
- `offsets`: one entry per vertex, the **inclusive** prefix sum of the degrees, i.e.
  `offsets[v]` is the number of adjacency entries of vertices `0..=v`,
- `neighbors`: all neighborhoods flattened into one array,
- `weights`: one weight per entry of `neighbors`, position-for-position.

The neighborhood of `v` is `neighbors[base(v)..offsets[v]]` with `base(0) = 0` and
`base(v) = offsets[v - 1]` otherwise. Neighborhoods are kept in the order the edges were
supplied to the [`CsrBuilder`](super::CsrBuilder); they are not sorted.

A `CsrGraph` can only be obtained from the builder and is immutable afterwards.
*/

use std::ops::Range;

use super::*;

/// Immutable weighted **CSR graph**. See the [module documentation](self) for the layout.
#[derive(Debug, Clone, PartialEq)]
pub struct CsrGraph {
    offsets: Vec<NumEdges>,
    neighbors: Vec<VertexId>,
    weights: Vec<Weight>,
}

impl CsrGraph {
    /// Takes ownership of the three buffers produced by the builder.
    ///
    /// The invariants are only checked in debug builds as the builder establishes them.
    pub(super) fn from_raw_parts(
        offsets: Vec<NumEdges>,
        neighbors: Vec<VertexId>,
        weights: Vec<Weight>,
    ) -> Self {
        debug_assert!(!offsets.is_empty());
        debug_assert!(offsets.is_sorted());
        debug_assert_eq!(offsets.last().copied(), Some(neighbors.len() as NumEdges));
        debug_assert_eq!(neighbors.len(), weights.len());

        Self {
            offsets,
            neighbors,
            weights,
        }
    }

    /// Converts a generated edge list into its CSR representation.
    ///
    /// Shorthand for [`CsrBuilder::from_edge_list`] followed by [`CsrBuilder::build`].
    ///
    /// # Errors
    /// Returns [`Error::OutOfMemory`] if one of the buffers cannot be allocated.
    pub fn try_from_edge_list(edge_list: &WeightedEdgeList) -> Result<Self> {
        CsrBuilder::from_edge_list(edge_list).build()
    }

    /// The total number of vertices in the graph
    pub fn num_vertices(&self) -> u64 {
        self.offsets.len() as u64
    }

    /// The total number of **directed** adjacency entries, i.e. twice the number of
    /// undirected input edges.
    pub fn num_edges(&self) -> NumEdges {
        self.offsets.last().copied().unwrap_or(0)
    }

    /// The position of the first adjacency entry of `vertex` in the flattened arrays.
    ///
    /// # Errors
    /// Returns [`Error::OutOfRange`] if `vertex >= self.num_vertices()`.
    ///
    /// # Example
    /// ```
    /// use kroncsr::prelude::*;
    ///
    /// let g = CsrBuilder::new(&[Edge(0, 1), Edge(1, 2)], &[0.5, 0.25])?.build()?;
    /// assert_eq!(g.vertex_base(0)?, 0);
    /// assert_eq!(g.vertex_base(1)?, 1);
    /// assert_eq!(g.vertex_base(2)?, 3);
    /// assert!(g.vertex_base(3).is_err());
    /// # Ok::<(), kroncsr::error::Error>(())
    /// ```
    pub fn vertex_base(&self, vertex: VertexId) -> Result<NumEdges> {
        let u = self.checked_index(vertex)?;
        Ok(self.base_of(u))
    }

    /// The number of adjacency entries (the degree) of `vertex`.
    ///
    /// A self-loop contributes two entries.
    ///
    /// # Errors
    /// Returns [`Error::OutOfRange`] if `vertex >= self.num_vertices()`.
    pub fn vertex_count(&self, vertex: VertexId) -> Result<NumEdges> {
        let u = self.checked_index(vertex)?;
        Ok(self.offsets[u] - self.base_of(u))
    }

    /// The neighbors of `vertex` in insertion order.
    ///
    /// # Errors
    /// Returns [`Error::OutOfRange`] if `vertex >= self.num_vertices()`.
    pub fn neighbors_of(&self, vertex: VertexId) -> Result<&[VertexId]> {
        let u = self.checked_index(vertex)?;
        Ok(&self.neighbors[self.range_of(u)])
    }

    /// The weights of the adjacency entries of `vertex`, matching [`CsrGraph::neighbors_of`].
    ///
    /// # Errors
    /// Returns [`Error::OutOfRange`] if `vertex >= self.num_vertices()`.
    pub fn weights_of(&self, vertex: VertexId) -> Result<&[Weight]> {
        let u = self.checked_index(vertex)?;
        Ok(&self.weights[self.range_of(u)])
    }

    /// Inclusive prefix sums of the degrees, one entry per vertex
    pub fn raw_offsets(&self) -> &[NumEdges] {
        &self.offsets
    }

    /// All neighborhoods, flattened
    pub fn raw_neighbors(&self) -> &[VertexId] {
        &self.neighbors
    }

    /// All weights, flattened
    pub fn raw_weights(&self) -> &[Weight] {
        &self.weights
    }

    fn checked_index(&self, vertex: VertexId) -> Result<usize> {
        if vertex >= self.num_vertices() {
            return Err(Error::OutOfRange {
                vertex,
                num_vertices: self.num_vertices(),
            });
        }

        Ok(vertex as usize)
    }

    #[inline(always)]
    fn base_of(&self, u: usize) -> NumEdges {
        if u == 0 { 0 } else { self.offsets[u - 1] }
    }

    #[inline(always)]
    fn range_of(&self, u: usize) -> Range<usize> {
        self.base_of(u) as usize..self.offsets[u] as usize
    }
}

impl GraphNodeOrder for CsrGraph {
    fn number_of_nodes(&self) -> VertexId {
        self.num_vertices()
    }
}

impl GraphEdgeOrder for CsrGraph {
    fn number_of_edges(&self) -> NumEdges {
        self.num_edges()
    }
}

impl WeightedAdjacencyList for CsrGraph {
    fn neighbors_slice(&self, u: VertexId) -> &[VertexId] {
        &self.neighbors[self.range_of(u as usize)]
    }

    fn weights_slice(&self, u: VertexId) -> &[Weight] {
        &self.weights[self.range_of(u as usize)]
    }

    fn degree_of(&self, u: VertexId) -> NumEdges {
        let u = u as usize;
        self.offsets[u] - self.base_of(u)
    }
}
