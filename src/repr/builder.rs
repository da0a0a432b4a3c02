/*!
# CSR Construction

[`CsrBuilder`] converts an undirected weighted edge list into a [`CsrGraph`] using a
counting sort by vertex id:

1. a scan over all edges yields the largest vertex id and thus `n = max_id + 1`,
2. every edge `{u, v}` increments the degree of both `u` and `v`,
3. an inclusive prefix sum turns the degrees into offsets,
4. a second scan places every edge into the neighborhoods of both endpoints.

The placement is stable: within each neighborhood, entries appear in the order their edges
were supplied. Nothing is sorted or deduplicated; a self-loop `{v, v}` occupies two slots of `v`.

Without any edges the inferred vertex count is still `1`, i.e. the result is a single isolated
vertex `0` rather than an empty graph.
*/

use std::collections::TryReserveError;

use tracing::{debug, info};

use super::*;

/// Converts an undirected weighted edge list into a [`CsrGraph`].
///
/// # Example
/// ```
/// use kroncsr::prelude::*;
///
/// let edges = [Edge(0, 1), Edge(1, 2)];
/// let weights = [0.5, 0.25];
///
/// let g = CsrBuilder::new(&edges, &weights)?.build()?;
///
/// assert_eq!(g.num_vertices(), 3);
/// assert_eq!(g.num_edges(), 4);
/// assert_eq!(g.neighbors_of(1)?, &[0, 2]);
/// assert_eq!(g.weights_of(1)?, &[0.5, 0.25]);
/// # Ok::<(), kroncsr::error::Error>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct CsrBuilder<'a> {
    edges: &'a [Edge],
    weights: &'a [Weight],
}

impl<'a> CsrBuilder<'a> {
    /// Creates a builder over `edges` and their parallel `weights`.
    ///
    /// # Errors
    /// Returns [`Error::InvalidArgument`] if both slices differ in length.
    pub fn new(edges: &'a [Edge], weights: &'a [Weight]) -> Result<Self> {
        raise_invalid_unless!(
            edges.len() == weights.len(),
            "got {} edges but {} weights",
            edges.len(),
            weights.len()
        );

        Ok(Self { edges, weights })
    }

    /// Creates a builder over a generated edge list, which always pairs up correctly
    pub fn from_edge_list(edge_list: &'a WeightedEdgeList) -> Self {
        Self {
            edges: edge_list.edges(),
            weights: edge_list.weights(),
        }
    }

    /// Runs the conversion and hands the three buffers over to a new [`CsrGraph`].
    ///
    /// # Errors
    /// Returns [`Error::OutOfMemory`] if any buffer cannot be allocated. All buffers allocated
    /// up to that point are released before returning.
    pub fn build(&self) -> Result<CsrGraph> {
        info!(
            num_edges = self.edges.len(),
            "Converting to the CSR representation..."
        );

        let max_vertex_id = self.edges.iter().map(Edge::max_vertex).max().unwrap_or(0);
        debug!(max_vertex_id, "Max vertex ID");

        let num_vertices = max_vertex_id
            .checked_add(1)
            .ok_or_else(|| out_of_memory("offsets", u64::MAX, None))?;
        let num_entries = (self.edges.len() as NumEdges)
            .checked_mul(2)
            .ok_or_else(|| out_of_memory("neighbors", u64::MAX, None))?;

        // Degrees, turned into inclusive offsets in place
        let mut offsets: Vec<NumEdges> = zeroed_buffer("offsets", num_vertices)?;
        for &Edge(u, v) in self.edges {
            debug_assert!(u < num_vertices && v < num_vertices, "ID out of bound");
            offsets[u as usize] += 1;
            // because the graph is undirected
            offsets[v as usize] += 1;
        }

        let mut running_offset = 0;
        for offset in offsets.iter_mut() {
            running_offset += *offset;
            *offset = running_offset;
        }
        debug_assert_eq!(running_offset, num_entries);

        let mut neighbors: Vec<VertexId> = zeroed_buffer("neighbors", num_entries)?;
        let mut weights: Vec<Weight> = zeroed_buffer("weights", num_entries)?;
        // Number of entries already placed per vertex
        let mut placed: Vec<NumEdges> = zeroed_buffer("cursors", num_vertices)?;
        debug!(num_vertices, num_entries, "Allocated CSR buffers");

        let mut place = |owner: VertexId, neighbor: VertexId, weight: Weight| {
            let owner = owner as usize;
            let base = if owner == 0 { 0 } else { offsets[owner - 1] };
            let pos = (base + placed[owner]) as usize;
            debug_assert!(pos < offsets[owner] as usize);

            neighbors[pos] = neighbor;
            weights[pos] = weight;
            placed[owner] += 1;
        };

        for (&Edge(src, dst), &weight) in self.edges.iter().zip(self.weights) {
            place(src, dst, weight);
            place(dst, src, weight);
        }

        Ok(CsrGraph::from_raw_parts(offsets, neighbors, weights))
    }

    /// Like [`CsrBuilder::build`], but stores the result in `out`.
    ///
    /// # Errors
    /// Returns [`Error::InvalidArgument`] without doing any work if `out` already holds a graph,
    /// or any error of [`CsrBuilder::build`]. On error, `out` is left untouched.
    pub fn build_into(&self, out: &mut Option<CsrGraph>) -> Result<()> {
        raise_invalid_unless!(out.is_none(), "the output graph is already populated");

        *out = Some(self.build()?);
        Ok(())
    }
}

fn out_of_memory(buffer: &'static str, len: u64, source: Option<TryReserveError>) -> Error {
    Error::OutOfMemory {
        buffer,
        len,
        source,
    }
}

/// Allocates a buffer of `len` default values, reporting allocation failures instead of aborting
fn zeroed_buffer<T: Copy + Default>(buffer: &'static str, len: u64) -> Result<Vec<T>> {
    let size = usize::try_from(len).map_err(|_| out_of_memory(buffer, len, None))?;

    let mut vec = Vec::new();
    vec.try_reserve_exact(size)
        .map_err(|err| out_of_memory(buffer, len, Some(err)))?;
    vec.resize(size, T::default());

    Ok(vec)
}
