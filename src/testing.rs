//! Helpers shared by the unit tests of several modules

use itertools::Itertools;
use rand::Rng;

use crate::*;

/// Creates `m` random edges with random weights for vertices `0..n`.
///
/// Unlike most generators, duplicates and self-loops are kept on purpose.
pub(crate) fn random_weighted_edges<R: Rng>(rng: &mut R, n: VertexId, m: u64) -> WeightedEdgeList {
    (0..m)
        .map(|_| {
            let u = rng.random_range(0..n);
            let v = rng.random_range(0..n);
            (Edge(u, v), rng.random::<Weight>())
        })
        .collect()
}

/// Adjacency lists built by pushing every edge to both endpoints in input order.
///
/// Has `max_id + 1` entries, or none if `edge_list` is empty.
pub(crate) fn naive_adjacency(edge_list: &WeightedEdgeList) -> Vec<Vec<(VertexId, Weight)>> {
    let n = edge_list
        .edges()
        .iter()
        .map(|e| e.max_vertex() as usize + 1)
        .max()
        .unwrap_or(0);

    let mut adj = vec![Vec::new(); n];
    for (Edge(u, v), w) in edge_list.iter() {
        adj[u as usize].push((v, w));
        adj[v as usize].push((u, w));
    }
    adj
}

/// Splits the output of a writer into its lines
pub(crate) fn output_lines(buffer: Vec<u8>) -> Vec<String> {
    String::from_utf8(buffer)
        .unwrap()
        .lines()
        .map(String::from)
        .collect_vec()
}
