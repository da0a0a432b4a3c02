/*!
# Graph Representations

- [`CsrGraph`]: immutable weighted Compressed-Sparse-Row graph, storing an undirected graph as
  a symmetric directed adjacency.
- [`CsrBuilder`]: the conversion from a [`WeightedEdgeList`] into a [`CsrGraph`].
*/

use crate::{
    error::{Error, Result, raise_invalid_unless},
    ops::*,
    *,
};

mod builder;
mod csr;

pub use builder::*;
pub use csr::*;
