/*!
`kroncsr` generates Graph500-style Kronecker graphs and exports them for graph partitioners.

# Representation

We represent **vertices** as `u64` in the range `0..n`. Graph500 scales go up to `2^42`
vertices, so `u32` does not suffice here. **Edges** are a simple tuple-struct `Edge(VertexId, VertexId)`
and every edge carries an `f32` weight in `[0, 1)`.

A generated graph is a [`WeightedEdgeList`](edge::WeightedEdgeList): the edges in generation
order plus a parallel array of weights. The generated graph is **undirected**.

For formats that list neighborhoods (METIS), the edge list is converted into a
[`CsrGraph`](repr::CsrGraph), a Compressed-Sparse-Row structure storing every undirected edge
once per endpoint. Neighborhoods keep the order in which the edges were generated.

# Usage

There are *5* core submodules you probably want to interact with:
- [`prelude`] includes definitions for vertices, edges, basic graph traits and the CSR representation,
- [`gens`] includes the Kronecker generator,
- [`io`] includes writers for the METIS and the weighted edge list formats,
- [`config`] includes the configuration record of a generation run,
- [`error`] includes the error type shared by all of the above.

```
use kroncsr::{prelude::*, io::*};

let edges = [Edge(0, 1), Edge(1, 2)];
let weights = [0.5, 0.25];
let graph = CsrBuilder::new(&edges, &weights)?.build()?;

let mut buffer = Vec::new();
graph.try_write_metis(&mut buffer)?;
assert_eq!(String::from_utf8(buffer).unwrap(), "3 2 001\n2 0.5\n1 0.5 3 0.25\n2 0.25\n");
# Ok::<(), kroncsr::error::Error>(())
```
*/

pub mod config;
pub mod edge;
pub mod error;
pub mod gens;
pub mod io;
pub mod ops;
pub mod repr;
#[cfg(test)]
pub(crate) mod testing;

pub use edge::*;

/// `kroncsr::prelude` includes definitions for vertices and edges, all basic graph traits as well
/// as the CSR representation.
pub mod prelude {
    pub use super::{edge::*, ops::*, repr::*};
}
