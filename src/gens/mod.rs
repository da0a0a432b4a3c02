/*!
# Graph Generators

Generators follow a builder pattern: create an instance, configure it with setters and
then draw a graph from a random number generator:

```
use kroncsr::gens::*;
use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;

let rng = &mut Pcg64Mcg::seed_from_u64(0);
let graph = Kronecker::new().scale(4).edge_factor(2).generate(rng);

assert_eq!(graph.len(), 2 << 4);
```

All generators produce a [`WeightedEdgeList`] with weights drawn uniformly from `[0, 1)`.
Given the same seed, a generator always produces the same graph.
*/

use rand::Rng;

use crate::prelude::*;

mod kronecker;

pub use kronecker::*;

/// General trait for a configurable random weighted edge generator.
pub trait GraphGenerator {
    /// Generates the complete list of edges and their weights.
    ///
    /// This collects the full result from `stream()` as default.
    fn generate<R>(&self, rng: &mut R) -> WeightedEdgeList
    where
        R: Rng,
    {
        self.stream(rng).collect()
    }

    /// Creates a lazy iterator (stream) over generated edges and their weights.
    fn stream<R>(&self, rng: &mut R) -> impl Iterator<Item = (Edge, Weight)>
    where
        R: Rng;
}

/// Returns *true* if `p` lies in `[0, 1]`
fn is_valid_probability(p: f64) -> bool {
    (0.0..=1.0).contains(&p)
}
