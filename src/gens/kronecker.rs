use super::*;

/// Largest supported scale (the Graph500 `huge` class)
pub const MAX_SCALE: u32 = 42;

/// Default number of edges per vertex of the Graph500 benchmark
pub const DEFAULT_EDGE_FACTOR: u64 = 16;

/// Probabilities of the 2x2 initiator matrix.
///
/// At every recursion level an edge falls into the top-left quadrant with probability `a`,
/// top-right with `b`, bottom-left with `c` and bottom-right with `1 - a - b - c`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Initiator {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl Default for Initiator {
    /// The initiator of the Graph500 specification
    fn default() -> Self {
        Self {
            a: 0.57,
            b: 0.19,
            c: 0.19,
        }
    }
}

impl Initiator {
    /// Maps a uniform sample from `[0, 1)` to the `(row, column)` bit of a quadrant
    #[inline]
    fn quadrant(&self, r: f64) -> (u64, u64) {
        if r < self.a {
            (0, 0)
        } else if r < self.a + self.b {
            (0, 1)
        } else if r < self.a + self.b + self.c {
            (1, 0)
        } else {
            (1, 1)
        }
    }
}

/// Kronecker (R-MAT) graphs as used by the Graph500 benchmark.
///
/// A graph of scale `s` has `2^s` vertices and `edge_factor * 2^s` edges. Every edge is placed by
/// recursively descending `s` times into one of the four quadrants of the adjacency matrix,
/// following the [`Initiator`] probabilities. Afterwards, vertex ids are scrambled by a random
/// bijection on `0..2^s` so that high-degree vertices are not clustered around id `0`.
///
/// Duplicate edges and self-loops are kept.
#[derive(Debug, Copy, Clone)]
pub struct Kronecker {
    scale: u32,
    edge_factor: u64,
    initiator: Initiator,
}

impl Default for Kronecker {
    fn default() -> Self {
        Self {
            scale: 0,
            edge_factor: DEFAULT_EDGE_FACTOR,
            initiator: Initiator::default(),
        }
    }
}

impl Kronecker {
    /// Creates a new generator with the Graph500 edge factor and initiator; the scale must be set
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the scale, i.e. the graph has `2^scale` vertices
    pub fn scale(mut self, scale: u32) -> Self {
        self.scale = scale;
        self
    }

    /// Sets the number of edges per vertex
    pub fn edge_factor(mut self, edge_factor: u64) -> Self {
        self.edge_factor = edge_factor;
        self
    }

    /// Overrides the initiator probabilities
    pub fn initiator(mut self, initiator: Initiator) -> Self {
        let Initiator { a, b, c } = initiator;
        assert!(
            [a, b, c, a + b + c].into_iter().all(is_valid_probability),
            "The initiator probabilities are invalid!"
        );
        self.initiator = initiator;
        self
    }

    /// Number of vertices the generated graph will have
    pub fn number_of_nodes(&self) -> VertexId {
        1 << self.scale
    }

    /// Number of edges the generated graph will have
    pub fn number_of_edges(&self) -> NumEdges {
        self.edge_factor << self.scale
    }
}

impl GraphGenerator for Kronecker {
    fn stream<R>(&self, rng: &mut R) -> impl Iterator<Item = (Edge, Weight)>
    where
        R: Rng,
    {
        assert!(
            (1..=MAX_SCALE).contains(&self.scale),
            "The scale must be in 1..={MAX_SCALE}!"
        );
        assert!(self.edge_factor > 0, "The edge factor must be positive!");
        assert!(
            self.edge_factor.leading_zeros() > self.scale,
            "Too many edges for the given scale!"
        );

        let kron = *self;
        let scrambler = Scrambler::new(rng, self.scale);

        (0..self.number_of_edges()).map(move |_| {
            let (mut u, mut v) = (0, 0);
            for _ in 0..kron.scale {
                let (row, col) = kron.initiator.quadrant(rng.random());
                u = (u << 1) | row;
                v = (v << 1) | col;
            }

            let edge = Edge(scrambler.apply(u), scrambler.apply(v));
            (edge, rng.random::<Weight>())
        })
    }
}

/// Random bijection on `0..2^scale`: an affine map, a bit-reversal and another affine map
#[derive(Debug, Copy, Clone)]
struct Scrambler {
    scale: u32,
    mask: u64,
    mul: [u64; 2],
    add: [u64; 2],
}

impl Scrambler {
    fn new<R: Rng>(rng: &mut R, scale: u32) -> Self {
        debug_assert!((1..64).contains(&scale));

        Self {
            scale,
            mask: (1 << scale) - 1,
            // odd multipliers are invertible modulo any power of two
            mul: [rng.random::<u64>() | 1, rng.random::<u64>() | 1],
            add: [rng.random(), rng.random()],
        }
    }

    #[inline]
    fn apply(&self, v: VertexId) -> VertexId {
        let v = v.wrapping_mul(self.mul[0]).wrapping_add(self.add[0]) & self.mask;
        let v = v.reverse_bits() >> (64 - self.scale);
        v.wrapping_mul(self.mul[1]).wrapping_add(self.add[1]) & self.mask
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn sizes_and_ranges() {
        let rng = &mut Pcg64Mcg::seed_from_u64(1);

        for scale in [1, 2, 5, 10] {
            for edge_factor in [1, 4, 16] {
                let generator = Kronecker::new().scale(scale).edge_factor(edge_factor);
                let graph = generator.generate(rng);

                assert_eq!(graph.len() as u64, generator.number_of_edges());
                assert_eq!(graph.len() as u64, edge_factor << scale);
                assert!(
                    graph
                        .edges()
                        .iter()
                        .all(|e| e.max_vertex() < generator.number_of_nodes())
                );
                assert!(graph.weights().iter().all(|w| (0.0..1.0).contains(w)));
            }
        }
    }

    #[test]
    fn deterministic_for_seed() {
        let generator = Kronecker::new().scale(8);

        let a = generator.generate(&mut Pcg64Mcg::seed_from_u64(42));
        let b = generator.generate(&mut Pcg64Mcg::seed_from_u64(42));
        let c = generator.generate(&mut Pcg64Mcg::seed_from_u64(43));

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn skewed_degrees() {
        let rng = &mut Pcg64Mcg::seed_from_u64(2);
        let graph = Kronecker::new().scale(10).generate(rng);

        let degrees = graph
            .edges()
            .iter()
            .flat_map(|&Edge(u, v)| [u, v])
            .counts();
        let max_degree = degrees.values().copied().max().unwrap();

        // Average degree is 32, a power-law graph has far larger hubs
        assert!(max_degree > 100);
    }

    #[test]
    fn degenerate_initiator() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);
        let graph = Kronecker::new()
            .scale(6)
            .edge_factor(2)
            .initiator(Initiator {
                a: 1.0,
                b: 0.0,
                c: 0.0,
            })
            .generate(rng);

        let first = graph.edges()[0];
        assert!(first.is_loop());
        assert!(graph.edges().iter().all(|&e| e == first));
    }

    #[test]
    fn scrambler_is_bijection() {
        let rng = &mut Pcg64Mcg::seed_from_u64(4);

        for scale in 1..=12 {
            let scrambler = Scrambler::new(rng, scale);
            let image = (0..1u64 << scale)
                .map(|v| scrambler.apply(v))
                .sorted()
                .collect_vec();

            assert_eq!(image, (0..1u64 << scale).collect_vec());
        }
    }

    #[test]
    #[should_panic]
    fn scale_must_be_set() {
        let rng = &mut Pcg64Mcg::seed_from_u64(5);
        Kronecker::new().generate(rng);
    }

    #[test]
    #[should_panic]
    fn scale_too_large() {
        let rng = &mut Pcg64Mcg::seed_from_u64(5);
        Kronecker::new().scale(MAX_SCALE + 1).generate(rng);
    }

    #[test]
    #[should_panic]
    fn invalid_initiator() {
        Kronecker::new().initiator(Initiator {
            a: 0.6,
            b: 0.3,
            c: 0.3,
        });
    }
}
