/*!
# Metis

This module provides a writer for the **METIS v5 graph format** with edge weights.

A Metis file consists of:
- a **header line** `n m 001`, where `n` is the number of vertices, `m` the number of
  undirected edges and `001` signals that edges carry weights, and
- `n` lines, the `u`-th line (starting from `0`) describing the weighted neighborhood of `u`.

Each line of the adjacency section has the form:
```text
v1 w1 v2 w2 v3 w3 ...
```
which represents edges
```text
Edge(u, v1 - 1) with weight w1, Edge(u, v2 - 1) with weight w2, ...
```
A vertex without neighbors produces an empty line.

# Example
```
use kroncsr::prelude::*;
use kroncsr::io::*;

let g = CsrBuilder::new(&[Edge(0, 1), Edge(1, 2)], &[0.5, 0.25])?.build()?;

let mut buffer = Vec::new();
g.try_write_metis(&mut buffer)?;

assert_eq!(
    String::from_utf8(buffer).unwrap(),
    "3 2 001\n2 0.5\n1 0.5 3 0.25\n2 0.25\n"
);
# Ok::<(), kroncsr::error::Error>(())
```
*/

use std::{io::Write, path::Path};

use itertools::Itertools;

use super::*;

/// The `fmt` field of the header: no vertex sizes, no vertex weights, edge weights
const FMT_EDGE_WEIGHTS: &str = "001";

/// A writer for exporting graphs in the **Metis format**.
#[derive(Debug, Clone, Default)]
pub struct MetisWriter {
    /// How weights are printed
    weight_format: WeightFormat,
}

impl MetisWriter {
    /// Creates a new [`MetisWriter`] printing weights as floats.
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the [`WeightFormat`] used for the edge weights.
    pub fn set_weight_format(&mut self, format: WeightFormat) {
        self.weight_format = format;
    }

    /// Updates the weight format, consuming and returning `self` for chaining.
    ///
    /// # Example
    /// ```
    /// use kroncsr::io::*;
    ///
    /// let writer = MetisWriter::new()
    ///     .weight_format(WeightFormat::Int32);
    /// ```
    pub fn weight_format(mut self, format: WeightFormat) -> Self {
        self.set_weight_format(format);
        self
    }
}

impl<G> GraphWriter<G> for MetisWriter
where
    G: WeightedAdjacencyList,
{
    fn try_write_graph<W: Write>(&self, graph: &G, mut writer: W) -> Result<()> {
        let num_entries = graph.number_of_edges();
        debug_assert!(
            num_entries % 2 == 0,
            "Because the input graph is undirected"
        );

        writeln!(
            writer,
            "{} {} {FMT_EDGE_WEIGHTS}",
            graph.number_of_nodes(),
            num_entries / 2
        )?;

        for u in graph.vertices() {
            // +1, because vertices start from 1 in METIS
            let line = graph.weighted_neighbors(u).format_with(" ", |(v, w), f| {
                f(&format_args!("{} {}", v + 1, self.weight_format.display(w)))
            });
            writeln!(writer, "{line}")?;
        }

        writer.flush()?;
        Ok(())
    }
}

/// Trait for writing a graph to a writer in the **Metis format**.
///
/// Provides shorthand methods using the default [`MetisWriter`] settings.
pub trait MetisWrite {
    /// Tries to write the graph to a given writer in **Metis format**.
    ///
    /// # Errors
    /// Returns an error if writing fails (e.g., due to I/O issues).
    fn try_write_metis<W>(&self, writer: W) -> Result<()>
    where
        W: Write;

    /// Tries to write the graph to a file on disk in **Metis format**.
    ///
    /// # Errors
    /// Returns an error if the file cannot be created or written to.
    fn try_write_metis_file<P>(&self, path: P) -> Result<()>
    where
        P: AsRef<Path>;
}

impl<G> MetisWrite for G
where
    G: WeightedAdjacencyList,
{
    fn try_write_metis<W>(&self, writer: W) -> Result<()>
    where
        W: Write,
    {
        MetisWriter::default().try_write_graph(self, writer)
    }

    fn try_write_metis_file<P>(&self, path: P) -> Result<()>
    where
        P: AsRef<Path>,
    {
        MetisWriter::default().try_write_graph_file(self, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    fn write(graph: &CsrGraph, format: WeightFormat) -> Vec<String> {
        let mut buffer = Vec::new();
        MetisWriter::new()
            .weight_format(format)
            .try_write_graph(graph, &mut buffer)
            .unwrap();
        output_lines(buffer)
    }

    #[test]
    fn no_edges() {
        let g = CsrBuilder::new(&[], &[]).unwrap().build().unwrap();

        let mut buffer = Vec::new();
        g.try_write_metis(&mut buffer).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "1 0 001\n\n");
    }

    #[test]
    fn path() {
        let g = CsrBuilder::new(&[Edge(0, 1), Edge(1, 2)], &[0.5, 0.25])
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(
            write(&g, WeightFormat::Float),
            vec!["3 2 001", "2 0.5", "1 0.5 3 0.25", "2 0.25"]
        );
        assert_eq!(
            write(&g, WeightFormat::Int32),
            vec!["3 2 001", "2 1048575", "1 1048575 3 524287", "2 524287"]
        );
    }

    #[test]
    fn isolated_vertices_and_loops() {
        let g = CsrBuilder::new(&[Edge(3, 3), Edge(0, 3)], &[1.0, 0.125])
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(
            write(&g, WeightFormat::Float),
            vec!["4 2 001", "4 0.125", "", "", "4 1 4 1 1 0.125"]
        );
        assert_eq!(write(&g, WeightFormat::Int32)[4], "4 2097151 4 2097151 1 262143");
    }

    #[test]
    fn random_graphs_round_trip_through_text() {
        let rng = &mut Pcg64Mcg::seed_from_u64(5);

        for _ in 0..10 {
            let g = CsrGraph::try_from_edge_list(&random_weighted_edges(rng, 30, 100)).unwrap();
            let lines = write(&g, WeightFormat::Float);

            assert_eq!(lines.len() as u64, g.num_vertices() + 1);
            assert_eq!(lines[0], format!("{} {} 001", g.num_vertices(), g.num_edges() / 2));

            for (u, line) in lines[1..].iter().enumerate() {
                let tokens = line.split(' ').filter(|t| !t.is_empty()).collect::<Vec<_>>();
                assert_eq!(tokens.len() as u64, 2 * g.vertex_count(u as u64).unwrap());

                let nbs = tokens
                    .iter()
                    .step_by(2)
                    .map(|t| t.parse::<VertexId>().unwrap() - 1)
                    .collect::<Vec<_>>();
                let ws = tokens
                    .iter()
                    .skip(1)
                    .step_by(2)
                    .map(|t| t.parse::<Weight>().unwrap())
                    .collect::<Vec<_>>();

                assert_eq!(nbs.as_slice(), g.neighbors_of(u as u64).unwrap());
                assert_eq!(ws.as_slice(), g.weights_of(u as u64).unwrap());
            }
        }
    }

    #[test]
    fn write_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("path.metis");

        let g = CsrBuilder::new(&[Edge(0, 1)], &[0.5])
            .unwrap()
            .build()
            .unwrap();
        g.try_write_metis_file(&path).unwrap();

        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "2 1 001\n2 0.5\n1 0.5\n"
        );
    }

    #[test]
    fn write_failure_is_reported() {
        struct FailingWriter;

        impl Write for FailingWriter {
            fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::other("disk full"))
            }

            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let g = CsrBuilder::new(&[Edge(0, 1)], &[0.5])
            .unwrap()
            .build()
            .unwrap();
        assert!(matches!(
            g.try_write_metis(FailingWriter),
            Err(Error::Io(_))
        ));
    }
}
