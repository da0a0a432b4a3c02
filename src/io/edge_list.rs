//! # EdgeList
//!
//! The weighted EdgeList-Format has no header. It consists of one line `u v w` per edge,
//! in generation order, where `u` and `v` are the (0-based) endpoints and `w` the weight.

use std::{io::Write, path::Path};

use super::*;

/// A writer for the weighted EdgeList-Format
#[derive(Debug, Clone, Default)]
pub struct EdgeListWriter {
    /// How weights are printed
    weight_format: WeightFormat,
}

impl EdgeListWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the weight format
    pub fn weight_format(mut self, format: WeightFormat) -> EdgeListWriter {
        self.weight_format = format;
        self
    }
}

impl GraphWriter<WeightedEdgeList> for EdgeListWriter {
    fn try_write_graph<W: Write>(&self, graph: &WeightedEdgeList, mut writer: W) -> Result<()> {
        for (Edge(u, v), w) in graph.iter() {
            writeln!(writer, "{u} {v} {}", self.weight_format.display(w))?;
        }

        writer.flush()?;
        Ok(())
    }
}

/// Trait for writing a graph to a writer in the EdgeList-Format.
/// Shorthand for default settings.
pub trait EdgeListWrite {
    /// Tries to write the graph to a writer
    fn try_write_edge_list<W: Write>(&self, writer: W) -> Result<()>;

    /// Tries to write the graph to a file
    fn try_write_edge_list_file<P: AsRef<Path>>(&self, path: P) -> Result<()>;
}

impl EdgeListWrite for WeightedEdgeList {
    fn try_write_edge_list<W: Write>(&self, writer: W) -> Result<()> {
        EdgeListWriter::default().try_write_graph(self, writer)
    }

    fn try_write_edge_list_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        EdgeListWriter::default().try_write_graph_file(self, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::*;

    #[test]
    fn one_line_per_edge() {
        let list = WeightedEdgeList::new(
            vec![Edge(3, 0), Edge(1, 1), Edge(3, 0)],
            vec![0.5, 0.75, 0.125],
        )
        .unwrap();

        let mut buffer = Vec::new();
        list.try_write_edge_list(&mut buffer).unwrap();
        assert_eq!(output_lines(buffer), vec!["3 0 0.5", "1 1 0.75", "3 0 0.125"]);

        let mut buffer = Vec::new();
        EdgeListWriter::new()
            .weight_format(WeightFormat::Int32)
            .try_write_graph(&list, &mut buffer)
            .unwrap();
        assert_eq!(output_lines(buffer), vec!["3 0 1048575", "1 1 1572863", "3 0 262143"]);
    }

    #[test]
    fn empty_list() {
        let mut buffer = Vec::new();
        WeightedEdgeList::default()
            .try_write_edge_list(&mut buffer)
            .unwrap();
        assert!(buffer.is_empty());
    }

    #[test]
    fn write_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.wel");

        let list = WeightedEdgeList::new(vec![Edge(0, 1)], vec![0.25]).unwrap();
        list.try_write_edge_list_file(&path).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "0 1 0.25\n");
    }
}
