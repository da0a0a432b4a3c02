/*!
# IO

Writers for generated graphs.

## Output Formats

- **Metis**: the METIS v5 graph format with edge weights. Requires converting the edge list
  into a [`CsrGraph`] first.
- **EdgeList**: one line `u v weight` per generated edge, written directly from the
  [`WeightedEdgeList`].

The format of an output file is usually derived from its extension, see [`FileFormat::from_path`].

## Traits

- [`GraphWriter`] is implemented by the writer of each format.
- [`MetisWrite`] and [`EdgeListWrite`] are shorthands using the default writer settings.
*/

pub mod edge_list;
pub mod metis;

use std::{
    fmt::Display,
    fs::File,
    io::{BufWriter, Write},
    path::Path,
    str::FromStr,
};

use tracing::info;

use crate::{
    config::Config,
    error::{Error, Result},
    prelude::*,
};

pub use edge_list::*;
pub use metis::*;

/// Identifier for a graph file format.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum FileFormat {
    /// METIS v5 neighborhood-list format with edge weights
    Metis,
    /// Weighted edge list format
    EdgeList,
}

impl FileFormat {
    /// Picks the format based on the extension of `path`.
    ///
    /// `.metis` and `.graph` select [`FileFormat::Metis`], everything else (including no
    /// extension at all) selects [`FileFormat::EdgeList`].
    ///
    /// # Example
    /// ```
    /// use kroncsr::io::FileFormat;
    ///
    /// assert_eq!(FileFormat::from_path("g500.METIS"), FileFormat::Metis);
    /// assert_eq!(FileFormat::from_path("g500.wel"), FileFormat::EdgeList);
    /// ```
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        match path
            .as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_lowercase)
            .as_deref()
        {
            Some("metis" | "graph") => FileFormat::Metis,
            _ => FileFormat::EdgeList,
        }
    }
}

impl FromStr for FileFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "metis" => Ok(FileFormat::Metis),
            "edgelist" => Ok(FileFormat::EdgeList),
            _ => Err(Error::InvalidArgument(format!("Unknown FileFormat: {s}"))),
        }
    }
}

/// Textual representation of edge weights.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum WeightFormat {
    /// The shortest decimal text that reads back as the same `f32`
    #[default]
    Float,
    /// The weight scaled to `0..=i32::MAX`, truncated and divided by `1024`
    Int32,
}

impl WeightFormat {
    /// Maps a weight in `[0, 1]` to an integer in `0..=i32::MAX / 1024`.
    ///
    /// Scales first, truncates second and divides last.
    ///
    /// # Example
    /// ```
    /// use kroncsr::io::WeightFormat;
    ///
    /// assert_eq!(WeightFormat::scale_to_int32(1.0), i32::MAX / 1024);
    /// assert_eq!(WeightFormat::scale_to_int32(0.0), 0);
    /// ```
    pub fn scale_to_int32(weight: Weight) -> i32 {
        (weight as f64 * i32::MAX as f64) as i32 / 1024
    }

    /// Wraps `weight` so that it is displayed in this format
    pub fn display(self, weight: Weight) -> impl Display {
        FormattedWeight(weight, self)
    }
}

struct FormattedWeight(Weight, WeightFormat);

impl Display for FormattedWeight {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.1 {
            WeightFormat::Float => write!(f, "{}", self.0),
            WeightFormat::Int32 => write!(f, "{}", WeightFormat::scale_to_int32(self.0)),
        }
    }
}

/// Trait for types that can write graphs in a specific format.
///
/// This trait provides both a low-level method to write to any
/// [`Write`] instance and a convenience wrapper to write directly
/// to files.
pub trait GraphWriter<G> {
    /// Writes the given graph to the provided writer according to the settings in `self`.
    ///
    /// # Errors
    /// Returns [`Error::Io`] if writing fails.
    fn try_write_graph<W>(&self, graph: &G, writer: W) -> Result<()>
    where
        W: Write;

    /// Writes the given graph to a file according to the settings in `self`.
    /// An existing file is truncated.
    ///
    /// Internally wraps the file in a buffered writer.
    ///
    /// # Errors
    /// Returns [`Error::Open`] if the file cannot be created and [`Error::Io`] if writing fails.
    fn try_write_graph_file<P>(&self, graph: &G, path: P) -> Result<()>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        info!("Writing the graph to `{}' ...", path.display());

        let file = File::create(path).map_err(|source| Error::Open {
            path: path.to_path_buf(),
            source,
        })?;

        let mut writer = BufWriter::new(file);
        self.try_write_graph(graph, &mut writer)?;
        writer.flush()?;

        Ok(())
    }
}

/// Writes `edge_list` to `config.output` in the format implied by the output path.
///
/// For [`FileFormat::Metis`], the edge list is converted into a [`CsrGraph`] first.
///
/// # Errors
/// Returns any error of the conversion or of the selected writer.
pub fn try_export(edge_list: &WeightedEdgeList, config: &Config) -> Result<()> {
    let weight_format = config.weight_format();

    match config.file_format() {
        FileFormat::EdgeList => EdgeListWriter::new()
            .weight_format(weight_format)
            .try_write_graph_file(edge_list, &config.output),
        FileFormat::Metis => {
            let graph = CsrGraph::try_from_edge_list(edge_list)?;
            MetisWriter::new()
                .weight_format(weight_format)
                .try_write_graph_file(&graph, &config.output)
        }
    }
}
