//! # Configuration
//!
//! [`Config`] collects every option of a generation run. It is built once (usually from the
//! command line) and then passed by reference; the library itself keeps no global state.

use std::{fmt::Display, path::PathBuf, str::FromStr};

use crate::{
    error::Error,
    gens::{DEFAULT_EDGE_FACTOR, Kronecker, MAX_SCALE},
    io::{FileFormat, WeightFormat},
};

/// Output path used when none is given
pub const DEFAULT_OUTPUT: &str = "output.wel";

/// The scale of a Graph500 graph, i.e. the graph has `2^scale` vertices.
///
/// Parses either a number in `1..=42` or one of the named Graph500 classes:
/// ```
/// use kroncsr::config::Scale;
///
/// assert_eq!("toy".parse::<Scale>().unwrap(), Scale(26));
/// assert_eq!("Huge".parse::<Scale>().unwrap(), Scale(42));
/// assert_eq!("12".parse::<Scale>().unwrap(), Scale(12));
/// assert!("0".parse::<Scale>().is_err());
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Scale(pub u32);

impl Scale {
    /// Named scales of the Graph500 specification
    pub const CLASSES: [(&'static str, u32); 6] = [
        ("toy", 26),
        ("mini", 29),
        ("small", 32),
        ("medium", 36),
        ("large", 39),
        ("huge", 42),
    ];
}

impl FromStr for Scale {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let scale = match s.parse::<u32>() {
            Ok(scale) => scale,
            Err(_) => Self::CLASSES
                .iter()
                .find(|(name, _)| name.eq_ignore_ascii_case(s))
                .map(|&(_, scale)| scale)
                .ok_or_else(|| {
                    Error::InvalidArgument(format!(
                        "invalid scale `{s}', expected a number or a class name"
                    ))
                })?,
        };

        if !(1..=MAX_SCALE).contains(&scale) {
            return Err(Error::InvalidArgument(format!(
                "the scale must be in 1..={MAX_SCALE}, got {scale}"
            )));
        }

        Ok(Scale(scale))
    }
}

impl Display for Scale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// All options of a generation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// The graph has `2^scale` vertices
    pub scale: Scale,
    /// The graph has `edge_factor * 2^scale` edges
    pub edge_factor: u64,
    /// Destination; its extension selects the [`FileFormat`]
    pub output: PathBuf,
    /// Print weights as scaled integers instead of floats
    pub weights_as_int32: bool,
    /// Seed of the random number generator
    pub seed: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scale: Scale(Self::DEFAULT_SCALE),
            edge_factor: DEFAULT_EDGE_FACTOR,
            output: PathBuf::from(DEFAULT_OUTPUT),
            weights_as_int32: false,
            seed: 0,
        }
    }
}

impl Config {
    /// Scale of [`Config::default`]; small enough for tests
    pub const DEFAULT_SCALE: u32 = 10;

    /// The output format implied by the output path
    pub fn file_format(&self) -> FileFormat {
        FileFormat::from_path(&self.output)
    }

    pub fn weight_format(&self) -> WeightFormat {
        if self.weights_as_int32 {
            WeightFormat::Int32
        } else {
            WeightFormat::Float
        }
    }

    /// The generator configured by `self`
    pub fn generator(&self) -> Kronecker {
        Kronecker::new()
            .scale(self.scale.0)
            .edge_factor(self.edge_factor)
    }
}
