//! # Errors
//!
//! A single error type is shared by construction, queries and serialization.
//! Construction is all-or-nothing: whenever one of these errors is returned,
//! no partially built graph is observable by the caller.

use std::{collections::TryReserveError, path::PathBuf};

use thiserror::Error;

use crate::VertexId;

/// Shorthand used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// A required input is missing or inconsistent, or an output slot is already populated
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// One of the buffers of the CSR representation could not be allocated
    #[error("cannot allocate the {buffer} buffer for {len} entries")]
    OutOfMemory {
        buffer: &'static str,
        len: u64,
        #[source]
        source: Option<TryReserveError>,
    },

    /// A vertex query was issued with an id that is not part of the graph
    #[error("invalid vertex id {vertex}, the graph has {num_vertices} vertices")]
    OutOfRange {
        vertex: VertexId,
        num_vertices: u64,
    },

    /// The destination file could not be opened for writing
    #[error("cannot open the file `{}'", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing to an already opened destination failed
    #[error("error while writing the graph")]
    Io(#[from] std::io::Error),
}

/// Shorthand for returning `Err(Error::InvalidArgument)` early when a condition fails
macro_rules! raise_invalid_unless {
    ($cond : expr, $($info : tt)+) => {
        if !($cond) {
            return Err($crate::error::Error::InvalidArgument(format!($($info)+)));
        }
    };
}

pub(crate) use raise_invalid_unless;
