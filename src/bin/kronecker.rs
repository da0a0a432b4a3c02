//! Generate a Kronecker graph according to the Graph500 specification
//!
//! # Usage
//!
//! ```bash
//! # 2^20 vertices, 16 * 2^20 edges, weighted edge list
//! kronecker 20 graph.wel
//!
//! # Graph500 `toy` class as METIS graph with integer weights
//! kronecker toy graph.metis --int32-weights
//! ```

use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use kroncsr::{
    config::{Config, DEFAULT_OUTPUT, Scale},
    gens::{DEFAULT_EDGE_FACTOR, GraphGenerator},
    io::try_export,
};
use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "kronecker", version)]
#[command(
    about = "Generate a Kronecker graph according to the Graph500 specification v3",
    long_about = "Generates a graph with |V| = 2^scale vertices and |E| = edge_factor * |V| edges.\n\
                  Edges carry a weight in [0, 1), drawn from a uniform distribution.\n\n\
                  Output files ending in .metis or .graph are written in the METIS v5 format,\n\
                  every other file as a list of lines `vertex_1 vertex_2 weight`.\n\n\
                  Graph500 scales: toy = 26, mini = 29, small = 32, medium = 36, large = 39, huge = 42"
)]
struct Cli {
    /// The scale of the graph, either a number or a Graph500 class name
    scale: Scale,

    /// Destination file
    #[arg(default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Number of edges per vertex
    #[arg(short, long, default_value_t = DEFAULT_EDGE_FACTOR)]
    edge_factor: u64,

    /// Print weights as integers in 0..=2^31/1024 instead of floats
    #[arg(long)]
    int32_weights: bool,

    /// Seed of the random number generator
    #[arg(long, default_value_t = 0)]
    seed: u64,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Config {
            scale: cli.scale,
            edge_factor: cli.edge_factor,
            output: cli.output,
            weights_as_int32: cli.int32_weights,
            seed: cli.seed,
        }
    }
}

fn run(config: &Config) -> kroncsr::error::Result<()> {
    info!(
        "Scale: {}, edge factor: {}, output: {}",
        config.scale,
        config.edge_factor,
        config.output.display()
    );

    info!("Generating the graph...");
    let rng = &mut Pcg64Mcg::seed_from_u64(config.seed);
    let edge_list = config.generator().generate(rng);

    try_export(&edge_list, config)?;

    info!("Done");
    Ok(())
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from(Cli::parse());

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let mut message = err.to_string();
            let mut source = std::error::Error::source(&err);
            while let Some(cause) = source {
                message.push_str(&format!(": {cause}"));
                source = cause.source();
            }
            error!("{message}");
            ExitCode::FAILURE
        }
    }
}
