//! Shortest road distances from one city to every other.
//!
//! ```bash
//! RUST_LOG=info cargo run --features cli --bin road_paths -- tests/test_data/cities.csv --source F
//! ```

use clap::Parser;
use log::info;
use road_sssp::{
    Directedness, Graph, GraphConfig, IngestConfig, InvalidRowPolicy, RelaxationOptions,
    ShortestPaths, compute_with, load_rows,
};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Single-source shortest paths over a whitespace-separated edge list
#[derive(Parser, Debug)]
#[command(name = "road_paths")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Edge list with a `from to distance` header
    file: PathBuf,

    /// Source vertex label
    #[arg(short, long)]
    source: String,

    /// Relax edges only from `from` to `to`
    #[arg(long)]
    directed: bool,

    /// Drop malformed rows with a warning instead of failing
    #[arg(long)]
    skip_invalid: bool,

    /// Accept negative distances
    #[arg(long)]
    allow_negative: bool,

    /// Fail if a negative cycle is reachable from the source
    #[arg(long)]
    detect_negative_cycles: bool,

    /// Single-character field separator (default: any whitespace)
    #[arg(short, long)]
    delimiter: Option<char>,

    /// Print one JSON document instead of tables
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct Report<'a> {
    source: &'a str,
    predecessors: BTreeMap<&'a str, Option<&'a str>>,
    distances: BTreeMap<&'a str, road_sssp::Distance>,
    paths: BTreeMap<&'a str, Option<Vec<&'a str>>>,
}

fn step() {
    println!("\n{}\n", "-".repeat(50));
}

fn print_tables(result: &ShortestPaths<'_>) -> road_sssp::Result<()> {
    println!("Predecessors:");
    for (vertex, pred) in result.predecessors() {
        println!("  {:<12} {}", vertex, pred.unwrap_or("-"));
    }

    println!("\nOptimal values:");
    for (vertex, distance) in result.distances() {
        println!("  {:<12} {}", vertex, distance);
    }

    step();

    println!("Paths:");
    for (vertex, path) in result.paths()? {
        match path {
            Some(path) => println!("  {:<12} {}", vertex, path.join(" <- ")),
            None => println!("  {:<12} unreachable", vertex),
        }
    }
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    let ingest = IngestConfig {
        delimiter: cli.delimiter,
        ..IngestConfig::default()
    };
    let graph_config = GraphConfig {
        invalid_rows: if cli.skip_invalid {
            InvalidRowPolicy::Skip
        } else {
            InvalidRowPolicy::Reject
        },
        allow_negative_weights: cli.allow_negative,
    };
    let options = RelaxationOptions {
        directedness: if cli.directed {
            Directedness::Directed
        } else {
            Directedness::Undirected
        },
        detect_negative_cycles: cli.detect_negative_cycles,
    };

    let rows = load_rows(&cli.file, &ingest).await?;
    info!("Loaded {} rows", rows.len());

    let graph = Graph::from_rows(rows, &graph_config)?;
    let result = compute_with(&graph, &cli.source, &options)?;

    if cli.json {
        let report = Report {
            source: &cli.source,
            predecessors: result.predecessors().collect(),
            distances: result.distances().collect(),
            paths: result.paths()?.into_iter().collect(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_tables(&result)?;
    }

    Ok(())
}
