use std::{
    fs::File,
    io::{BufReader, BufWriter},
    path::PathBuf,
    time::Duration,
};

use anyhow::{Context, Result};
use city_paths::{
    graphs::path::ShortestPathTestCase,
    reading_road_graph,
    utility::{init_tracing, validate_and_time},
};
use clap::Parser;
use tracing::info;

/// Reruns stored test cases against the road graph, checks every answer and
/// reports the average query time.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Tab-delimited city file
    #[arg(short, long)]
    cities: PathBuf,
    /// Tab-delimited connection file
    #[arg(short = 'n', long)]
    connections: PathBuf,
    /// Path of the test cases
    #[arg(short, long)]
    test_cases: PathBuf,
    /// Path where the results shall be saved
    #[arg(short = 'r', long)]
    timing_results: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(0);

    info!("Reading test cases");
    let reader = BufReader::new(
        File::open(&args.test_cases)
            .with_context(|| format!("Failed to open {}", args.test_cases.display()))?,
    );
    let test_cases: Vec<ShortestPathTestCase> = serde_json::from_reader(reader)?;

    let graph = reading_road_graph(&args.cities, &args.connections)
        .context("Failed to load the road graph")?;

    info!("Testing & validating");
    let results = validate_and_time(&test_cases, &graph)?;
    let average = if results.is_empty() {
        0.0
    } else {
        results
            .iter()
            .map(|result| result.timing_in_seconds)
            .sum::<f64>()
            / results.len() as f64
    };
    let average = Duration::from_secs_f64(average);

    println!(
        "All correct. Took {:?} per query averaged over {} queries",
        average,
        test_cases.len()
    );

    if let Some(timing_results) = args.timing_results {
        info!("Writing timing results");
        let writer = BufWriter::new(File::create(timing_results)?);
        serde_json::to_writer(writer, &results)?;
    }

    Ok(())
}
