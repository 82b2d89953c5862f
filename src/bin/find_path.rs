use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use city_paths::{
    graphs::{CityId, RoadGraph},
    reading_road_graph,
    search::{describe::describe, dijkstra::find_path, WeightSelector},
    utility::init_tracing,
};
use clap::Parser;

/// Finds the shortest route between two cities and prints it.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Tab-delimited city file: id, name, region, x, y
    #[arg(short, long)]
    cities: PathBuf,
    /// Tab-delimited connection file: edge id, city a, city b, distance, time
    #[arg(short = 'n', long)]
    connections: PathBuf,
    /// Source city as id, "Name, ST" or name
    #[arg(short, long)]
    source: String,
    /// Target city as id, "Name, ST" or name
    #[arg(short, long)]
    target: String,
    /// Attribute to minimize
    #[arg(short, long, value_enum, default_value_t = WeightSelector::Distance)]
    weight: WeightSelector,
    /// Print the path as JSON instead of a description
    #[arg(long)]
    json: bool,
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn resolve_city(graph: &RoadGraph, city: &str) -> Result<CityId> {
    if let Ok(id) = city.parse::<CityId>() {
        graph.city(id)?;
        return Ok(id);
    }

    graph
        .city_by_label(city)
        .or_else(|| graph.city_by_name(city))
        .ok_or_else(|| anyhow!("unknown city '{}'", city))
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let graph = reading_road_graph(&args.cities, &args.connections)
        .context("Failed to load the road graph")?;

    let source = resolve_city(&graph, &args.source)?;
    let target = resolve_city(&graph, &args.target)?;

    let path = find_path(&graph, source, target, args.weight)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&path)?);
    } else {
        println!("{}", describe(&graph, path.as_ref(), source)?);
    }

    Ok(())
}
