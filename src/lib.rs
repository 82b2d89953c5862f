use std::path::Path;

use graphs::RoadGraph;
use utility::get_progressspinner;

pub mod error;
pub mod graphs;
pub mod search;
pub mod session;
pub mod utility;

pub use error::{MapError, Result};

/// Loads the city and connection files while showing a spinner.
pub fn reading_road_graph(city_file: &Path, connection_file: &Path) -> Result<RoadGraph> {
    let spinner = get_progressspinner("Reading road graph");
    let graph = RoadGraph::from_files(city_file, connection_file);
    spinner.finish_and_clear();
    graph
}
