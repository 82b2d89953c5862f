use std::time::{Duration, Instant};

use indicatif::{ParallelProgressIterator, ProgressBar, ProgressStyle};
use rand::Rng;
use rayon::prelude::*;
use tracing_subscriber::EnvFilter;

use crate::{
    error::{MapError, Result},
    graphs::{
        path::{ShortestPathRequest, ShortestPathTestCase, ShortestPathTestTimingResult},
        RoadGraph,
    },
    search::{dijkstra::Dijkstra, PathFinding, WeightSelector},
};

/// Installs the log subscriber for the binaries. `RUST_LOG` wins over
/// `verbose`.
pub fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

pub fn get_progressspinner(job_name: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_message(job_name.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

fn progress_style() -> ProgressStyle {
    ProgressStyle::with_template("{wide_bar} {percent}% eta: {eta_precise}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
}

/// Draws `number_of_requests` random city pairs. Source and target may
/// coincide.
pub fn gen_requests<R: Rng>(
    graph: &RoadGraph,
    number_of_requests: u32,
    rng: &mut R,
) -> Vec<ShortestPathRequest> {
    let number_of_cities = graph.number_of_cities();
    if number_of_cities == 0 {
        return Vec::new();
    }

    (0..number_of_requests)
        .map(|_| {
            ShortestPathRequest::new(
                rng.gen_range(0..number_of_cities),
                rng.gen_range(0..number_of_cities),
            )
        })
        .collect()
}

/// Solves all requests in parallel and records the answers as test cases.
pub fn gen_test_cases(
    graph: &RoadGraph,
    requests: &[ShortestPathRequest],
    selector: WeightSelector,
) -> Result<Vec<ShortestPathTestCase>> {
    let dijkstra = Dijkstra::new(graph, selector);

    requests
        .par_iter()
        .progress_with_style(progress_style())
        .map(|request| -> Result<ShortestPathTestCase> {
            let path = dijkstra.shortest_path(request)?;
            Ok(ShortestPathTestCase {
                request: request.clone(),
                selector,
                weight: path.as_ref().map(|path| path.weight(selector)),
                edge_indices: path.map(|path| path.edge_indices),
            })
        })
        .collect()
}

/// Reruns every test case, timing each query, and fails on the first answer
/// that differs from the recorded one.
pub fn validate_and_time(
    test_cases: &[ShortestPathTestCase],
    graph: &RoadGraph,
) -> Result<Vec<ShortestPathTestTimingResult>> {
    test_cases
        .iter()
        .map(|test_case| -> Result<ShortestPathTestTimingResult> {
            let dijkstra = Dijkstra::new(graph, test_case.selector);

            let start = Instant::now();
            let path = dijkstra.shortest_path(&test_case.request)?;
            let timing_in_seconds = start.elapsed().as_secs_f64();

            let weight = path.as_ref().map(|path| path.weight(test_case.selector));
            let edge_indices = path.map(|path| path.edge_indices);
            if weight != test_case.weight || edge_indices != test_case.edge_indices {
                return Err(MapError::Validation(format!(
                    "wrong answer for {:?}: expected {:?} via {:?}, got {:?} via {:?}",
                    test_case.request, test_case.weight, test_case.edge_indices, weight, edge_indices
                )));
            }

            Ok(ShortestPathTestTimingResult {
                test_case: test_case.clone(),
                timing_in_seconds,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;
    use crate::graphs::{City, RoadEdge};

    fn get_small_graph() -> RoadGraph {
        let cities = (0..5)
            .map(|id| City::new(id, format!("City{}", id), "ST".to_string(), 0, id as i32))
            .collect();
        let edges = vec![
            RoadEdge::new(0, 1, 3.0, 30.0),
            RoadEdge::new(1, 2, 4.0, 10.0),
            RoadEdge::new(0, 2, 8.0, 20.0),
        ];
        RoadGraph::load(cities, edges).unwrap()
    }

    #[test]
    fn generated_test_cases_validate() {
        let graph = get_small_graph();
        let mut rng = StdRng::seed_from_u64(7);
        let requests = gen_requests(&graph, 40, &mut rng);
        assert_eq!(requests.len(), 40);

        for selector in [WeightSelector::Distance, WeightSelector::Time] {
            let test_cases = gen_test_cases(&graph, &requests, selector).unwrap();
            let results = validate_and_time(&test_cases, &graph).unwrap();
            assert_eq!(results.len(), requests.len());
        }
    }

    #[test]
    fn wrong_test_case_is_reported() {
        let graph = get_small_graph();
        let test_case = ShortestPathTestCase {
            request: ShortestPathRequest::new(0, 2),
            selector: WeightSelector::Distance,
            weight: Some(8.0),
            edge_indices: Some(vec![2]),
        };

        assert!(validate_and_time(&[test_case], &graph).is_err());
    }
}
